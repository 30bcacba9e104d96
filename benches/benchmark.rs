use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use arvore::entity::{Id, Marriage, ParentChild, Person, Sex};
use arvore::layout::{LayoutEngine, LayoutProfile};
use arvore::search::search;
use arvore::store::EntityStore;

// Builds `generations` layers of couples; every couple has `children` kids,
// the first two sons marry into the next layer.
fn synthetic_family(generations: usize, children: usize) -> EntityStore {
    let mut persons = Vec::new();
    let mut marriages = Vec::new();
    let mut relationships = Vec::new();
    let mut couples = vec![(Id::from("root-h"), Id::from("root-w"))];
    persons.push(Person::new("root-h", "Raiz", "Antunes", Sex::Masculino));
    persons.push(Person::new("root-w", "Rosa", "Antunes", Sex::Feminino));

    for g in 0..generations {
        let mut next = Vec::new();
        for (c, (husband, wife)) in couples.iter().enumerate() {
            let marriage = format!("M{g}-{c}");
            marriages.push(Marriage::new(marriage.as_str(), Some(husband.clone()), Some(wife.clone())));
            for k in 0..children {
                let child = format!("P{g}-{c}-{k}");
                let sex = if k % 2 == 0 { Sex::Masculino } else { Sex::Feminino };
                persons.push(Person::new(child.as_str(), format!("Nome{k}"), format!("Familia{g}"), sex));
                relationships.push(ParentChild::new(marriage.as_str(), child.as_str()));
                if k < 4 && sex.is_masculine() {
                    let spouse = format!("S{g}-{c}-{k}");
                    persons.push(Person::new(spouse.as_str(), "Conjuge", "Externa", Sex::Feminino));
                    next.push((Id::from(child), Id::from(spouse)));
                }
            }
        }
        couples = next;
    }
    EntityStore::load(Vec::new(), persons, marriages, relationships)
}

fn bench_layout(c: &mut Criterion) {
    let store = synthetic_family(6, 5);
    let engine = LayoutEngine::new(&store);
    let focal = Id::from("P2-0-0");
    let profile = LayoutProfile::default();
    c.bench_function("layout with grandparents", |b| {
        b.iter(|| engine.layout(black_box(&focal), black_box(&profile)))
    });
}

fn bench_children(c: &mut Criterion) {
    let store = synthetic_family(6, 5);
    let parent = Id::from("P3-0-0");
    c.bench_function("children_of", |b| b.iter(|| store.children_of(black_box(&parent))));
}

fn bench_search(c: &mut Criterion) {
    let store = synthetic_family(6, 5);
    c.bench_function("search by surname", |b| b.iter(|| search(&store, black_box("familia3")).len()));
}

criterion_group!(benches, bench_layout, bench_children, bench_search);
criterion_main!(benches);
