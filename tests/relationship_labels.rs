mod common;

use arvore::entity::{Marriage, ParentChild, Person, Sex};
use arvore::label::{PARENTS_ONLY, RelationshipLabel, WITH_GRANDPARENTS, label_relative_to};
use arvore::store::EntityStore;
use common::*;

fn label(store: &EntityStore, candidate: &str, reference: &str) -> RelationshipLabel {
    label_relative_to(store, &id(candidate), &id(reference), WITH_GRANDPARENTS)
}

#[test]
fn small_family_labels() {
    let store = small_family();
    assert_eq!(label(&store, "P2", "P3"), RelationshipLabel::Father);
    assert_eq!(label(&store, "P1", "P3"), RelationshipLabel::Mother);
    assert_eq!(label(&store, "P3", "P1"), RelationshipLabel::Daughter);
    assert_eq!(label(&store, "P2", "P1"), RelationshipLabel::Husband);
    assert_eq!(label(&store, "P1", "P2"), RelationshipLabel::Wife);
    assert_eq!(label(&store, "P1", "P1"), RelationshipLabel::Myself);
}

#[test]
fn grandparents_by_side() {
    let store = costa_family();
    assert_eq!(label(&store, "G1", "P1"), RelationshipLabel::PaternalGrandfather);
    assert_eq!(label(&store, "G2", "P1"), RelationshipLabel::PaternalGrandmother);
    assert_eq!(label(&store, "G3", "P1"), RelationshipLabel::MaternalGrandfather);
    assert_eq!(label(&store, "G4", "P1"), RelationshipLabel::MaternalGrandmother);
    assert_eq!(label(&store, "C2", "P1"), RelationshipLabel::Son);
}

#[test]
fn depth_limits_grandparent_labels() {
    let store = costa_family();
    let limited = label_relative_to(&store, &id("G1"), &id("P1"), PARENTS_ONLY);
    assert_eq!(limited, RelationshipLabel::Unclassified);
}

#[test]
fn siblings_and_strangers_are_unclassified() {
    let store = costa_family();
    assert_eq!(label(&store, "X1", "P1"), RelationshipLabel::Unclassified);
    assert_eq!(label(&store, "nobody", "P1"), RelationshipLabel::Unclassified);
}

#[test]
fn unknown_sex_takes_feminine_label() {
    let store = EntityStore::load(
        vec![],
        vec![
            Person::new("A", "Alex", "Reis", Sex::Masculino),
            Person::new("B", "Kim", "Reis", Sex::Unknown),
            Person::new("K", "Sam", "Reis", Sex::Unknown),
        ],
        vec![Marriage::new("M1", Some(id("A")), Some(id("B")))],
        vec![ParentChild::new("M1", "K")],
    );
    assert_eq!(label(&store, "K", "A"), RelationshipLabel::Daughter);
    assert_eq!(label(&store, "B", "A"), RelationshipLabel::Wife);
}

#[test]
fn parent_rule_precedes_spouse_rule() {
    // a record error marrying a father to his own daughter
    let store = EntityStore::load(
        vec![],
        vec![
            Person::new("A", "Artur", "Reis", Sex::Masculino),
            Person::new("B", "Berta", "Reis", Sex::Feminino),
            Person::new("K", "Kátia", "Reis", Sex::Feminino),
        ],
        vec![
            Marriage::new("M1", Some(id("A")), Some(id("B"))),
            Marriage::new("M2", Some(id("A")), Some(id("K"))),
        ],
        vec![ParentChild::new("M1", "K")],
    );
    assert_eq!(label(&store, "A", "K"), RelationshipLabel::Father);
    assert_eq!(label(&store, "K", "A"), RelationshipLabel::Daughter);
}

#[test]
fn captions_and_serialized_names() {
    assert_eq!(RelationshipLabel::Mother.caption(), "Mãe");
    assert_eq!(RelationshipLabel::MaternalGrandfather.to_string(), "Avô M.");
    assert_eq!(serde_json::to_value(RelationshipLabel::Myself).expect("serialize"), "self");
    assert_eq!(
        serde_json::to_value(RelationshipLabel::PaternalGrandmother).expect("serialize"),
        "paternal_grandmother"
    );
}
