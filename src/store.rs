use core::hash::BuildHasherDefault;
use std::collections::HashMap;
use std::hash::Hash;
use std::slice::Iter;

// we will use a fast hashing algo since every key here is a short id
use seahash::SeaHasher;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::entity::{Id, Keyed, Marriage, ParentChild, Person, Place};
use crate::error::{ArvoreError, Result};
use crate::relation::Parents;

pub type IdHasher = BuildHasherDefault<SeaHasher>;

// ------------- Keeper -------------
/// Owns records in input order and finds them by id.
///
/// When two records share an id the later one wins the lookup, but both
/// remain visible through `iter`.
#[derive(Debug)]
pub struct Keeper<T: Keyed> {
    kept: Vec<T>,
    lookup: HashMap<Id, usize, IdHasher>,
}
impl<T: Keyed> Keeper<T> {
    pub fn new() -> Self {
        Self {
            kept: Vec::new(),
            lookup: HashMap::default(),
        }
    }
    pub fn keep(&mut self, record: T) -> (usize, bool) {
        let position = self.kept.len();
        let previously_kept = self.lookup.insert(record.key().clone(), position).is_some();
        self.kept.push(record);
        (position, previously_kept)
    }
    pub fn get(&self, id: &Id) -> Option<&T> {
        self.lookup.get(id).map(|&position| &self.kept[position])
    }
    pub fn at(&self, position: usize) -> Option<&T> {
        self.kept.get(position)
    }
    pub fn contains(&self, id: &Id) -> bool {
        self.lookup.contains_key(id)
    }
    pub fn iter(&self) -> Iter<'_, T> {
        self.kept.iter()
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}
impl<T: Keyed> Default for Keeper<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ------------- Lookups -------------
/// One-to-many index that remembers insertion order per key.
#[derive(Debug)]
pub struct Lookup<K, V, H = IdHasher> {
    index: HashMap<K, Vec<V>, H>,
}
impl<K: Eq + Hash, V, H: std::hash::BuildHasher + Default> Lookup<K, V, H> {
    pub fn new() -> Self {
        Self {
            index: HashMap::<K, Vec<V>, H>::default(),
        }
    }
    pub fn insert(&mut self, key: K, value: V) {
        self.index.entry(key).or_default().push(value);
    }
    pub fn lookup(&self, key: &K) -> &[V] {
        self.index.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}
impl<K: Eq + Hash, V, H: std::hash::BuildHasher + Default> Default for Lookup<K, V, H> {
    fn default() -> Self {
        Self::new()
    }
}

// ------------- EntityStore -------------
/// The four genealogy collections plus the indices derived from them.
///
/// A store is built in one go by [`EntityStore::load`] and never changes
/// afterwards; replacing the data means building a new store.
#[derive(Debug, Default)]
pub struct EntityStore {
    pub(crate) places: Keeper<Place>,
    pub(crate) persons: Keeper<Person>,
    pub(crate) marriages: Keeper<Marriage>,
    pub(crate) relationships: Vec<ParentChild>,
    // family (marriage id) -> children, in relationship order
    pub(crate) children_by_family: Lookup<Id, Id>,
    pub(crate) parents_by_child: HashMap<Id, Parents, IdHasher>,
    // person -> positions in `marriages`, in marriage order
    pub(crate) marriages_by_person: Lookup<Id, usize>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from already-typed records, deriving every index.
    pub fn load(
        places: Vec<Place>,
        persons: Vec<Person>,
        marriages: Vec<Marriage>,
        relationships: Vec<ParentChild>,
    ) -> Self {
        let mut store = EntityStore::new();
        for place in places {
            store.places.keep(place);
        }
        for mut person in persons {
            let name = person
                .birth_place()
                .and_then(|place| store.places.get(place))
                .and_then(|place| place.name())
                .map(str::to_string);
            person.resolve_birth_place(name);
            store.persons.keep(person);
        }
        for marriage in marriages {
            let (position, _) = store.marriages.keep(marriage);
            let marriage = &store.marriages.kept[position];
            if let Some(marido) = marriage.husband() {
                store.marriages_by_person.insert(marido.clone(), position);
            }
            if let Some(esposa) = marriage.wife() {
                if marriage.husband() != Some(esposa) {
                    store.marriages_by_person.insert(esposa.clone(), position);
                }
            }
        }
        let mut dangling = 0usize;
        for relationship in &relationships {
            store
                .children_by_family
                .insert(relationship.family().clone(), relationship.child().clone());
            match store.marriages.get(relationship.family()) {
                Some(marriage) => {
                    store.parents_by_child.insert(
                        relationship.child().clone(),
                        Parents {
                            father: marriage.husband().cloned(),
                            mother: marriage.wife().cloned(),
                        },
                    );
                    if !store.persons.contains(relationship.child()) {
                        dangling += 1;
                    }
                }
                None => dangling += 1,
            }
        }
        store.relationships = relationships;
        info!(
            places = store.places.len(),
            persons = store.persons.len(),
            marriages = store.marriages.len(),
            relationships = store.relationships.len(),
            "entity store loaded"
        );
        if dangling > 0 {
            debug!(dangling, "relationship records with unresolved references skipped");
        }
        store
    }

    /// Builds a store from parsed JSON documents, one per collection.
    ///
    /// Every collection must be an array of records; anything else fails the
    /// whole load and no store is produced.
    pub fn from_json_values(
        places: Value,
        persons: Value,
        marriages: Value,
        relationships: Value,
    ) -> Result<Self> {
        let places = records::<Place>("places", places)?;
        let persons = records::<Person>("persons", persons)?;
        let marriages = records::<Marriage>("marriages", marriages)?;
        let relationships = records::<ParentChild>("relationships", relationships)?;
        Ok(Self::load(places, persons, marriages, relationships))
    }

    pub fn person(&self, id: &Id) -> Option<&Person> {
        self.persons.get(id)
    }
    pub fn place(&self, id: &Id) -> Option<&Place> {
        self.places.get(id)
    }
    pub fn contains_person(&self, id: &Id) -> bool {
        self.persons.contains(id)
    }
    /// Name of a place reference, when it resolves.
    pub fn place_name(&self, id: Option<&Id>) -> Option<&str> {
        id.and_then(|id| self.place(id)).and_then(Place::name)
    }
    pub fn persons(&self) -> Iter<'_, Person> {
        self.persons.iter()
    }
    pub fn places(&self) -> Iter<'_, Place> {
        self.places.iter()
    }
    pub fn marriages(&self) -> Iter<'_, Marriage> {
        self.marriages.iter()
    }
    pub fn relationships(&self) -> Iter<'_, ParentChild> {
        self.relationships.iter()
    }
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
            && self.persons.is_empty()
            && self.marriages.is_empty()
            && self.relationships.is_empty()
    }
}

fn records<T: DeserializeOwned>(collection: &str, value: Value) -> Result<Vec<T>> {
    let Value::Array(items) = value else {
        return Err(ArvoreError::data_format(collection, "expected an array of records"));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| {
            serde_json::from_value(item).map_err(|e| {
                ArvoreError::data_format(collection, format!("record {}: {}", position, e))
            })
        })
        .collect()
}
