//! Kinship queries over a loaded [`EntityStore`].
//!
//! All queries are read-only and answer from the indices built at load time,
//! so each one costs O(marriages of the person asked about). Missing data is
//! never an error: an unknown person simply has no parents, children or
//! spouses.

use std::collections::HashSet;

use serde::Serialize;

use crate::entity::{Id, Marriage};
use crate::store::{EntityStore, IdHasher};

/// The recorded father and mother of somebody; either may be absent.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct Parents {
    pub father: Option<Id>,
    pub mother: Option<Id>,
}

impl Parents {
    pub fn is_empty(&self) -> bool {
        self.father.is_none() && self.mother.is_none()
    }
    /// Father first, then mother, skipping whichever is absent.
    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.father.iter().chain(self.mother.iter())
    }
}

impl EntityStore {
    fn marriages_of<'a>(&'a self, person: &Id) -> impl Iterator<Item = &'a Marriage> {
        self.marriages_by_person
            .lookup(person)
            .iter()
            .filter_map(|&position| self.marriages.at(position))
    }

    /// Parents from the person's single recorded family of birth.
    pub fn parents_of(&self, person: &Id) -> Parents {
        self.parents_by_child.get(person).cloned().unwrap_or_default()
    }

    /// Children from every marriage the person took part in, in marriage
    /// order and then relationship order, without duplicates.
    pub fn children_of(&self, person: &Id) -> Vec<Id> {
        let mut seen = HashSet::<&Id, IdHasher>::default();
        let mut children = Vec::new();
        for marriage in self.marriages_of(person) {
            for child in self.children_by_family.lookup(marriage.id()) {
                if seen.insert(child) {
                    children.push(child.clone());
                }
            }
        }
        children
    }

    /// The other party of each of the person's marriages, in marriage order.
    pub fn spouses_of(&self, person: &Id) -> Vec<Id> {
        self.marriages_of(person)
            .filter_map(|marriage| marriage.partner_of(person))
            .cloned()
            .collect()
    }

    /// Whether some marriage pairs `a` and `b`, in either role.
    pub fn are_spouses(&self, a: &Id, b: &Id) -> bool {
        self.marriages_of(a).any(|marriage| marriage.pairs(a, b))
    }

    /// Paternal and maternal grandparents, each side father then mother.
    pub fn grandparents_of(&self, person: &Id) -> (Parents, Parents) {
        let parents = self.parents_of(person);
        let side = |parent: &Option<Id>| {
            parent
                .as_ref()
                .map(|parent| self.parents_of(parent))
                .unwrap_or_default()
        };
        (side(&parents.father), side(&parents.mother))
    }
}
