//! Classifies how one person relates to another.

use std::fmt;

use serde::Serialize;

use crate::entity::{Id, Sex};
use crate::relation::Parents;
use crate::store::EntityStore;

/// How a candidate person relates to a reference person.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipLabel {
    #[serde(rename = "self")]
    Myself,
    Father,
    Mother,
    Son,
    Daughter,
    Husband,
    Wife,
    PaternalGrandfather,
    PaternalGrandmother,
    MaternalGrandfather,
    MaternalGrandmother,
    Unclassified,
}

impl RelationshipLabel {
    /// Short caption shown on a tree node.
    pub fn caption(self) -> &'static str {
        match self {
            RelationshipLabel::Myself => "Eu",
            RelationshipLabel::Father => "Pai",
            RelationshipLabel::Mother => "Mãe",
            RelationshipLabel::Son => "Filho",
            RelationshipLabel::Daughter => "Filha",
            RelationshipLabel::Husband => "Marido",
            RelationshipLabel::Wife => "Esposa",
            RelationshipLabel::PaternalGrandfather => "Avô P.",
            RelationshipLabel::PaternalGrandmother => "Avó P.",
            RelationshipLabel::MaternalGrandfather => "Avô M.",
            RelationshipLabel::MaternalGrandmother => "Avó M.",
            RelationshipLabel::Unclassified => "Selecionado",
        }
    }

    // Anything but the masculine tag, unknown included, takes the feminine label.
    fn child_by_sex(sex: Sex) -> Self {
        if sex.is_masculine() { RelationshipLabel::Son } else { RelationshipLabel::Daughter }
    }
    fn spouse_by_sex(sex: Sex) -> Self {
        if sex.is_masculine() { RelationshipLabel::Husband } else { RelationshipLabel::Wife }
    }
}

impl fmt::Display for RelationshipLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.caption())
    }
}

/// No ancestors beyond parents are classified.
pub const PARENTS_ONLY: u8 = 0;
/// Grandparents are classified as well.
pub const WITH_GRANDPARENTS: u8 = 1;

/// Labels `candidate` relative to `reference`.
///
/// The first matching rule wins: identity, parent, child, spouse, then
/// (when `max_ancestor_depth` is at least one) grandparent on the father's
/// side before the mother's. Anything else is `Unclassified`.
pub fn label_relative_to(
    store: &EntityStore,
    candidate: &Id,
    reference: &Id,
    max_ancestor_depth: u8,
) -> RelationshipLabel {
    if candidate == reference {
        return RelationshipLabel::Myself;
    }
    let sex = store.person(candidate).map(|p| p.sex()).unwrap_or_default();

    let parents = store.parents_of(reference);
    if parents.father.as_ref() == Some(candidate) {
        return RelationshipLabel::Father;
    }
    if parents.mother.as_ref() == Some(candidate) {
        return RelationshipLabel::Mother;
    }
    if store.children_of(reference).contains(candidate) {
        return RelationshipLabel::child_by_sex(sex);
    }
    if store.are_spouses(candidate, reference) {
        return RelationshipLabel::spouse_by_sex(sex);
    }
    if max_ancestor_depth >= WITH_GRANDPARENTS {
        if let Some(label) = grandparent_label(store, &parents, candidate) {
            return label;
        }
    }
    RelationshipLabel::Unclassified
}

fn grandparent_label(store: &EntityStore, parents: &Parents, candidate: &Id) -> Option<RelationshipLabel> {
    if let Some(father) = &parents.father {
        let paternal = store.parents_of(father);
        if paternal.father.as_ref() == Some(candidate) {
            return Some(RelationshipLabel::PaternalGrandfather);
        }
        if paternal.mother.as_ref() == Some(candidate) {
            return Some(RelationshipLabel::PaternalGrandmother);
        }
    }
    if let Some(mother) = &parents.mother {
        let maternal = store.parents_of(mother);
        if maternal.father.as_ref() == Some(candidate) {
            return Some(RelationshipLabel::MaternalGrandfather);
        }
        if maternal.mother.as_ref() == Some(candidate) {
            return Some(RelationshipLabel::MaternalGrandmother);
        }
    }
    None
}
