//! Everything the details panel shows about one person.

use serde::Serialize;

use crate::dates::{format_date, life_span};
use crate::entity::{Id, Person, Sex};
use crate::error::{ArvoreError, Result};
use crate::label::{RelationshipLabel, label_relative_to, PARENTS_ONLY};
use crate::store::EntityStore;

/// A relative listed in the panel, labelled relative to the subject.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Relative {
    pub id: Id,
    pub name: String,
    pub label: RelationshipLabel,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct PersonDetails {
    pub id: Id,
    pub name: String,
    pub surname: String,
    pub sex: Sex,
    pub birth: Option<String>,
    pub birth_place: Option<String>,
    pub death: Option<String>,
    pub death_place: Option<String>,
    pub parents: Vec<Relative>,
    pub spouses: Vec<Relative>,
    pub children: Vec<Relative>,
}

pub fn person_details(store: &EntityStore, id: &Id) -> Result<PersonDetails> {
    let person = store
        .person(id)
        .ok_or_else(|| ArvoreError::PersonNotFound(id.clone()))?;

    let relatives = |ids: Vec<Id>| -> Vec<Relative> {
        ids.iter()
            .filter_map(|relative| store.person(relative))
            .map(|relative| Relative {
                id: relative.id().clone(),
                name: relative.first_name().to_string(),
                label: label_relative_to(store, relative.id(), id, PARENTS_ONLY),
            })
            .collect()
    };

    // unresolved birth places still show their reference
    let birth_place = match (person.birth_place_name(), person.birth_place()) {
        (Some(name), _) => Some(name.to_string()),
        (None, Some(place)) => Some(format!("ID: {}", place)),
        (None, None) => None,
    };

    Ok(PersonDetails {
        id: person.id().clone(),
        name: person.first_name().to_string(),
        surname: person.surname().to_string(),
        sex: person.sex(),
        birth: person.birth_date().map(|date| format_date(Some(date))),
        birth_place,
        death: person.death_date().map(|date| format_date(Some(date))),
        death_place: store.place_name(person.death_place()).map(str::to_string),
        parents: relatives(store.parents_of(id).iter().cloned().collect()),
        spouses: relatives(store.spouses_of(id)),
        children: relatives(store.children_of(id)),
    })
}

/// Short display name: first name cut at `max_chars` with an ellipsis.
pub fn truncated(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}

/// Node caption pieces used by the tree view.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct NodeCaption {
    pub name: String,
    pub surname: String,
    pub life_span: String,
    pub relationship: String,
}

impl NodeCaption {
    pub fn new(person: &Person, label: RelationshipLabel, name_len: usize, surname_len: usize) -> Self {
        let name = if person.first_name().is_empty() { "Nome desconhecido" } else { person.first_name() };
        Self {
            name: truncated(name, name_len),
            surname: truncated(person.surname(), surname_len),
            life_span: life_span(person),
            relationship: label.caption().to_string(),
        }
    }
}
