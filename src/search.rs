//! Name search over the loaded persons.
//!
//! Matching ignores case and accents. Results are ranked by how closely the
//! term matches a first name, surname or full name, ties broken
//! alphabetically.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

use crate::entity::Person;
use crate::store::EntityStore;

// words shorter than this are ignored in multi-word matching
const MIN_PART_LEN: usize = 2;

/// Lowercases and strips combining accents (`"Conceição"` → `"conceicao"`).
pub fn normalize_search_text(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

struct Candidate<'a> {
    person: &'a Person,
    name: String,
    surname: String,
}

impl<'a> Candidate<'a> {
    fn new(person: &'a Person) -> Self {
        Self {
            person,
            name: normalize_search_text(person.first_name()),
            surname: normalize_search_text(person.surname()),
        }
    }
    fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
    fn matches(&self, term: &str) -> bool {
        if self.name.contains(term) || self.surname.contains(term) {
            return true;
        }
        let full = self.full_name();
        let full = full.trim();
        if full.contains(term) {
            return true;
        }
        let parts: Vec<&str> = term.split(' ').collect();
        parts.len() >= 2
            && parts
                .iter()
                .filter(|part| part.chars().count() >= MIN_PART_LEN)
                .all(|part| {
                    self.name.contains(part) || self.surname.contains(part) || full.contains(part)
                })
    }
    fn score(&self, term: &str) -> u32 {
        let mut score = 0;
        if self.name == term || self.surname == term {
            score += 10;
        }
        if self.full_name().trim() == term {
            score += 15;
        }
        if self.name.starts_with(term) {
            score += 5;
        }
        if self.name.find(term) == Some(0) {
            score += 4;
        }
        if self.surname.find(term) == Some(0) {
            score += 4;
        }
        if self.name.contains(term) {
            score += 3;
        }
        if self.surname.contains(term) {
            score += 3;
        }
        score
    }
}

/// Persons matching `term`, best match first. A blank term matches nobody.
pub fn search<'s>(store: &'s EntityStore, term: &str) -> Vec<&'s Person> {
    let term = normalize_search_text(term.trim());
    let term = term.split_whitespace().collect::<Vec<_>>().join(" ");
    if term.is_empty() {
        return Vec::new();
    }
    let mut hits: Vec<(u32, String, &Person)> = store
        .persons()
        .map(Candidate::new)
        .filter(|candidate| candidate.matches(&term))
        .map(|candidate| (candidate.score(&term), candidate.full_name(), candidate.person))
        .collect();
    hits.sort_by(|a, b| match b.0.cmp(&a.0) {
        Ordering::Equal => a.1.cmp(&b.1),
        other => other,
    });
    hits.into_iter().map(|(_, _, person)| person).collect()
}

/// Every person ordered by first name as listed in the sidebar. Accented
/// initials sort with their base letter (`Álvaro` before `Bruno`).
pub fn sorted_persons(store: &EntityStore) -> Vec<&Person> {
    let mut persons: Vec<&Person> = store.persons().collect();
    persons.sort_by_cached_key(|person| {
        let name = person.first_name();
        (normalize_search_text(name), name.to_lowercase())
    });
    persons
}
