//! Helpers for the free-text dates found in the person records.
//!
//! Dates are stored as written in the source registers, usually
//! `"12 Jan 1900"` with Portuguese month abbreviations, sometimes only a
//! year or a note such as `"c. 1850"`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::entity::Person;

lazy_static! {
    static ref YEAR: Regex = Regex::new(r"\b\d{4}\b").unwrap();
    // leading integer, trailing text ignored ("12," reads as 12)
    static ref LEADING_INT: Regex = Regex::new(r"^\s*([+-]?\d+)").unwrap();
}

const MONTHS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

pub const UNKNOWN_YEAR: &str = "?";
pub const UNKNOWN_DATE: &str = "Desconhecida";

/// First standalone four-digit number, or `"?"`.
pub fn extract_year(date: Option<&str>) -> String {
    date.and_then(|date| YEAR.find(date))
        .map(|year| year.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_YEAR.to_string())
}

/// `"12 Jan 1900"` becomes `"12/1/1900"`; anything else is returned as is.
///
/// Day and year are not checked against the calendar, so `"31 Fev 1921"`
/// gives `"31/2/1921"`.
pub fn format_date(date: Option<&str>) -> String {
    let Some(date) = date.filter(|date| !date.is_empty()) else {
        return UNKNOWN_DATE.to_string();
    };
    parse_date(date)
        .map(|(day, month, year)| format!("{}/{}/{}", day, month, year))
        .unwrap_or_else(|| date.to_string())
}

fn leading_int(text: &str) -> Option<i64> {
    LEADING_INT.captures(text)?.get(1)?.as_str().parse().ok()
}

fn parse_date(date: &str) -> Option<(i64, usize, i64)> {
    let parts: Vec<&str> = date.split(' ').collect();
    if parts.len() < 3 {
        return None;
    }
    let day = leading_int(parts[0])?;
    let month = MONTHS.iter().position(|m| *m == parts[1])? + 1;
    let year = leading_int(parts[2])?;
    Some((day, month, year))
}

/// `"1900"` or `"1900-1970"` for the tree node caption.
pub fn life_span(person: &Person) -> String {
    let birth = extract_year(person.birth_date());
    let death = extract_year(person.death_date());
    if death == UNKNOWN_YEAR { birth } else { format!("{}-{}", birth, death) }
}
