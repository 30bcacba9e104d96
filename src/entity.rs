//! Genealogy records as they arrive from the data files.
//!
//! Field names follow the JSON fixtures (`nome`, `sobrenome`, `marido`, ...)
//! so records can be deserialized without a mapping layer. Every record is
//! immutable after loading; the only derived value, the resolved birth place
//! name of a [`Person`], is filled in by the store while it builds its indices.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ------------- Id -------------
/// Opaque identifier shared by places, persons and marriages.
///
/// The data files use both strings and integers for identifiers, so `12` and
/// `"12"` deserialize to the same `Id`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}
impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
impl From<String> for Id {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Id(text),
            RawId::Signed(number) => Id(number.to_string()),
            RawId::Unsigned(number) => Id(number.to_string()),
        })
    }
}

// Optional references are frequently left as "" in hand-edited files.
fn blank_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Id>, D::Error> {
    let id = Option::<Id>::deserialize(deserializer)?;
    Ok(id.filter(|id| !id.is_blank()))
}

/// Anything kept by id in the store.
pub trait Keyed {
    fn key(&self) -> &Id;
}

// ------------- Place -------------
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Place {
    id: Id,
    #[serde(default)]
    nome: Option<String>,
}

impl Place {
    pub fn new(id: impl Into<Id>, nome: impl Into<String>) -> Self {
        Self { id: id.into(), nome: Some(nome.into()) }
    }
    pub fn name(&self) -> Option<&str> {
        self.nome.as_deref()
    }
}
impl Keyed for Place {
    fn key(&self) -> &Id {
        &self.id
    }
}

// ------------- Sex -------------
/// Recorded sex. Anything other than the two known tags reads as `Unknown`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Masculino,
    Feminino,
    #[default]
    Unknown,
}

impl Sex {
    pub fn is_masculine(self) -> bool {
        self == Sex::Masculino
    }
    pub fn symbol(self) -> &'static str {
        match self {
            Sex::Masculino => "♂",
            Sex::Feminino => "♀",
            Sex::Unknown => "?",
        }
    }
}

impl<'de> Deserialize<'de> for Sex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref().map(str::trim) {
            Some("masculino") => Sex::Masculino,
            Some("feminino") => Sex::Feminino,
            _ => Sex::Unknown,
        })
    }
}

// ------------- Person -------------
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Person {
    id: Id,
    #[serde(default)]
    nome: Option<String>,
    #[serde(default)]
    sobrenome: Option<String>,
    #[serde(default)]
    sexo: Sex,
    #[serde(default)]
    data_nascimento: Option<String>,
    #[serde(default)]
    data_falecimento: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    lugar_nascimento: Option<Id>,
    #[serde(default, deserialize_with = "blank_as_none")]
    lugar_falecimento: Option<Id>,
    // denormalized from the place lookup at load time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lugar_nascimento_nome: Option<String>,
}

impl Person {
    pub fn new(
        id: impl Into<Id>,
        nome: impl Into<String>,
        sobrenome: impl Into<String>,
        sexo: Sex,
    ) -> Self {
        Self {
            id: id.into(),
            nome: Some(nome.into()),
            sobrenome: Some(sobrenome.into()),
            sexo,
            data_nascimento: None,
            data_falecimento: None,
            lugar_nascimento: None,
            lugar_falecimento: None,
            lugar_nascimento_nome: None,
        }
    }
    pub fn born(mut self, date: Option<&str>, place: Option<Id>) -> Self {
        self.data_nascimento = date.map(str::to_string);
        self.lugar_nascimento = place;
        self
    }
    pub fn died(mut self, date: Option<&str>, place: Option<Id>) -> Self {
        self.data_falecimento = date.map(str::to_string);
        self.lugar_falecimento = place;
        self
    }
    pub fn id(&self) -> &Id {
        &self.id
    }
    /// First name, empty when unrecorded.
    pub fn first_name(&self) -> &str {
        self.nome.as_deref().unwrap_or("")
    }
    /// Surname, empty when unrecorded.
    pub fn surname(&self) -> &str {
        self.sobrenome.as_deref().unwrap_or("")
    }
    pub fn sex(&self) -> Sex {
        self.sexo
    }
    pub fn birth_date(&self) -> Option<&str> {
        self.data_nascimento.as_deref()
    }
    pub fn death_date(&self) -> Option<&str> {
        self.data_falecimento.as_deref()
    }
    pub fn birth_place(&self) -> Option<&Id> {
        self.lugar_nascimento.as_ref()
    }
    pub fn death_place(&self) -> Option<&Id> {
        self.lugar_falecimento.as_ref()
    }
    pub fn birth_place_name(&self) -> Option<&str> {
        self.lugar_nascimento_nome.as_deref()
    }
    pub(crate) fn resolve_birth_place(&mut self, name: Option<String>) {
        self.lugar_nascimento_nome = name;
    }
}
impl Keyed for Person {
    fn key(&self) -> &Id {
        &self.id
    }
}
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.first_name(), self.surname()) {
            ("", "") => write!(f, "[{}]", self.id),
            (nome, "") => write!(f, "{}", nome),
            ("", sobrenome) => write!(f, "{}", sobrenome),
            (nome, sobrenome) => write!(f, "{} {}", nome, sobrenome),
        }
    }
}

// ------------- Marriage -------------
/// A union of at most two people, anchoring the children born into it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Marriage {
    id: Id,
    #[serde(default, deserialize_with = "blank_as_none")]
    marido: Option<Id>,
    #[serde(default, deserialize_with = "blank_as_none")]
    esposa: Option<Id>,
}

impl Marriage {
    pub fn new(id: impl Into<Id>, marido: Option<Id>, esposa: Option<Id>) -> Self {
        Self { id: id.into(), marido, esposa }
    }
    pub fn id(&self) -> &Id {
        &self.id
    }
    pub fn husband(&self) -> Option<&Id> {
        self.marido.as_ref()
    }
    pub fn wife(&self) -> Option<&Id> {
        self.esposa.as_ref()
    }
    /// The other party of the union, if `person` takes part and the other
    /// side is recorded (and is somebody else).
    pub fn partner_of(&self, person: &Id) -> Option<&Id> {
        match (&self.marido, &self.esposa) {
            (Some(marido), Some(esposa)) if marido == esposa => None,
            (Some(marido), Some(esposa)) if marido == person => Some(esposa),
            (Some(marido), Some(esposa)) if esposa == person => Some(marido),
            _ => None,
        }
    }
    pub fn pairs(&self, a: &Id, b: &Id) -> bool {
        a != b && self.partner_of(a) == Some(b)
    }
}
impl Keyed for Marriage {
    fn key(&self) -> &Id {
        &self.id
    }
}

// ------------- ParentChild -------------
/// States that `filho` was born into the family unit `familia`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ParentChild {
    familia: Id,
    filho: Id,
}

impl ParentChild {
    pub fn new(familia: impl Into<Id>, filho: impl Into<Id>) -> Self {
        Self { familia: familia.into(), filho: filho.into() }
    }
    pub fn family(&self) -> &Id {
        &self.familia
    }
    pub fn child(&self) -> &Id {
        &self.filho
    }
}
