#![allow(dead_code)]

use arvore::entity::Id;
use arvore::store::EntityStore;
use serde_json::{Value, json};

pub fn id(s: &str) -> Id {
    Id::from(s)
}

pub fn ids(list: &[&str]) -> Vec<Id> {
    list.iter().map(|s| Id::from(*s)).collect()
}

/// Ana, Bento and their daughter Carla.
pub fn small_family() -> EntityStore {
    EntityStore::from_json_values(
        json!([]),
        json!([
            {"id": "P1", "nome": "Ana", "sobrenome": "Silva", "sexo": "feminino"},
            {"id": "P2", "nome": "Bento", "sobrenome": "Silva", "sexo": "masculino"},
            {"id": "P3", "nome": "Carla", "sobrenome": "Silva", "sexo": "feminino"}
        ]),
        json!([{"id": "M1", "marido": "P2", "esposa": "P1"}]),
        json!([{"familia": "M1", "filho": "P3"}]),
    )
    .expect("small family loads")
}

pub fn places() -> Value {
    json!([
        {"id": "L1", "nome": "Braga"},
        {"id": "L2", "nome": "Porto"}
    ])
}

pub fn persons() -> Value {
    json!([
        {"id": "G1", "nome": "Avelino", "sobrenome": "Costa", "sexo": "masculino"},
        {"id": "G2", "nome": "Beatriz", "sobrenome": "Costa", "sexo": "feminino"},
        {"id": "G3", "nome": "Duarte", "sobrenome": "Lima", "sexo": "masculino"},
        {"id": "G4", "nome": "Esmeralda", "sobrenome": "Lima", "sexo": "feminino"},
        {"id": "F1", "nome": "João", "sobrenome": "Costa", "sexo": "masculino"},
        {"id": "F2", "nome": "Maria", "sobrenome": "Lima", "sexo": "feminino"},
        {"id": "P1", "nome": "Ana", "sobrenome": "Costa", "sexo": "feminino",
         "data_nascimento": "12 Jan 1950", "lugar_nascimento": "L1",
         "data_falecimento": "3 Mar 2010", "lugar_falecimento": "L2"},
        {"id": "S1", "nome": "Bruno", "sobrenome": "Rocha", "sexo": "masculino"},
        {"id": "C1", "nome": "Carla", "sobrenome": "Rocha", "sexo": "feminino"},
        {"id": "C2", "nome": "Diogo", "sobrenome": "Rocha", "sexo": "masculino"},
        {"id": "X1", "nome": "Sofia", "sobrenome": "Costa", "sexo": "feminino"}
    ])
}

pub fn marriages() -> Value {
    json!([
        {"id": "MG1", "marido": "G1", "esposa": "G2"},
        {"id": "MG2", "marido": "G3", "esposa": "G4"},
        {"id": "MF", "marido": "F1", "esposa": "F2"},
        {"id": "MP", "marido": "S1", "esposa": "P1"}
    ])
}

pub fn relationships() -> Value {
    json!([
        {"familia": "MG1", "filho": "F1"},
        {"familia": "MG2", "filho": "F2"},
        {"familia": "MF", "filho": "P1"},
        {"familia": "MF", "filho": "X1"},
        {"familia": "MP", "filho": "C1"},
        {"familia": "MP", "filho": "C2"}
    ])
}

/// Three generations around Ana (P1): both sets of grandparents, her
/// parents and sister, her husband and their two children.
pub fn costa_family() -> EntityStore {
    EntityStore::from_json_values(places(), persons(), marriages(), relationships())
        .expect("costa family loads")
}
