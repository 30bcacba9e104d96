mod common;

use std::fs;
use std::sync::Arc;

use arvore::interface::FamilyInterface;
use arvore::layout::LayoutProfile;
use arvore::server::{
    AppState, LayoutRequest, SearchParams, TreeParams, get_person, layout, list_persons, reload,
    search_persons, tree,
};
use arvore::source::{MARRIAGES_FILE, PERSONS_FILE, PLACES_FILE, RELATIONSHIPS_FILE};
use arvore::store::EntityStore;
use arvore::viewport::ViewportClass;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::*;

fn setup(store: EntityStore) -> AppState {
    AppState {
        interface: Arc::new(FamilyInterface::new(store)),
        default_viewport: ViewportClass::Desktop,
    }
}

#[tokio::test]
async fn persons_are_listed_alphabetically() {
    let state = setup(costa_family());
    let (status, Json(body)) = list_persons(State(state)).await.expect("list ok");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.count, 11);
    assert_eq!(body.persons[0].name, "Ana");
    assert_eq!(body.persons[0].birth_year, "1950");
    assert_eq!(body.persons[0].sex_symbol, "♀");
}

#[tokio::test]
async fn unknown_person_is_not_found() {
    let state = setup(costa_family());
    let err = get_person(State(state), Path("nobody".to_string())).await.expect_err("missing person");
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn person_details_route() {
    let state = setup(costa_family());
    let (_, Json(details)) = get_person(State(state), Path("P1".to_string())).await.expect("details ok");
    assert_eq!(details.children.len(), 2);
}

#[tokio::test]
async fn search_route_ranks_hits() {
    let state = setup(costa_family());
    let params = SearchParams { q: "costa".to_string() };
    let (_, Json(body)) = search_persons(State(state), Query(params)).await.expect("search ok");
    assert_eq!(body.count, 5);
    assert_eq!(body.persons[0].name, "Ana");
}

#[tokio::test]
async fn desktop_tree_has_grandparent_captions() {
    let state = setup(costa_family());
    let params = TreeParams { width: Some(1000.0), height: Some(700.0) };
    let (_, Json(body)) = tree(State(state), Path("P1".to_string()), Query(params)).await.expect("tree ok");
    assert_eq!(body.viewport, ViewportClass::Desktop);
    assert_eq!(body.layout.positions.len(), 10);
    assert_eq!(body.captions.len(), 10);
    assert_eq!(body.captions[&id("G1")].relationship, "Avô P.");
    assert_eq!(body.captions[&id("P1")].relationship, "Eu");
    assert_eq!(body.captions[&id("G4")].name, "Esmeralda");
    assert_eq!(body.canvas_height, 535.0);
}

#[tokio::test]
async fn phone_tree_is_shallower() {
    let state = setup(costa_family());
    let params = TreeParams { width: Some(375.0), height: Some(812.0) };
    let (_, Json(body)) = tree(State(state), Path("P1".to_string()), Query(params)).await.expect("tree ok");
    assert_eq!(body.viewport, ViewportClass::MobilePortrait);
    assert_eq!(body.layout.generations.len(), 3);
    assert_eq!(body.captions[&id("F1")].relationship, "Pai");
    assert!(!body.captions.contains_key(&id("G4")));
    assert_eq!(body.canvas_height, 400.0);
}

#[tokio::test]
async fn tree_without_size_uses_default_viewport() {
    let mut state = setup(costa_family());
    state.default_viewport = ViewportClass::LargeDesktop;
    let (_, Json(body)) = tree(State(state), Path("P1".to_string()), Query(TreeParams::default()))
        .await
        .expect("tree ok");
    assert_eq!(body.viewport, ViewportClass::LargeDesktop);
    assert_eq!(body.layout.placement(&id("P1")).map(|p| p.width), Some(150.0));
}

#[tokio::test]
async fn explicit_layout_route() {
    let state = setup(small_family());
    let req = LayoutRequest { person: id("P3"), profile: LayoutProfile::default() };
    let (status, Json(result)) = layout(State(state.clone()), Json(req)).await.expect("layout ok");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result.generations.len(), 2);

    let req = LayoutRequest { person: id("P9"), profile: LayoutProfile::default() };
    let err = layout(State(state), Json(req)).await.expect_err("unknown focal");
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reload_swaps_store_or_keeps_previous() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join(PLACES_FILE), places().to_string()).expect("write");
    fs::write(dir.path().join(PERSONS_FILE), persons().to_string()).expect("write");
    fs::write(dir.path().join(MARRIAGES_FILE), marriages().to_string()).expect("write");
    fs::write(dir.path().join(RELATIONSHIPS_FILE), relationships().to_string()).expect("write");

    let interface = Arc::new(FamilyInterface::with_data_dir(EntityStore::new(), dir.path()));
    let state = AppState { interface: Arc::clone(&interface), default_viewport: ViewportClass::Desktop };
    let before = interface.snapshot().expect("snapshot");
    assert!(before.is_empty());

    let (_, Json(body)) = reload(State(state.clone())).await.expect("reload ok");
    assert_eq!(body.persons, 11);
    assert!(before.is_empty(), "earlier snapshots are unaffected");
    assert_eq!(interface.snapshot().expect("snapshot").persons().len(), 11);

    fs::write(dir.path().join(PERSONS_FILE), r#"{"id": "P1"}"#).expect("write");
    let err = reload(State(state)).await.expect_err("persons is not an array");
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(interface.snapshot().expect("snapshot").persons().len(), 11);
}

#[tokio::test]
async fn reload_without_data_dir_fails() {
    let state = setup(small_family());
    let err = reload(State(state)).await.expect_err("no data dir");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
