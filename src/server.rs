use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::details::{NodeCaption, PersonDetails, person_details};
use crate::entity::{Id, Person};
use crate::error::ArvoreError;
use crate::interface::FamilyInterface;
use crate::label::label_relative_to;
use crate::layout::{LayoutEngine, LayoutProfile, LayoutResult};
use crate::search::{search, sorted_persons};
use crate::viewport::ViewportClass;

#[derive(Clone)]
pub struct AppState {
    pub interface: Arc<FamilyInterface>,
    /// Used by tree requests that do not report a window size.
    pub default_viewport: ViewportClass,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: String,
    pub error: String,
}

/// Failure of a request, rendered as a JSON `ErrorBody`.
#[derive(Debug)]
pub struct ApiError(pub ArvoreError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ArvoreError::PersonNotFound(_) => StatusCode::NOT_FOUND,
            ArvoreError::DataFormat { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ArvoreError> for ApiError {
    fn from(e: ArvoreError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = format!("{}", self.0);
        warn!(%msg, code=%status.as_u16(), "request error");
        let body = ErrorBody { status: "error".into(), error: msg };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<(StatusCode, Json<T>), ApiError>;

#[derive(Debug, Serialize)]
pub struct PersonSummary {
    pub id: Id,
    pub name: String,
    pub surname: String,
    pub sex_symbol: &'static str,
    pub birth_year: String,
}

impl From<&Person> for PersonSummary {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id().clone(),
            name: person.first_name().to_string(),
            surname: person.surname().to_string(),
            sex_symbol: person.sex().symbol(),
            birth_year: crate::dates::extract_year(person.birth_date()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PersonList {
    pub count: usize,
    pub persons: Vec<PersonSummary>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize, Default)]
pub struct TreeParams {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct TreeResponse {
    pub viewport: ViewportClass,
    pub layout: LayoutResult,
    pub captions: BTreeMap<Id, NodeCaption>,
    pub canvas_height: f64,
    pub elapsed_ms: f64,
}

#[derive(Deserialize)]
pub struct LayoutRequest {
    pub person: Id,
    #[serde(default)]
    pub profile: LayoutProfile,
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub status: String,
    pub persons: usize,
    pub elapsed_ms: f64,
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

pub async fn list_persons(State(state): State<AppState>) -> ApiResult<PersonList> {
    let store = state.interface.snapshot()?;
    let persons: Vec<PersonSummary> = sorted_persons(&store).into_iter().map(PersonSummary::from).collect();
    Ok((StatusCode::OK, Json(PersonList { count: persons.len(), persons })))
}

pub async fn get_person(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<PersonDetails> {
    let store = state.interface.snapshot()?;
    let details = person_details(&store, &Id::from(id))?;
    Ok((StatusCode::OK, Json(details)))
}

pub async fn search_persons(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<PersonList> {
    let started = Instant::now();
    let store = state.interface.snapshot()?;
    let persons: Vec<PersonSummary> = search(&store, &params.q).into_iter().map(PersonSummary::from).collect();
    info!(ms = elapsed_ms(started), hits = persons.len(), "search complete");
    Ok((StatusCode::OK, Json(PersonList { count: persons.len(), persons })))
}

pub async fn tree(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<TreeParams>,
) -> ApiResult<TreeResponse> {
    let started = Instant::now();
    let store = state.interface.snapshot()?;
    let focal = Id::from(id);
    let defaults = LayoutProfile::default();
    let (viewport, width, height) = match (params.width, params.height) {
        (Some(width), Some(height)) => (ViewportClass::classify(width, height), width, height),
        _ => (
            state.default_viewport,
            params.width.unwrap_or(defaults.container_width),
            params.height.unwrap_or(defaults.container_height),
        ),
    };
    let layout = LayoutEngine::new(&store).layout(&focal, &viewport.profile(width, height))?;

    let (name_len, surname_len) = viewport.caption_limits();
    let captions = layout
        .placed()
        .filter_map(|member| store.person(member))
        .map(|person| {
            let label = label_relative_to(&store, person.id(), &focal, viewport.max_ancestor_depth());
            (person.id().clone(), NodeCaption::new(person, label, name_len, surname_len))
        })
        .collect();
    let canvas_height = viewport.canvas_height(&layout, height);
    let elapsed_ms = elapsed_ms(started);
    info!(ms = elapsed_ms, focal = %focal, viewport = viewport.as_str(), placed = layout.positions.len(), "tree complete");
    Ok((StatusCode::OK, Json(TreeResponse { viewport, layout, captions, canvas_height, elapsed_ms })))
}

pub async fn layout(State(state): State<AppState>, Json(req): Json<LayoutRequest>) -> ApiResult<LayoutResult> {
    let started = Instant::now();
    let store = state.interface.snapshot()?;
    let result = LayoutEngine::new(&store).layout(&req.person, &req.profile)?;
    info!(ms = elapsed_ms(started), focal = %req.person, "layout complete");
    Ok((StatusCode::OK, Json(result)))
}

pub async fn reload(State(state): State<AppState>) -> ApiResult<ReloadResponse> {
    let started = Instant::now();
    let interface = Arc::clone(&state.interface);
    // file reads and parsing are synchronous
    let persons = tokio::task::spawn_blocking(move || interface.reload())
        .await
        .map_err(|e| {
            warn!(error=%e, "Join error");
            ApiError(ArvoreError::Lock(e.to_string()))
        })??;
    let elapsed_ms = elapsed_ms(started);
    info!(ms = elapsed_ms, persons, "reload complete");
    Ok((StatusCode::OK, Json(ReloadResponse { status: "ok".into(), persons, elapsed_ms })))
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);
    Router::new()
        .route("/v1/persons", get(list_persons))
        .route("/v1/persons/:id", get(get_person))
        .route("/v1/search", get(search_persons))
        .route("/v1/tree/:id", get(tree))
        .route("/v1/layout", post(layout))
        .route("/v1/reload", post(reload))
        .layer(cors)
        .with_state(state)
}
