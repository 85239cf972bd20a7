use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::{Health, Status};
use models::{kv, note, player, tag};

use crate::errors::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Full board snapshot: every note, every tag, every player name, and the
/// global lock flag. No pagination, no filtering.
#[derive(Serialize)]
pub struct BoardData {
    pub notes: Vec<note::Model>,
    pub tags: Vec<tag::Model>,
    pub players: Vec<String>,
    pub locked: bool,
}

#[derive(Deserialize)]
pub struct TagInput {
    pub name: String,
    pub color: String,
}

#[derive(Deserialize)]
pub struct PlayerInput {
    pub name: String,
}

#[derive(Deserialize)]
pub struct LockInput {
    pub locked: bool,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn get_data(State(state): State<AppState>) -> Result<Json<BoardData>, ApiError> {
    let notes = note::list(&state.db).await?;
    let tags = tag::list(&state.db).await?;
    let players = player::list_names(&state.db).await?;
    let locked = kv::get_locked(&state.db).await?;
    Ok(Json(BoardData { notes, tags, players, locked }))
}

async fn save_note(
    State(state): State<AppState>,
    Json(input): Json<note::Model>,
) -> Result<Json<Status>, ApiError> {
    note::upsert(&state.db, input).await?;
    Ok(Json(Status::ok()))
}

async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<Json<Status>, ApiError> {
    note::delete(&state.db, &note_id).await?;
    Ok(Json(Status::ok()))
}

async fn add_tag(
    State(state): State<AppState>,
    Json(input): Json<TagInput>,
) -> Result<Json<Status>, ApiError> {
    tag::add_if_absent(&state.db, &input.name, &input.color).await?;
    Ok(Json(Status::ok()))
}

async fn delete_tag(
    State(state): State<AppState>,
    Path(tag_name): Path<String>,
) -> Result<Json<Status>, ApiError> {
    tag::delete(&state.db, &tag_name).await?;
    Ok(Json(Status::ok()))
}

async fn add_player(
    State(state): State<AppState>,
    Json(input): Json<PlayerInput>,
) -> Result<Json<Status>, ApiError> {
    player::add_if_absent(&state.db, &input.name).await?;
    Ok(Json(Status::ok()))
}

async fn set_lock(
    State(state): State<AppState>,
    Json(input): Json<LockInput>,
) -> Result<Json<Status>, ApiError> {
    kv::set_locked(&state.db, input.locked).await?;
    Ok(Json(Status::ok()))
}

/// Build the full application router: static front-end assets, health, and
/// the board API.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let static_dir = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    // Public routes (static + health)
    let public = Router::new()
        .nest_service("/", static_dir)
        .route("/health", get(health));

    // Board API
    let api = Router::new()
        .route("/api/data", get(get_data))
        .route("/api/notes", post(save_note))
        .route("/api/notes/:note_id", delete(delete_note))
        .route("/api/tags", post(add_tag))
        .route("/api/tags/:tag_name", delete(delete_tag))
        .route("/api/players", post(add_player))
        .route("/api/lock", post(set_lock));

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
