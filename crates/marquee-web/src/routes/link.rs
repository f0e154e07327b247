use crate::extract::ApiJson;
use crate::routes::forms::lenient_i64;
use crate::{AppState, WebError};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use marquee_core::{CatalogError, MovieLink};
use serde::Deserialize;
use serde_json::{json, Value};

pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/api/link-person-to-movie", post(link_person))
        .route("/api/movie-person", get(list_links).delete(unlink_person))
}

#[derive(Debug, Deserialize)]
struct LinkRequest {
    #[serde(default, deserialize_with = "lenient_i64")]
    movie_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    person_id: Option<i64>,
}

impl LinkRequest {
    fn ids(&self, missing: &str) -> Result<(i64, i64), WebError> {
        match (self.movie_id, self.person_id) {
            (Some(movie_id), Some(person_id)) => Ok((movie_id, person_id)),
            _ => Err(WebError::bad_request(missing)),
        }
    }
}

async fn link_person(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LinkRequest>,
) -> Result<Json<Value>, WebError> {
    let (movie_id, person_id) = req.ids("movie_id and person_id required")?;

    match state.catalog.link(movie_id, person_id).await {
        Ok(()) => Ok(Json(json!({
            "success": true,
            "message": "Person successfully linked to movie.",
        }))),
        Err(CatalogError::DuplicateLink { .. }) => Ok(Json(json!({
            "message": "Person already linked to this movie.",
        }))),
        Err(e) => Err(e.into()),
    }
}

async fn unlink_person(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LinkRequest>,
) -> Result<Json<Value>, WebError> {
    let (movie_id, person_id) = req.ids("IDs required.")?;
    state.catalog.unlink(movie_id, person_id).await?;

    Ok(Json(json!({ "success": true, "message": "Link removed." })))
}

async fn list_links(State(state): State<AppState>) -> Result<Json<Vec<MovieLink>>, WebError> {
    Ok(Json(state.catalog.list_links().await?))
}
