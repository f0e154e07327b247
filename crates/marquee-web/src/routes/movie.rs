use crate::extract::{ApiJson, ApiPath};
use crate::routes::forms::{MovieForm, PersonForm};
use crate::{AppState, WebError};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use marquee_core::{CastMember, Movie};
use serde::Deserialize;
use serde_json::{json, Value};

pub fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/api/movie", post(create_movie))
        .route("/api/movies", get(list_movies))
        .route(
            "/api/movie/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .route("/api/movie/{id}/persons", get(movie_cast))
        .route("/api/addMovieAndPerson", post(create_movie_with_person))
}

async fn create_movie(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<MovieForm>,
) -> Result<Json<Value>, WebError> {
    let movie = form.into_new_movie("Title required")?;
    let movie_id = state.catalog.create_movie(movie).await?;

    tracing::info!(movie_id, "Movie created");
    Ok(Json(json!({ "success": true, "movie_id": movie_id })))
}

async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, WebError> {
    Ok(Json(state.catalog.list_movies().await?))
}

async fn get_movie(
    State(state): State<AppState>,
    ApiPath(movie_id): ApiPath<i64>,
) -> Result<Json<Movie>, WebError> {
    state
        .catalog
        .get_movie(movie_id)
        .await?
        .map(Json)
        .ok_or_else(|| WebError::NotFound(format!("Movie {movie_id} not found.")))
}

async fn update_movie(
    State(state): State<AppState>,
    ApiPath(movie_id): ApiPath<i64>,
    ApiJson(form): ApiJson<MovieForm>,
) -> Result<Json<Value>, WebError> {
    let movie = form.into_new_movie("Title required.")?;
    state.catalog.update_movie(movie_id, movie).await?;

    Ok(Json(json!({ "success": true, "message": "Movie updated." })))
}

async fn delete_movie(
    State(state): State<AppState>,
    ApiPath(movie_id): ApiPath<i64>,
) -> Result<Json<Value>, WebError> {
    state.catalog.delete_movie(movie_id).await?;

    tracing::info!(movie_id, "Movie deleted");
    Ok(Json(json!({ "success": true, "message": "Movie deleted." })))
}

async fn movie_cast(
    State(state): State<AppState>,
    ApiPath(movie_id): ApiPath<i64>,
) -> Result<Json<Vec<CastMember>>, WebError> {
    Ok(Json(state.catalog.movie_cast(movie_id).await?))
}

#[derive(Debug, Deserialize)]
struct MovieAndPersonRequest {
    #[serde(default)]
    movie: MovieForm,
    #[serde(default)]
    person: PersonForm,
}

async fn create_movie_with_person(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<MovieAndPersonRequest>,
) -> Result<Json<Value>, WebError> {
    let movie = req.movie.into_new_movie("Movie title required.")?;
    let (person, role) = req.person.for_creation()?;

    let (movie_id, person_id) = state
        .catalog
        .create_movie_with_person(movie, person, role)
        .await?;

    tracing::info!(movie_id, person_id, "Movie and person created");
    Ok(Json(json!({
        "success": true,
        "message": "Movie and person added successfully.",
        "movie_id": movie_id,
        "person_id": person_id,
    })))
}
