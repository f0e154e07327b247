use crate::extract::{ApiJson, ApiPath};
use crate::routes::forms::{lenient_i64, PersonForm};
use crate::{AppState, WebError};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use marquee_core::{Movie, Person};
use serde::Deserialize;
use serde_json::{json, Value};

pub fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/api/person", post(create_person))
        .route("/api/persons", get(list_persons))
        .route(
            "/api/person/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
        .route("/api/person/{id}/movies", get(person_movies))
}

#[derive(Debug, Deserialize)]
struct CreatePersonRequest {
    #[serde(default)]
    person: PersonForm,
    #[serde(default, deserialize_with = "lenient_i64")]
    movie_id: Option<i64>,
}

async fn create_person(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreatePersonRequest>,
) -> Result<Json<Value>, WebError> {
    let (person, role) = req.person.for_creation()?;
    let person_id = state
        .catalog
        .create_person(person, role, req.movie_id)
        .await?;

    tracing::info!(person_id, movie_id = ?req.movie_id, "Person created");
    let message = if req.movie_id.is_some() {
        "Person added and linked to movie."
    } else {
        "Person added."
    };
    Ok(Json(json!({
        "success": true,
        "message": message,
        "person_id": person_id,
    })))
}

async fn list_persons(State(state): State<AppState>) -> Result<Json<Vec<Person>>, WebError> {
    Ok(Json(state.catalog.list_persons().await?))
}

async fn get_person(
    State(state): State<AppState>,
    ApiPath(person_id): ApiPath<i64>,
) -> Result<Json<Person>, WebError> {
    state
        .catalog
        .get_person(person_id)
        .await?
        .map(Json)
        .ok_or_else(|| WebError::NotFound(format!("Person {person_id} not found.")))
}

async fn update_person(
    State(state): State<AppState>,
    ApiPath(person_id): ApiPath<i64>,
    ApiJson(form): ApiJson<PersonForm>,
) -> Result<Json<Value>, WebError> {
    let (person, role) = form.for_update()?;
    let role_rewritten = state
        .catalog
        .update_person(person_id, person, role)
        .await?;

    tracing::debug!(person_id, role_rewritten, "Person updated");
    Ok(Json(json!({ "success": true, "message": "Person updated." })))
}

async fn delete_person(
    State(state): State<AppState>,
    ApiPath(person_id): ApiPath<i64>,
) -> Result<Json<Value>, WebError> {
    state.catalog.delete_person(person_id).await?;

    tracing::info!(person_id, "Person deleted");
    Ok(Json(json!({ "success": true, "message": "Person deleted." })))
}

async fn person_movies(
    State(state): State<AppState>,
    ApiPath(person_id): ApiPath<i64>,
) -> Result<Json<Vec<Movie>>, WebError> {
    Ok(Json(state.catalog.person_movies(person_id).await?))
}
