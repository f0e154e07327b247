//! Filtered movie lookups and the producer cost query

use crate::extract::ApiPath;
use crate::{AppState, WebError};
use axum::{extract::State, routing::get, Json, Router};
use marquee_core::{Movie, Person, RoleKind};

pub fn search_routes() -> Router<AppState> {
    let router = Router::new()
        .route("/api/search/movies-by-year/{year}", get(movies_by_year))
        .route(
            "/api/search/most-expensive/{producer_id}",
            get(most_expensive),
        );

    // One `movies-by-<kind>` route per role table
    RoleKind::ALL.into_iter().fold(router, |router, kind| {
        router.route(
            &format!("/api/search/movies-by-{}/{{id}}", kind.table()),
            get(
                move |State(state): State<AppState>, ApiPath(record_id): ApiPath<i64>| async move {
                    movies_by_role(state, kind, record_id).await
                },
            ),
        )
    })
}

async fn movies_by_role(
    state: AppState,
    kind: RoleKind,
    record_id: i64,
) -> Result<Json<Vec<Movie>>, WebError> {
    Ok(Json(state.catalog.movies_by_role(kind, record_id).await?))
}

async fn movies_by_year(
    State(state): State<AppState>,
    ApiPath(year): ApiPath<i32>,
) -> Result<Json<Vec<Movie>>, WebError> {
    if !(0..=9999).contains(&year) {
        return Err(WebError::bad_request(format!("Invalid year {year}.")));
    }
    Ok(Json(state.catalog.movies_by_year(year).await?))
}

async fn most_expensive(
    State(state): State<AppState>,
    ApiPath(producer_id): ApiPath<i64>,
) -> Result<Json<Option<Person>>, WebError> {
    Ok(Json(
        state.catalog.most_expensive_for_producer(producer_id).await?,
    ))
}
