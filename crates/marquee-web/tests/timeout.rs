//! Request timeout enforced by the router's middleware stack

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use marquee_config::ServerConfig;
use marquee_core::{
    CastMember, CatalogResult, CatalogStore, Movie, MovieLink, NewMovie, NewPerson, Person,
    RoleAssignment, RoleHolder, RoleKind, RoleUpdate,
};
use marquee_web::{build_router, AppState};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// Catalog whose movie listing never answers within the request deadline
struct StalledCatalog;

#[async_trait]
impl CatalogStore for StalledCatalog {
    async fn create_movie(&self, _: NewMovie) -> CatalogResult<i64> {
        unreachable!()
    }
    async fn get_movie(&self, _: i64) -> CatalogResult<Option<Movie>> {
        unreachable!()
    }
    async fn list_movies(&self) -> CatalogResult<Vec<Movie>> {
        tokio::time::sleep(Duration::from_secs(10)).await;
        Ok(Vec::new())
    }
    async fn update_movie(&self, _: i64, _: NewMovie) -> CatalogResult<()> {
        unreachable!()
    }
    async fn delete_movie(&self, _: i64) -> CatalogResult<()> {
        unreachable!()
    }
    async fn movie_cast(&self, _: i64) -> CatalogResult<Vec<CastMember>> {
        unreachable!()
    }
    async fn movies_by_year(&self, _: i32) -> CatalogResult<Vec<Movie>> {
        unreachable!()
    }
    async fn movies_by_role(&self, _: RoleKind, _: i64) -> CatalogResult<Vec<Movie>> {
        unreachable!()
    }
    async fn create_person(
        &self,
        _: NewPerson,
        _: RoleAssignment,
        _: Option<i64>,
    ) -> CatalogResult<i64> {
        unreachable!()
    }
    async fn create_movie_with_person(
        &self,
        _: NewMovie,
        _: NewPerson,
        _: RoleAssignment,
    ) -> CatalogResult<(i64, i64)> {
        unreachable!()
    }
    async fn get_person(&self, _: i64) -> CatalogResult<Option<Person>> {
        unreachable!()
    }
    async fn list_persons(&self) -> CatalogResult<Vec<Person>> {
        Ok(Vec::new())
    }
    async fn update_person(&self, _: i64, _: NewPerson, _: Option<RoleUpdate>) -> CatalogResult<bool> {
        unreachable!()
    }
    async fn delete_person(&self, _: i64) -> CatalogResult<()> {
        unreachable!()
    }
    async fn person_movies(&self, _: i64) -> CatalogResult<Vec<Movie>> {
        unreachable!()
    }
    async fn role_holders(&self, _: RoleKind) -> CatalogResult<Vec<RoleHolder>> {
        unreachable!()
    }
    async fn most_expensive_for_producer(&self, _: i64) -> CatalogResult<Option<Person>> {
        unreachable!()
    }
    async fn link(&self, _: i64, _: i64) -> CatalogResult<()> {
        unreachable!()
    }
    async fn unlink(&self, _: i64, _: i64) -> CatalogResult<()> {
        unreachable!()
    }
    async fn list_links(&self) -> CatalogResult<Vec<MovieLink>> {
        unreachable!()
    }
}

fn app() -> axum::Router {
    let config = ServerConfig {
        static_dir: None,
        request_timeout_secs: 1,
        ..ServerConfig::default()
    };
    build_router(AppState::new(Arc::new(StalledCatalog)), &config)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_slow_request_answers_408() {
    let response = app().oneshot(get("/api/movies")).await.unwrap();
    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn test_fast_request_is_unaffected() {
    let response = app().oneshot(get("/api/persons")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
