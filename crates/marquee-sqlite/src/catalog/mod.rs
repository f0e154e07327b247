//! Catalog data access
//!
//! The submodules hold synchronous functions over a `rusqlite::Connection`
//! (or a `Transaction` where atomicity matters). [`SqliteCatalog`] runs them
//! on the blocking pool and exposes them as a [`CatalogStore`].

pub mod composite;
pub mod link;
pub mod movie;
pub mod person;
pub mod role;
pub mod search;

use async_trait::async_trait;
use marquee_core::{
    CastMember, CatalogError, CatalogResult, CatalogStore, Movie, MovieLink, NewMovie, NewPerson,
    Person, RoleAssignment, RoleHolder, RoleKind, RoleUpdate,
};
use rusqlite::{Connection, Transaction};

use crate::connection::SqlitePool;
use crate::error::{SqliteError, SqliteResult};

/// SQLite implementation of CatalogStore
#[derive(Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    /// Create a catalog over the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Single statements and reads, outside a transaction
    async fn run<F, T>(&self, f: F) -> CatalogResult<T>
    where
        F: FnOnce(&Connection) -> SqliteResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || pool.with_connection(f))
            .await
            .map_err(|e| CatalogError::from(SqliteError::Task(e.to_string())))?
            .map_err(Into::into)
    }

    /// Multi-statement writes inside one IMMEDIATE transaction
    async fn write<F, T>(&self, f: F) -> CatalogResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> SqliteResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || pool.with_transaction(f))
            .await
            .map_err(|e| CatalogError::from(SqliteError::Task(e.to_string())))?
            .map_err(Into::into)
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalog {
    async fn create_movie(&self, new_movie: NewMovie) -> CatalogResult<i64> {
        self.run(move |conn| movie::insert_movie(conn, &new_movie)).await
    }

    async fn get_movie(&self, movie_id: i64) -> CatalogResult<Option<Movie>> {
        self.run(move |conn| movie::get_movie(conn, movie_id)).await
    }

    async fn list_movies(&self) -> CatalogResult<Vec<Movie>> {
        self.run(movie::list_movies).await
    }

    async fn update_movie(&self, movie_id: i64, new_movie: NewMovie) -> CatalogResult<()> {
        self.run(move |conn| movie::update_movie(conn, movie_id, &new_movie))
            .await
    }

    async fn delete_movie(&self, movie_id: i64) -> CatalogResult<()> {
        self.write(move |tx| {
            if movie::delete_movie(tx, movie_id)? {
                Ok(())
            } else {
                Err(SqliteError::NotFound(format!("Movie {} does not exist", movie_id)))
            }
        })
        .await
    }

    async fn movie_cast(&self, movie_id: i64) -> CatalogResult<Vec<CastMember>> {
        self.run(move |conn| search::movie_cast(conn, movie_id)).await
    }

    async fn movies_by_year(&self, year: i32) -> CatalogResult<Vec<Movie>> {
        self.run(move |conn| search::movies_by_year(conn, year)).await
    }

    async fn movies_by_role(&self, kind: RoleKind, record_id: i64) -> CatalogResult<Vec<Movie>> {
        self.run(move |conn| search::movies_by_role(conn, kind, record_id))
            .await
    }

    async fn create_person(
        &self,
        new_person: NewPerson,
        role: RoleAssignment,
        movie_id: Option<i64>,
    ) -> CatalogResult<i64> {
        self.write(move |tx| composite::create_person(tx, &new_person, &role, movie_id))
            .await
    }

    async fn create_movie_with_person(
        &self,
        new_movie: NewMovie,
        new_person: NewPerson,
        role: RoleAssignment,
    ) -> CatalogResult<(i64, i64)> {
        self.write(move |tx| composite::create_movie_with_person(tx, &new_movie, &new_person, &role))
            .await
    }

    async fn get_person(&self, person_id: i64) -> CatalogResult<Option<Person>> {
        self.run(move |conn| person::get_person(conn, person_id)).await
    }

    async fn list_persons(&self) -> CatalogResult<Vec<Person>> {
        self.run(person::list_persons).await
    }

    async fn update_person(
        &self,
        person_id: i64,
        new_person: NewPerson,
        role: Option<RoleUpdate>,
    ) -> CatalogResult<bool> {
        self.write(move |tx| composite::update_person(tx, person_id, &new_person, role.as_ref()))
            .await
    }

    async fn delete_person(&self, person_id: i64) -> CatalogResult<()> {
        self.write(move |tx| {
            if person::delete_person(tx, person_id)? {
                Ok(())
            } else {
                Err(SqliteError::NotFound(format!("Person {} does not exist", person_id)))
            }
        })
        .await
    }

    async fn person_movies(&self, person_id: i64) -> CatalogResult<Vec<Movie>> {
        self.run(move |conn| movie::person_movies(conn, person_id)).await
    }

    async fn role_holders(&self, kind: RoleKind) -> CatalogResult<Vec<RoleHolder>> {
        self.run(move |conn| role::list_role_holders(conn, kind)).await
    }

    async fn most_expensive_for_producer(
        &self,
        producer_id: i64,
    ) -> CatalogResult<Option<Person>> {
        self.run(move |conn| search::most_expensive_for_producer(conn, producer_id))
            .await
    }

    async fn link(&self, movie_id: i64, person_id: i64) -> CatalogResult<()> {
        self.run(move |conn| link::link_movie_person(conn, movie_id, person_id))
            .await
    }

    async fn unlink(&self, movie_id: i64, person_id: i64) -> CatalogResult<()> {
        self.run(move |conn| link::unlink_movie_person(conn, movie_id, person_id))
            .await
    }

    async fn list_links(&self) -> CatalogResult<Vec<MovieLink>> {
        self.run(link::list_links).await
    }
}
