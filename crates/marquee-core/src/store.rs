//! Storage contract for the catalog
//!
//! The router is handed an `Arc<dyn CatalogStore>` at startup and threads it
//! through every request. Composite operations are part of the contract so
//! that a backend can run them atomically.

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::movie::{Movie, NewMovie};
use crate::person::{CastMember, MovieLink, NewPerson, Person};
use crate::role::{RoleAssignment, RoleHolder, RoleKind, RoleUpdate};

/// Catalog storage operations
///
/// # Errors
///
/// Implementations classify known constraint violations
/// (`DuplicatePerson`, `DuplicateLink`, `ForeignKeyViolation`), report
/// missing rows addressed by primary key as `NotFound`, and pass every other
/// engine failure through as `Storage`.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    // ------------------------------------------------------------------
    // Movies
    // ------------------------------------------------------------------

    /// Insert a movie and return its id
    async fn create_movie(&self, movie: NewMovie) -> CatalogResult<i64>;

    async fn get_movie(&self, movie_id: i64) -> CatalogResult<Option<Movie>>;

    /// All movies in storage order
    async fn list_movies(&self) -> CatalogResult<Vec<Movie>>;

    /// Replace every mutable field of an existing movie
    async fn update_movie(&self, movie_id: i64, movie: NewMovie) -> CatalogResult<()>;

    /// Delete a movie together with its links, atomically
    async fn delete_movie(&self, movie_id: i64) -> CatalogResult<()>;

    /// People attached to a movie with their resolved role label
    async fn movie_cast(&self, movie_id: i64) -> CatalogResult<Vec<CastMember>>;

    /// Movies whose release date falls in `year`
    async fn movies_by_year(&self, year: i32) -> CatalogResult<Vec<Movie>>;

    /// Movies linked to the person behind a role record of `kind`
    async fn movies_by_role(&self, kind: RoleKind, record_id: i64) -> CatalogResult<Vec<Movie>>;

    // ------------------------------------------------------------------
    // People
    // ------------------------------------------------------------------

    /// Insert a person and their role record, optionally linking them to a
    /// movie. All steps commit together or not at all.
    async fn create_person(
        &self,
        person: NewPerson,
        role: RoleAssignment,
        movie_id: Option<i64>,
    ) -> CatalogResult<i64>;

    /// Insert a person, their role record and a movie, then link the two.
    ///
    /// Returns `(movie_id, person_id)`.
    async fn create_movie_with_person(
        &self,
        movie: NewMovie,
        person: NewPerson,
        role: RoleAssignment,
    ) -> CatalogResult<(i64, i64)>;

    async fn get_person(&self, person_id: i64) -> CatalogResult<Option<Person>>;

    /// All people in storage order
    async fn list_persons(&self) -> CatalogResult<Vec<Person>>;

    /// Replace the person's fields and, when `role` is given and a record of
    /// that kind already exists, its descriptive value.
    ///
    /// Returns whether a role record was rewritten.
    async fn update_person(
        &self,
        person_id: i64,
        person: NewPerson,
        role: Option<RoleUpdate>,
    ) -> CatalogResult<bool>;

    /// Delete a person, every role record they hold and all their links
    async fn delete_person(&self, person_id: i64) -> CatalogResult<()>;

    /// Movies a person is linked to
    async fn person_movies(&self, person_id: i64) -> CatalogResult<Vec<Movie>>;

    /// Holders of one role kind, joined with their names
    async fn role_holders(&self, kind: RoleKind) -> CatalogResult<Vec<RoleHolder>>;

    /// Highest paid person working on the movies of a producer record
    async fn most_expensive_for_producer(&self, producer_id: i64)
        -> CatalogResult<Option<Person>>;

    // ------------------------------------------------------------------
    // Links
    // ------------------------------------------------------------------

    async fn link(&self, movie_id: i64, person_id: i64) -> CatalogResult<()>;

    /// Remove a link; succeeds whether or not it existed
    async fn unlink(&self, movie_id: i64, person_id: i64) -> CatalogResult<()>;

    async fn list_links(&self) -> CatalogResult<Vec<MovieLink>>;
}
