//! # Marquee Core
//!
//! Domain types and the storage contract for the Marquee movie catalog.
//!
//! The catalog tracks movies, people, role-specific employment records
//! (actor, actress, writer, director, producer) and the links between
//! people and movies. Storage backends implement [`CatalogStore`]; the web
//! layer only ever talks to that trait.
//!
//! ## Modules
//!
//! - [`movie`] - movie records and their inputs
//! - [`person`] - people, links and per-movie cast views
//! - [`role`] - the [`RoleKind`] lookup table and role records
//! - [`store`] - the async [`CatalogStore`] trait
//! - [`error`] - the [`CatalogError`] taxonomy

pub mod error;
pub mod movie;
pub mod person;
pub mod role;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use movie::{Movie, NewMovie};
pub use person::{CastMember, MovieLink, NewPerson, Person};
pub use role::{DetailField, RoleAssignment, RoleBinding, RoleHolder, RoleKind, RoleUpdate};
pub use store::CatalogStore;
