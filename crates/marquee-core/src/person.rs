//! People, movie links and cast views

use serde::{Deserialize, Serialize};

/// A stored person row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub person_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub pay: i64,
}

/// Every mutable person field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub pay: i64,
}

impl NewPerson {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, pay: i64) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            pay,
        }
    }
}

/// A `movie_person` join row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieLink {
    pub movie_id: i64,
    pub person_id: i64,
}

/// A person attached to a movie, with the role label resolved across all
/// five role tables.
///
/// `role_type` and `detail` are `None` for people with no role record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub person_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub pay: i64,
    pub role_type: Option<String>,
    pub detail: Option<String>,
}
