//! Movie records

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A stored movie row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: i64,
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub synopsis: Option<String>,
    pub rating: Option<i64>,
    /// Running time in minutes
    pub run_time: Option<i64>,
    pub category: Option<String>,
}

impl Movie {
    /// Year component of the release date, if one is recorded
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }
}

/// Every mutable movie field. Used for both insert and full replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub synopsis: Option<String>,
    pub rating: Option<i64>,
    pub run_time: Option<i64>,
    pub category: Option<String>,
}

impl NewMovie {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn into_movie(self, movie_id: i64) -> Movie {
        Movie {
            movie_id,
            title: self.title,
            release_date: self.release_date,
            synopsis: self.synopsis,
            rating: self.rating,
            run_time: self.run_time,
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_movie_serializes_date_as_plain_iso() {
        let movie = NewMovie {
            release_date: NaiveDate::from_ymd_opt(2020, 3, 14),
            ..NewMovie::titled("Pi Day")
        }
        .into_movie(7);

        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["movie_id"], json!(7));
        assert_eq!(value["release_date"], json!("2020-03-14"));
        assert_eq!(value["synopsis"], serde_json::Value::Null);
        assert_eq!(movie.release_year(), Some(2020));
    }
}
