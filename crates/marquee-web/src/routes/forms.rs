//! Request bodies shared by the movie and person endpoints
//!
//! Front-end forms post every field as a string, so numeric and date fields
//! accept either their JSON type or text, with an empty string meaning
//! "not given".

use chrono::NaiveDate;
use marquee_core::{DetailField, NewMovie, NewPerson, RoleAssignment, RoleKind, RoleUpdate};
use serde::{de, Deserialize, Deserializer};

use crate::{Result, WebError};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MovieForm {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub release_date: Option<NaiveDate>,
    pub synopsis: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub rating: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub run_time: Option<i64>,
    pub category: Option<String>,
}

impl MovieForm {
    /// Validate the title, rejecting with `missing_title` when it is absent
    /// or blank.
    pub fn into_new_movie(self, missing_title: &str) -> Result<NewMovie> {
        let title = non_blank(self.title).ok_or_else(|| WebError::bad_request(missing_title))?;
        Ok(NewMovie {
            title,
            release_date: self.release_date,
            synopsis: self.synopsis,
            rating: self.rating,
            run_time: self.run_time,
            category: self.category,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PersonForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub pay: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub role: Option<String>,
    pub contribution: Option<String>,
    pub position: Option<String>,
}

impl PersonForm {
    fn identity(&self) -> Option<NewPerson> {
        let first_name = non_blank(self.first_name.clone())?;
        let last_name = non_blank(self.last_name.clone())?;
        Some(NewPerson::new(first_name, last_name, self.pay?))
    }

    fn kind(&self) -> Result<Option<RoleKind>> {
        match self.kind.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(kind) => Ok(Some(kind.parse()?)),
        }
    }

    /// The descriptive field that belongs to `kind`, if filled in
    fn detail(&self, kind: RoleKind) -> Option<String> {
        let value = match kind.detail() {
            DetailField::Role => &self.role,
            DetailField::Contribution => &self.contribution,
            DetailField::Position => &self.position,
        };
        non_blank(value.clone())
    }

    /// Person and role for a creation request; names, pay and type are all
    /// required, as is the descriptive field for the chosen type.
    pub fn for_creation(&self) -> Result<(NewPerson, RoleAssignment)> {
        let incomplete = || WebError::bad_request("Incomplete person data.");

        let person = self.identity().ok_or_else(incomplete)?;
        let kind = self.kind()?.ok_or_else(incomplete)?;
        let value = self.detail(kind).ok_or_else(|| {
            WebError::bad_request(format!(
                "Missing '{}' for {}.",
                kind.detail().column(),
                kind
            ))
        })?;

        Ok((person, RoleAssignment::new(kind, value)))
    }

    /// Person and optional role change for an update request
    pub fn for_update(&self) -> Result<(NewPerson, Option<RoleUpdate>)> {
        let person = self
            .identity()
            .ok_or_else(|| WebError::bad_request("Missing fields."))?;
        let role = self.kind()?.map(|kind| RoleUpdate {
            kind,
            value: self.detail(kind),
        });
        Ok((person, role))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

/// Accept `12`, `"12"` or `""` (absent)
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("expected an integer, got {text:?}")))
        }
    }
}

fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| de::Error::custom(format!("expected a YYYY-MM-DD date, got {text:?}"))),
    }
}
