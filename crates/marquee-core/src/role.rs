//! Role kinds and role records
//!
//! Each [`RoleKind`] owns its own table and descriptive column. The mapping
//! lives in a single static table ([`RoleKind::binding`]) so storage and web
//! code never branch on the kind themselves.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Kind of employment record a person can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    Actor,
    Actress,
    Writer,
    Director,
    Producer,
}

/// Name of the descriptive column carried by a role table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Role,
    Contribution,
    Position,
}

impl DetailField {
    pub fn column(self) -> &'static str {
        match self {
            DetailField::Role => "role",
            DetailField::Contribution => "contribution",
            DetailField::Position => "position",
        }
    }
}

impl fmt::Display for DetailField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Storage and routing facts for one role kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleBinding {
    pub kind: RoleKind,
    /// Table holding the records, also the lowercase type name
    pub table: &'static str,
    /// Primary key column of the table
    pub id_column: &'static str,
    pub detail: DetailField,
    /// Human readable label used in cast listings
    pub label: &'static str,
    /// Collection segment used by the listing endpoint
    pub plural: &'static str,
}

// Indexed by `RoleKind as usize`; keep in declaration order.
static BINDINGS: [RoleBinding; 5] = [
    RoleBinding {
        kind: RoleKind::Actor,
        table: "actor",
        id_column: "actor_id",
        detail: DetailField::Role,
        label: "Actor",
        plural: "actors",
    },
    RoleBinding {
        kind: RoleKind::Actress,
        table: "actress",
        id_column: "actress_id",
        detail: DetailField::Role,
        label: "Actress",
        plural: "actresses",
    },
    RoleBinding {
        kind: RoleKind::Writer,
        table: "writer",
        id_column: "writer_id",
        detail: DetailField::Contribution,
        label: "Writer",
        plural: "writers",
    },
    RoleBinding {
        kind: RoleKind::Director,
        table: "director",
        id_column: "director_id",
        detail: DetailField::Position,
        label: "Director",
        plural: "directors",
    },
    RoleBinding {
        kind: RoleKind::Producer,
        table: "producer",
        id_column: "producer_id",
        detail: DetailField::Position,
        label: "Producer",
        plural: "producers",
    },
];

impl RoleKind {
    pub const ALL: [RoleKind; 5] = [
        RoleKind::Actor,
        RoleKind::Actress,
        RoleKind::Writer,
        RoleKind::Director,
        RoleKind::Producer,
    ];

    pub fn binding(self) -> &'static RoleBinding {
        &BINDINGS[self as usize]
    }

    pub fn table(self) -> &'static str {
        self.binding().table
    }

    pub fn detail(self) -> DetailField {
        self.binding().detail
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

impl FromStr for RoleKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        RoleKind::ALL
            .into_iter()
            .find(|kind| kind.table() == wanted)
            .ok_or_else(|| CatalogError::Validation(format!("Unknown person type '{s}'.")))
    }
}

/// A role record to create for a person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    pub kind: RoleKind,
    pub value: String,
}

impl RoleAssignment {
    pub fn new(kind: RoleKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Replacement for an existing role record; `None` keeps the stored value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleUpdate {
    pub kind: RoleKind,
    pub value: Option<String>,
}

/// A role record joined with the holder's name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleHolder {
    pub kind: RoleKind,
    pub record_id: i64,
    pub person_id: i64,
    pub detail: Option<String>,
    pub first_name: String,
    pub last_name: String,
}

// Emits the kind's own column names, e.g. `actor_id` + `role`.
impl Serialize for RoleHolder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let binding = self.kind.binding();
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry(binding.id_column, &self.record_id)?;
        map.serialize_entry("person_id", &self.person_id)?;
        map.serialize_entry(binding.detail.column(), &self.detail)?;
        map.serialize_entry("first_name", &self.first_name)?;
        map.serialize_entry("last_name", &self.last_name)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_binding_table_matches_kind_order() {
        for kind in RoleKind::ALL {
            assert_eq!(kind.binding().kind, kind);
        }
    }

    #[test]
    fn test_detail_columns() {
        assert_eq!(RoleKind::Actor.detail().column(), "role");
        assert_eq!(RoleKind::Actress.detail().column(), "role");
        assert_eq!(RoleKind::Writer.detail().column(), "contribution");
        assert_eq!(RoleKind::Director.detail().column(), "position");
        assert_eq!(RoleKind::Producer.detail().column(), "position");
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("actress".parse::<RoleKind>().unwrap(), RoleKind::Actress);
        assert_eq!(" Producer ".parse::<RoleKind>().unwrap(), RoleKind::Producer);

        let err = "grip".parse::<RoleKind>().unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn test_role_holder_uses_kind_columns() {
        let holder = RoleHolder {
            kind: RoleKind::Writer,
            record_id: 3,
            person_id: 9,
            detail: Some("screenplay".to_string()),
            first_name: "Nora".to_string(),
            last_name: "Ephron".to_string(),
        };

        let value = serde_json::to_value(&holder).unwrap();
        assert_eq!(
            value,
            json!({
                "writer_id": 3,
                "person_id": 9,
                "contribution": "screenplay",
                "first_name": "Nora",
                "last_name": "Ephron",
            })
        );
    }
}
