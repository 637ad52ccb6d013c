//! Board metadata as reported by the task service

use serde::{Deserialize, Serialize};

/// A task bucket inside a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group identifier (e.g. "topics")
    pub id: String,

    /// Display title
    pub title: String,
}

/// A typed metadata field shared by every item on a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column identifier (e.g. "date4")
    pub id: String,

    /// Display title
    pub title: String,

    /// Column type as named by the service ("date", "status", "people", ...)
    #[serde(rename = "type")]
    pub column_type: String,
}

impl Column {
    /// Check the column type, ignoring case
    pub fn is_type(&self, column_type: &str) -> bool {
        self.column_type.eq_ignore_ascii_case(column_type)
    }
}

/// A board with its groups and columns
///
/// Always fetched fresh; nothing in Docket caches board metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Board identifier
    pub id: String,

    /// Board name
    pub name: String,

    /// Groups in display order
    #[serde(default)]
    pub groups: Vec<Group>,

    /// Columns in display order
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// Find a group by id
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// First column whose type matches any of `types`
    pub fn first_column_of(&self, types: &[&str]) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| types.iter().any(|t| c.is_type(t)))
    }
}

/// An account on the task service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address, when the token may read it
    #[serde(default)]
    pub email: Option<String>,
}
