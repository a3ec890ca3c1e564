//! Store schema and record types

use serde::{Deserialize, Serialize};

/// SQL schema for initialization
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS colleges (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    name_key TEXT NOT NULL,
    district TEXT NOT NULL,
    kind TEXT NOT NULL,
    courses TEXT NOT NULL,
    scholarships TEXT NOT NULL,
    link TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_colleges_name_key ON colleges(name_key);
"#;

/// A single college entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollegeRecord {
    /// Store-assigned row id, `None` until inserted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub district: String,
    /// College type, e.g. "Government" or "Private"
    #[serde(rename = "type")]
    pub kind: String,
    pub courses: String,
    pub scholarships: String,
    pub link: String,
}

impl CollegeRecord {
    /// Lowercased name used for the keyed index
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}
