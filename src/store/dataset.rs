//! Bundled seed dataset

use super::CollegeRecord;
use serde::Deserialize;

/// The seed dataset compiled into the binary.
pub const BUNDLED_DATASET: &str = include_str!("../../data/colleges.json");

/// Raw dataset entry as shipped in `data/colleges.json`.
///
/// Field names are the uppercase column headers of the source sheet. The
/// trailing space in `"LINK "` is present in the data and part of the
/// contract.
#[derive(Debug, Deserialize)]
struct RawCollege {
    #[serde(rename = "COLLEGE NAME", default)]
    name: String,
    #[serde(rename = "DISTRICT", default)]
    district: String,
    #[serde(rename = "TYPE", default)]
    kind: String,
    #[serde(rename = "COURSES", default)]
    courses: String,
    #[serde(rename = "SCHOLARSHIPS", default)]
    scholarships: String,
    #[serde(rename = "LINK ", default)]
    link: String,
}

impl From<RawCollege> for CollegeRecord {
    fn from(raw: RawCollege) -> Self {
        Self {
            id: None,
            name: raw.name,
            district: raw.district,
            kind: raw.kind,
            courses: raw.courses,
            scholarships: raw.scholarships,
            link: raw.link,
        }
    }
}

/// Parse a dataset document into records
pub fn parse_dataset(json: &str) -> Result<Vec<CollegeRecord>, serde_json::Error> {
    let raw: Vec<RawCollege> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(CollegeRecord::from).collect())
}
