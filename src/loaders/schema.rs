use csv::StringRecord;

use crate::error::PipelineError;

pub const REQUIRED_COLUMNS: [&str; 7] = [
    "director",
    "cast",
    "country",
    "type",
    "title",
    "date_added",
    "listed_in",
];

/// Column positions resolved once from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub width: usize,
    pub director: usize,
    pub cast: usize,
    pub country: usize,
    pub content_type: usize,
    pub title: usize,
    pub date_added: usize,
    pub listed_in: usize,
    pub id: Option<usize>,
    pub release_year: Option<usize>,
    pub rating: Option<usize>,
    pub duration: Option<usize>,
    pub description: Option<usize>,
}

impl Schema {
    /// Checks the header for every required column. Runs before any row is parsed.
    pub fn validate(headers: &StringRecord) -> Result<Schema, PipelineError> {
        let names: Vec<&str> = headers.iter().map(|h| h.trim()).collect();
        let position = |column: &str| names.iter().position(|name| *name == column);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| position(column).is_none())
            .map(|column| column.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(PipelineError::MissingColumns { missing });
        }

        let required = |column: &str| position(column).unwrap_or_default();

        Ok(Schema {
            width: names.len(),
            director: required("director"),
            cast: required("cast"),
            country: required("country"),
            content_type: required("type"),
            title: required("title"),
            date_added: required("date_added"),
            listed_in: required("listed_in"),
            id: position("show_id"),
            release_year: position("release_year"),
            rating: position("rating"),
            duration: position("duration"),
            description: position("description"),
        })
    }
}
