use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentType {
    Movie,
    TvShow,
}

impl ContentType {
    /// Accepts the catalog spelling ("TV Show") as well as the compact one ("TVShow").
    pub fn parse(raw: &str) -> Option<ContentType> {
        let compact: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match compact.as_str() {
            "movie" => Some(ContentType::Movie),
            "tvshow" => Some(ContentType::TvShow),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A row as it comes out of the loader: every textual field kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawTitle {
    pub id: Option<String>,
    pub content_type: ContentType,
    pub title: String,
    pub director: String,
    pub cast: String,
    pub country: String,
    pub date_added: String,
    pub listed_in: String,
    pub release_year: Option<String>,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

impl RawTitle {
    pub fn has_required_fields(&self) -> bool {
        [&self.director, &self.cast, &self.country]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// A cleaned and enriched title, the unit every downstream stage works on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title {
    pub id: Option<String>,
    pub content_type: ContentType,
    pub title: String,
    pub director: String,
    pub cast: String,
    pub country: String,
    pub date_added: NaiveDate,
    pub year_added: i32,
    pub month_added: u32,
    pub listed_in: String,
    pub genres: Vec<String>,
    pub release_year: Option<String>,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

impl Title {
    pub fn csv_titles() -> Vec<&'static str> {
        vec!["Type", "Title", "Director", "Country", "Added", "Genres"]
    }

    pub fn to_csvable_array(&self) -> Vec<String> {
        vec![
            self.content_type.to_string(),
            self.title.clone(),
            self.director.clone(),
            self.country.clone(),
            self.date_added.to_string(),
            self.genres.join(", "),
        ]
    }
}
