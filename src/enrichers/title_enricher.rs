use chrono::{Datelike, NaiveDate};

use crate::{
    error::RowError,
    model::title::{RawTitle, Title},
};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y"];
const GENRE_SEPARATOR: &str = ", ";

pub struct TitleEnricher {}

impl TitleEnricher {
    /// Derives add-date fields and the genre list. Rows with an unreadable
    /// `date_added` are dropped and reported in `errors`.
    pub fn enrich(rows: Vec<(u64, RawTitle)>, errors: &mut Vec<RowError>) -> Vec<Title> {
        let mut titles = Vec::with_capacity(rows.len());

        for (line, row) in rows {
            match TitleEnricher::enrich_row(row, line) {
                Ok(title) => titles.push(title),
                Err(e) => {
                    log::warn!("{}", e);
                    errors.push(e);
                }
            }
        }

        titles
    }

    fn enrich_row(row: RawTitle, line: u64) -> Result<Title, RowError> {
        let date_added = match TitleEnricher::parse_date(&row.date_added) {
            Some(date) => date,
            None => {
                return Err(RowError::DateParse {
                    line,
                    value: row.date_added,
                })
            }
        };
        let genres = TitleEnricher::split_genres(&row.listed_in);

        Ok(Title {
            id: row.id,
            content_type: row.content_type,
            title: row.title,
            director: row.director,
            cast: row.cast,
            country: row.country,
            date_added,
            year_added: date_added.year(),
            month_added: date_added.month(),
            listed_in: row.listed_in,
            genres,
            release_year: row.release_year,
            rating: row.rating,
            duration: row.duration,
            description: row.description,
        })
    }

    pub fn parse_date(raw: &str) -> Option<NaiveDate> {
        let trimmed = raw.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
    }

    pub fn split_genres(listed_in: &str) -> Vec<String> {
        if listed_in.is_empty() {
            return vec![];
        }

        listed_in
            .split(GENRE_SEPARATOR)
            .map(|genre| genre.trim().to_string())
            .collect()
    }
}
