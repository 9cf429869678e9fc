use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

use crate::{
    error::{PipelineError, RowError},
    loaders::schema::Schema,
    model::title::{ContentType, RawTitle},
};

/// Rows parsed from the source, each tagged with its 1-based line number.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadedRows {
    pub rows: Vec<(u64, RawTitle)>,
    pub errors: Vec<RowError>,
}

pub struct CsvLoader {}

impl CsvLoader {
    /// Reads the whole source once. Fails only when the header is unreadable or
    /// lacks a required column; malformed rows land in `errors`.
    pub fn load<R: Read>(source: R) -> Result<LoadedRows, PipelineError> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(source);
        let schema = Schema::validate(reader.headers()?)?;

        let mut loaded = LoadedRows::default();
        for (index, result) in reader.records().enumerate() {
            // header is line 1
            let fallback_line = index as u64 + 2;
            match result {
                Ok(record) => {
                    let line = record
                        .position()
                        .map(|p| p.line())
                        .unwrap_or(fallback_line);
                    match CsvLoader::parse_row(&schema, &record, line) {
                        Ok(row) => loaded.rows.push((line, row)),
                        Err(e) => {
                            log::warn!("{}", e);
                            loaded.errors.push(e);
                        }
                    }
                }
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(fallback_line);
                    let error = RowError::RowParse {
                        line,
                        reason: e.to_string(),
                    };
                    log::warn!("{}", error);
                    loaded.errors.push(error);
                }
            }
        }

        log::info!(
            "Loaded {} rows ({} rejected)",
            loaded.rows.len(),
            loaded.errors.len()
        );
        Ok(loaded)
    }

    fn parse_row(schema: &Schema, record: &StringRecord, line: u64) -> Result<RawTitle, RowError> {
        if record.len() != schema.width {
            return Err(RowError::RowParse {
                line,
                reason: format!("expected {} columns, found {}", schema.width, record.len()),
            });
        }

        let field = |index: usize| record.get(index).unwrap_or_default().to_string();
        let optional = |index: Option<usize>| index.map(|i| field(i));

        let raw_type = field(schema.content_type);
        let content_type = match ContentType::parse(&raw_type) {
            Some(t) => t,
            None => {
                return Err(RowError::RowParse {
                    line,
                    reason: format!("unknown type {:?}", raw_type),
                })
            }
        };

        Ok(RawTitle {
            id: optional(schema.id),
            content_type,
            title: field(schema.title),
            director: field(schema.director),
            cast: field(schema.cast),
            country: field(schema.country),
            date_added: field(schema.date_added),
            listed_in: field(schema.listed_in),
            release_year: optional(schema.release_year),
            rating: optional(schema.rating),
            duration: optional(schema.duration),
            description: optional(schema.description),
        })
    }
}
