use std::collections::HashSet;

use crate::model::title::{RawTitle, Title};

pub struct RecordCleaner {}

impl RecordCleaner {
    /// Drops exact duplicates (first occurrence wins) and rows whose director,
    /// cast or country is blank. Order of the survivors is preserved.
    pub fn clean(rows: Vec<(u64, RawTitle)>) -> Vec<(u64, RawTitle)> {
        let total = rows.len();
        let deduplicated = RecordCleaner::remove_duplicates(rows);
        let duplicates = total - deduplicated.len();

        let cleaned: Vec<(u64, RawTitle)> = deduplicated
            .into_iter()
            .filter(|(line, row)| {
                let keep = row.has_required_fields();
                if !keep {
                    log::debug!("Dropping line {}: missing director, cast or country", line);
                }
                keep
            })
            .collect();

        log::info!(
            "Cleaner kept {} of {} rows ({} duplicates, {} incomplete)",
            cleaned.len(),
            total,
            duplicates,
            total - duplicates - cleaned.len()
        );
        cleaned
    }

    pub fn remove_duplicates(rows: Vec<(u64, RawTitle)>) -> Vec<(u64, RawTitle)> {
        let mut seen: HashSet<RawTitle> = HashSet::with_capacity(rows.len());
        rows.into_iter()
            .filter(|(_, row)| seen.insert(row.clone()))
            .collect()
    }

    /// Enrichment can turn distinct raw rows into equal titles (e.g. the same
    /// date written two ways), so titles get a first-occurrence pass too.
    pub fn remove_duplicate_titles(titles: Vec<Title>) -> Vec<Title> {
        let total = titles.len();
        let mut seen: HashSet<Title> = HashSet::with_capacity(total);
        let unique: Vec<Title> = titles
            .into_iter()
            .filter(|title| seen.insert(title.clone()))
            .collect();

        if unique.len() < total {
            log::info!(
                "Removed {} titles that became identical after enrichment",
                total - unique.len()
            );
        }
        unique
    }
}
