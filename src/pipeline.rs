use std::{fs::File, io::Read, path::Path};

use sha2::{Digest, Sha256};

use crate::{
    cleaners::record_cleaner::RecordCleaner,
    enrichers::title_enricher::TitleEnricher,
    error::{PipelineError, RowError},
    loaders::csv_loader::CsvLoader,
    model::dataset::Dataset,
};

/// Result of the load/clean/enrich phase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreparedDataset {
    pub dataset: Dataset,
    /// Row-level problems, in the order they were found.
    pub errors: Vec<RowError>,
}

pub fn load_and_prepare<R: Read>(source: R) -> Result<PreparedDataset, PipelineError> {
    let loaded = CsvLoader::load(source)?;
    let mut errors = loaded.errors;

    let cleaned = RecordCleaner::clean(loaded.rows);
    let enriched = TitleEnricher::enrich(cleaned, &mut errors);
    let titles = RecordCleaner::remove_duplicate_titles(enriched);

    log::info!(
        "Prepared dataset with {} titles and {} row warnings",
        titles.len(),
        errors.len()
    );

    Ok(PreparedDataset {
        dataset: Dataset::new(titles),
        errors,
    })
}

pub fn load_and_prepare_path<P: AsRef<Path>>(path: P) -> Result<PreparedDataset, PipelineError> {
    let file = File::open(path.as_ref())?;
    load_and_prepare(file)
}

/// Keeps the last prepared dataset, keyed by the SHA-256 of its source bytes.
/// The phase is only rerun when the content changes.
#[derive(Debug, Default)]
pub struct DatasetCache {
    key: Option<String>,
    prepared: PreparedDataset,
}

impl DatasetCache {
    pub fn new() -> Self {
        DatasetCache::default()
    }

    pub fn content_key(bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        hex::encode(hasher.finalize())
    }

    pub fn get_or_prepare(&mut self, bytes: &[u8]) -> Result<&PreparedDataset, PipelineError> {
        let key = DatasetCache::content_key(bytes);

        if self.key.as_deref() == Some(key.as_str()) {
            log::debug!("Dataset cache hit for {}", key);
            return Ok(&self.prepared);
        }

        log::debug!("Dataset cache miss for {}, preparing", key);
        self.prepared = load_and_prepare(bytes)?;
        self.key = Some(key);
        Ok(&self.prepared)
    }

    pub fn cached_key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.prepared = PreparedDataset::default();
    }
}
