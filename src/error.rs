use thiserror::Error;

/// Errors that stop the pipeline before any dataset is produced.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Missing columns in dataset: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("Could not read catalog source: {0}")]
    Source(#[from] csv::Error),

    #[error("Could not open catalog source: {0}")]
    Io(#[from] std::io::Error),
}

/// Row-level problems. The offending row is skipped and loading continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("Line {line}: malformed row ({reason})")]
    RowParse { line: u64, reason: String },

    #[error("Line {line}: could not parse date_added {value:?}")]
    DateParse { line: u64, value: String },
}

impl RowError {
    pub fn line(&self) -> u64 {
        match self {
            RowError::RowParse { line, .. } | RowError::DateParse { line, .. } => *line,
        }
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Error when writing CSV file {file_name}: {source}")]
    Csv {
        file_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("Error when flushing file {file_name}: {source}")]
    Flush {
        file_name: String,
        #[source]
        source: std::io::Error,
    },
}
