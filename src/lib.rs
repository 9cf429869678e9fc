pub mod aggregators;
pub mod cleaners;
pub mod enrichers;
pub mod error;
pub mod filters;
pub mod loaders;
pub mod model;
pub mod persisters;
pub mod pipeline;
pub mod text;

pub use aggregators::{
    category_counter::{count_by, year_added_series, Field},
    frequency_table::{top_n, FrequencyTable},
};
pub use error::{ExportError, PipelineError, RowError};
pub use filters::predicate_filter::{filter, FilteredView, PredicateSet};
pub use model::{
    dataset::Dataset,
    title::{ContentType, Title},
};
pub use pipeline::{load_and_prepare, load_and_prepare_path, DatasetCache, PreparedDataset};
pub use text::word_frequency::{titles_of, top_k, word_frequencies};

/// `count_by` under the name the dashboard layer uses.
pub fn aggregate<'a, I>(titles: I, field: Field) -> FrequencyTable
where
    I: IntoIterator<Item = &'a Title>,
{
    count_by(titles, field)
}
