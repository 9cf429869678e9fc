//! Word counts for sizing a title word cloud.
//!
//! Tokens are the lowercase, whitespace-separated pieces of each title.
//! Punctuation stays attached (`"love,"` and `"love"` are different words)
//! and no stop words are removed.

use crate::{
    aggregators::frequency_table::{self, FrequencyTable},
    model::title::Title,
};

pub fn tokenize(title: &str) -> impl Iterator<Item = String> + '_ {
    title.split_whitespace().map(str::to_lowercase)
}

pub fn word_frequencies<I, S>(titles: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words: Vec<String> = titles
        .into_iter()
        .flat_map(|title| tokenize(title.as_ref()).collect::<Vec<_>>())
        .collect();

    FrequencyTable::from_keys(words)
}

pub fn top_k(table: &FrequencyTable, k: usize) -> Vec<(String, usize)> {
    frequency_table::top_n(table, k)
}

pub fn titles_of<'a, I>(titles: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Title>,
{
    titles.into_iter().map(|t| t.title.as_str()).collect()
}
