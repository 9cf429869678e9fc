use std::collections::HashSet;

use crate::model::title::{ContentType, Title};

/// The cleaned, enriched catalog. Immutable once built by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    titles: Vec<Title>,
}

impl Dataset {
    pub fn new(titles: Vec<Title>) -> Self {
        Dataset { titles }
    }

    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Title> {
        self.titles.iter()
    }

    pub fn preview(&self, rows: usize) -> &[Title] {
        &self.titles[..rows.min(self.titles.len())]
    }

    /// Smallest and largest `year_added`, or `None` for an empty dataset.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let years = self.titles.iter().map(|t| t.year_added);
        let min = years.clone().min()?;
        let max = years.max()?;
        Some((min, max))
    }

    /// Distinct content types in first-seen order.
    pub fn types(&self) -> Vec<ContentType> {
        first_seen(self.titles.iter().map(|t| t.content_type))
    }

    /// Distinct countries in first-seen order.
    pub fn countries(&self) -> Vec<String> {
        first_seen(self.titles.iter().map(|t| t.country.clone()))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Title;
    type IntoIter = std::slice::Iter<'a, Title>;

    fn into_iter(self) -> Self::IntoIter {
        self.titles.iter()
    }
}

fn first_seen<T, I>(values: I) -> Vec<T>
where
    T: Clone + Eq + std::hash::Hash,
    I: Iterator<Item = T>,
{
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(v.clone())).collect()
}
