use std::collections::HashSet;

use crate::model::{
    dataset::Dataset,
    title::{ContentType, Title},
};

/// A conjunction of predicates. Empty `types` or `countries` match nothing;
/// use [`PredicateSet::full`] to express "no restriction".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateSet {
    pub types: HashSet<ContentType>,
    pub countries: HashSet<String>,
    pub year_min: i32,
    pub year_max: i32,
}

impl PredicateSet {
    pub fn full(dataset: &Dataset) -> Self {
        let (year_min, year_max) = dataset.year_range().unwrap_or((i32::MAX, i32::MIN));
        PredicateSet {
            types: dataset.types().into_iter().collect(),
            countries: dataset.countries().into_iter().collect(),
            year_min,
            year_max,
        }
    }

    pub fn with_types<I: IntoIterator<Item = ContentType>>(mut self, types: I) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_years(mut self, year_min: i32, year_max: i32) -> Self {
        self.year_min = year_min;
        self.year_max = year_max;
        self
    }

    pub fn matches(&self, title: &Title) -> bool {
        self.types.contains(&title.content_type)
            && self.countries.contains(&title.country)
            && (self.year_min..=self.year_max).contains(&title.year_added)
    }
}

/// Borrowed, order-preserving subsequence of a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView<'a> {
    titles: Vec<&'a Title>,
}

impl<'a> FilteredView<'a> {
    pub fn titles(&self) -> &[&'a Title] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Title> + '_ {
        self.titles.iter().copied()
    }
}

impl<'a, 'v> IntoIterator for &'v FilteredView<'a> {
    type Item = &'a Title;
    type IntoIter = std::iter::Copied<std::slice::Iter<'v, &'a Title>>;

    fn into_iter(self) -> Self::IntoIter {
        self.titles.iter().copied()
    }
}

pub fn filter<'a>(dataset: &'a Dataset, predicates: &PredicateSet) -> FilteredView<'a> {
    FilteredView {
        titles: dataset.iter().filter(|t| predicates.matches(t)).collect(),
    }
}
