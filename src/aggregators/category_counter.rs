use std::collections::BTreeMap;

use crate::{aggregators::frequency_table::FrequencyTable, model::title::Title};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Country,
    Type,
    /// Flattened: a title counts once for each of its genres.
    Genre,
    YearAdded,
    MonthAdded,
    Rating,
}

impl Field {
    fn keys(&self, title: &Title) -> Vec<String> {
        match self {
            Field::Country => vec![title.country.clone()],
            Field::Type => vec![title.content_type.to_string()],
            Field::Genre => title.genres.clone(),
            Field::YearAdded => vec![title.year_added.to_string()],
            Field::MonthAdded => vec![title.month_added.to_string()],
            Field::Rating => title
                .rating
                .iter()
                .filter(|rating| !rating.trim().is_empty())
                .cloned()
                .collect(),
        }
    }
}

pub fn count_by<'a, I>(titles: I, field: Field) -> FrequencyTable
where
    I: IntoIterator<Item = &'a Title>,
{
    FrequencyTable::from_keys(titles.into_iter().flat_map(|title| field.keys(title)))
}

/// Titles added per year, ascending by year.
pub fn year_added_series<'a, I>(titles: I) -> Vec<(i32, usize)>
where
    I: IntoIterator<Item = &'a Title>,
{
    let mut series: BTreeMap<i32, usize> = BTreeMap::new();
    for title in titles {
        *series.entry(title.year_added).or_insert(0) += 1;
    }
    series.into_iter().collect()
}
