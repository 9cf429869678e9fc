use std::collections::HashMap;

/// Category -> count, ordered by descending count. Ties keep first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Counts `keys` and sorts the result. The sort is stable, so keys with
    /// equal counts stay in the order they were first seen.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<(String, usize)> = vec![];

        for key in keys {
            let key = key.as_ref();
            match positions.get(key) {
                Some(&position) => entries[position].1 += 1,
                None => {
                    positions.insert(key.to_string(), entries.len());
                    entries.push((key.to_string(), 1));
                }
            }
        }

        FrequencyTable::sorted(entries)
    }

    fn sorted(mut entries: Vec<(String, usize)>) -> Self {
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        FrequencyTable { entries }
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, usize)> {
        self.entries.iter()
    }

    /// Multiset union. Ties are ordered by position in `self`, then in `other`.
    pub fn merge(&self, other: &FrequencyTable) -> FrequencyTable {
        let mut entries = self.entries.clone();
        let mut positions: HashMap<&str, usize> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, (key, _))| (key.as_str(), i))
            .collect();

        for (key, count) in other.iter() {
            match positions.get(key.as_str()) {
                Some(&position) => entries[position].1 += count,
                None => {
                    positions.insert(key.as_str(), entries.len());
                    entries.push((key.clone(), *count));
                }
            }
        }

        FrequencyTable::sorted(entries)
    }

    pub fn into_map(self) -> HashMap<String, usize> {
        self.entries.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a (String, usize);
    type IntoIter = std::slice::Iter<'a, (String, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The first `n` entries of `table`; fewer when the table is shorter, none when `n` is 0.
pub fn top_n(table: &FrequencyTable, n: usize) -> Vec<(String, usize)> {
    table.entries.iter().take(n).cloned().collect()
}
