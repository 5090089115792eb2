//! Column-ordered CSV row.

use serde::{Deserialize, Serialize};

/// One parsed CSV line: column name to raw cell value, in header order.
///
/// Keys are unique; inserting an existing column replaces its value in
/// place, so a repeated header keeps its first position and last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn position(&self, column: &str) -> Option<usize> {
        self.cells.iter().position(|(name, _)| name == column)
    }

    pub fn get(&self, column: &str) -> Option<&String> {
        self.position(column).map(|index| &self.cells[index].1)
    }

    pub fn contains_key(&self, column: &str) -> bool {
        self.position(column).is_some()
    }

    /// Sets `column`, returning the previous value if it was present.
    pub fn insert(&mut self, column: String, value: String) -> Option<String> {
        match self.position(&column) {
            Some(index) => Some(std::mem::replace(&mut self.cells[index].1, value)),
            None => {
                self.cells.push((column, value));
                None
            }
        }
    }

    /// Removes `column`, keeping the order of the remaining cells.
    pub fn remove(&mut self, column: &str) -> Option<String> {
        self.position(column)
            .map(|index| self.cells.remove(index).1)
    }

    /// Column names in header order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.cells.iter().map(|(name, _)| name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.cells.iter().map(|(name, value)| (name, value))
    }
}

impl FromIterator<(String, String)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

impl IntoIterator for Row {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
