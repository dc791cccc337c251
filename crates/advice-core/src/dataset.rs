//! Tabular travel-advice dataset and the map-row assembler.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::extract::{extract_covid_requirements, NO_ENTRY_RULES};

/// Section slug carrying a country's entry-requirements HTML.
pub const ENTRY_REQUIREMENTS_SECTION: &str = "entry-requirements";

/// One country's flattened advisory content.
#[derive(Debug, Clone)]
pub struct CountryRow {
    /// Canonical country name.
    pub name: String,
    /// Section slug to raw HTML body, in document order.
    pub sections: IndexMap<String, String>,
}

/// Ordered collection of country rows.
///
/// Rows are kept in the order they were appended. After
/// [`AdviceDataset::fill_missing`], every row carries the identical
/// column set: the union of all section slugs in first-appearance order,
/// with absent cells filled with the empty string.
#[derive(Debug, Clone, Default)]
pub struct AdviceDataset {
    rows: Vec<CountryRow>,
}

impl AdviceDataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row, preserving insertion order.
    pub fn push(&mut self, row: CountryRow) {
        self.rows.push(row);
    }

    /// All rows in append order.
    pub fn rows(&self) -> &[CountryRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row names in append order.
    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.name.as_str()).collect()
    }

    /// Union of section columns across all rows, in first-appearance order.
    pub fn columns(&self) -> IndexSet<String> {
        let mut columns = IndexSet::new();
        for row in &self.rows {
            for slug in row.sections.keys() {
                columns.insert(slug.clone());
            }
        }
        columns
    }

    /// Fill unset cells with the empty string so every row carries the
    /// full column set, in the same order.
    pub fn fill_missing(&mut self) {
        let columns = self.columns();
        for row in &mut self.rows {
            let mut sections = IndexMap::with_capacity(columns.len());
            for column in &columns {
                let body = row.sections.shift_remove(column).unwrap_or_default();
                sections.insert(column.clone(), body);
            }
            row.sections = sections;
        }
    }
}

/// A single country's map-ready advice values.
#[derive(Debug, Clone, Serialize)]
pub struct CountryAdvice {
    /// Canonical country name, matching boundary-geometry naming.
    pub name: String,
    /// Extracted entry-requirements excerpt, or the no-rules sentinel.
    #[serde(rename = "entry-requirements")]
    pub entry_requirements: String,
    /// Choropleth indicator: 0 when no entry rules are listed, else 100.
    pub value: u32,
}

/// Derive the per-country excerpt and indicator from a filled dataset.
///
/// Row order is preserved. A row without an `entry-requirements` section
/// is treated as an empty blob and yields the sentinel excerpt.
pub fn assemble_map_rows(dataset: &AdviceDataset) -> Vec<CountryAdvice> {
    dataset
        .rows()
        .iter()
        .map(|row| {
            let blob = row
                .sections
                .get(ENTRY_REQUIREMENTS_SECTION)
                .map(String::as_str)
                .unwrap_or("");
            let entry_requirements = extract_covid_requirements(blob);
            let value = if entry_requirements == NO_ENTRY_RULES {
                0
            } else {
                100
            };

            CountryAdvice {
                name: row.name.clone(),
                entry_requirements,
                value,
            }
        })
        .collect()
}
