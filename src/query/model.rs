use crate::CatalogEntry;
use serde::{Deserialize, Serialize};

/// Filters and paging requested by the host.
///
/// Deserializes from the host's query mapping; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectQuery {
    /// Exact machine name to match
    pub machine_name: Option<String>,
    /// Case-insensitive substring of the title
    pub search: Option<String>,
    /// Zero-based page index
    pub page: Option<usize>,
    /// Page size, `0` disables paging
    pub limit: Option<usize>,
}

impl ProjectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn machine_name(mut self, machine_name: impl Into<String>) -> Self {
        self.machine_name = Some(machine_name.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn page(mut self, page: usize, limit: usize) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }
}

/// One page of catalog entries plus the number of entries that matched
/// the filters before paging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsPage {
    pub list: Vec<CatalogEntry>,
    pub total_results: usize,
    /// Id of the source that produced the page
    pub source_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Text,
}

/// A filter a source accepts, as shown in the host's UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDefinition {
    pub kind: FilterKind,
    pub label: String,
    pub default_value: String,
}

impl FilterDefinition {
    pub fn text(label: impl Into<String>) -> Self {
        FilterDefinition {
            kind: FilterKind::Text,
            label: label.into(),
            default_value: String::new(),
        }
    }
}
