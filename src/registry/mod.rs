//! Registry of project sources.
//!
//! A host builds one registry at startup, registers every source it wants
//! to offer, then looks sources up by id when serving requests.

use crate::query::{FilterDefinition, ProjectQuery, ResultsPage};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Static identity of a project source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// A provider of browsable projects.
pub trait ProjectSource: Send + Sync {
    fn descriptor(&self) -> SourceDescriptor;

    /// Filters this source understands, keyed by query parameter name.
    fn filter_definitions(&self) -> BTreeMap<String, FilterDefinition>;

    /// Returns the projects matching `query`. Never fails; a source that
    /// cannot find anything returns an empty page.
    fn get_projects(&self, query: &ProjectQuery) -> ResultsPage;
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Source already registered: {0}")]
    DuplicateSource(String),
}

#[derive(Default)]
pub struct SourceRegistry {
    sources: Vec<Arc<dyn ProjectSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source. Ids must be unique.
    pub fn register(&mut self, source: Arc<dyn ProjectSource>) -> Result<(), RegistryError> {
        let id = source.descriptor().id;
        if self.get(id).is_some() {
            return Err(RegistryError::DuplicateSource(id.to_string()));
        }
        log::debug!("registered project source {id}");
        self.sources.push(source);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn ProjectSource>> {
        self.sources
            .iter()
            .find(|s| s.descriptor().id == id)
            .cloned()
    }

    /// Descriptors of all sources, in registration order.
    pub fn descriptors(&self) -> Vec<SourceDescriptor> {
        self.sources.iter().map(|s| s.descriptor()).collect()
    }
}
