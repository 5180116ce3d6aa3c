//! UniFFI bindings for cross-platform support (iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! Complex types are converted to simpler representations suitable for FFI.

use crate::cache::MemoryCache;
use crate::catalog::{CatalogError, ExtraRecipes};
use crate::config::{CatalogConfig, ConfigError};
use crate::model::{CatalogEntry, ProjectType};
use crate::query::{FilterDefinition, FilterKind, ProjectQuery, ResultsPage};
use camino::Utf8Path;
use std::sync::Arc;

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum CatalogFfiError {
    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Config error: {message}")]
    ConfigError { message: String },
}

impl From<ConfigError> for CatalogFfiError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::IoError(e) => CatalogFfiError::IoError {
                message: e.to_string(),
            },
            e => CatalogFfiError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

impl From<CatalogError> for CatalogFfiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::ConfigError(e) => e.into(),
        }
    }
}

/// FFI-safe representation of a catalog entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCatalogEntry {
    pub machine_name: String,
    pub title: String,
    pub description: Option<String>,
    pub package_name: String,
    pub homepage_url: Option<String>,
    pub logo_url: String,
    pub is_compatible: bool,
    /// "recipe" or "module"
    pub project_type: String,
}

impl From<&CatalogEntry> for FfiCatalogEntry {
    fn from(e: &CatalogEntry) -> Self {
        let project_type = match e.project_type() {
            ProjectType::Module => "module",
            ProjectType::Recipe => "recipe",
        };

        FfiCatalogEntry {
            machine_name: e.machine_name().to_string(),
            title: e.title().to_string(),
            description: e.description().map(|s| s.to_string()),
            package_name: e.package_name().to_string(),
            homepage_url: e.homepage_url().map(|u| u.to_string()),
            logo_url: e.logo_url().to_string(),
            is_compatible: e.is_compatible(),
            project_type: project_type.to_string(),
        }
    }
}

/// FFI-safe query. `page` is zero-based; a `limit` of 0 disables paging.
#[derive(Debug, Clone, Default, uniffi::Record)]
pub struct FfiProjectQuery {
    pub machine_name: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl From<FfiProjectQuery> for ProjectQuery {
    fn from(q: FfiProjectQuery) -> Self {
        ProjectQuery {
            machine_name: q.machine_name,
            search: q.search,
            page: q.page.map(|p| p as usize),
            limit: q.limit.map(|l| l as usize),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiResultsPage {
    pub list: Vec<FfiCatalogEntry>,
    pub total_results: u64,
    pub source_id: String,
}

impl From<&ResultsPage> for FfiResultsPage {
    fn from(p: &ResultsPage) -> Self {
        FfiResultsPage {
            list: p.list.iter().map(FfiCatalogEntry::from).collect(),
            total_results: p.total_results as u64,
            source_id: p.source_id.clone(),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFilterDefinition {
    /// Query parameter name
    pub name: String,
    pub label: String,
    /// "text"
    pub kind: String,
    pub default_value: String,
}

fn filter_to_ffi(name: &str, filter: &FilterDefinition) -> FfiFilterDefinition {
    let kind = match filter.kind {
        FilterKind::Text => "text",
    };
    FfiFilterDefinition {
        name: name.to_string(),
        label: filter.label.clone(),
        kind: kind.to_string(),
        default_value: filter.default_value.clone(),
    }
}

/// FFI-safe catalog backed by an in-memory cache.
#[derive(uniffi::Object)]
pub struct FfiCatalog {
    inner: ExtraRecipes,
}

#[uniffi::export]
impl FfiCatalog {
    /// Creates a catalog for the given application root and optional
    /// recipes path.
    #[uniffi::constructor]
    pub fn new(
        app_root: String,
        recipes_path: Option<String>,
    ) -> Result<Arc<Self>, CatalogFfiError> {
        let mut config = CatalogConfig::new(app_root);
        if let Some(recipes_path) = recipes_path {
            config = config.with_recipes_path(recipes_path);
        }
        Self::with_config(config)
    }

    /// Creates a catalog from a YAML configuration file.
    #[uniffi::constructor]
    pub fn from_config_file(path: String) -> Result<Arc<Self>, CatalogFfiError> {
        let config = CatalogConfig::from_path(Utf8Path::new(&path))?;
        Self::with_config(config)
    }

    /// Returns the recipes matching the query.
    pub fn get_projects(&self, query: FfiProjectQuery) -> FfiResultsPage {
        FfiResultsPage::from(&self.inner.get_projects(&query.into()))
    }

    /// Returns the filters this catalog accepts.
    pub fn filter_definitions(&self) -> Vec<FfiFilterDefinition> {
        self.inner
            .filter_definitions()
            .iter()
            .map(|(name, filter)| filter_to_ffi(name, filter))
            .collect()
    }

    /// Forces the next query to rescan the filesystem.
    pub fn invalidate(&self) {
        self.inner.invalidate();
    }
}

impl FfiCatalog {
    fn with_config(config: CatalogConfig) -> Result<Arc<Self>, CatalogFfiError> {
        let inner = ExtraRecipes::new(config, Arc::new(MemoryCache::new()))?;
        Ok(Arc::new(FfiCatalog { inner }))
    }
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_recipe(root: &str, machine_name: &str, content: &str) {
        let dir = format!("{}/{}", root, machine_name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(format!("{}/recipe.yml", dir), content).unwrap();
    }

    #[test]
    fn test_get_projects() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path().to_str().unwrap();
        let app_root = format!("{}/web", temp_path);
        let recipes = format!("{}/recipes", temp_path);
        fs::create_dir_all(&app_root).unwrap();

        create_test_recipe(&recipes, "extra_foo", "name: Foo Recipe");
        create_test_recipe(&recipes, "extra_bar", "description: Bar");

        let catalog = FfiCatalog::new(app_root, None).unwrap();
        let page = catalog.get_projects(FfiProjectQuery {
            page: Some(1),
            limit: Some(1),
            ..Default::default()
        });
        assert_eq!(page.total_results, 2);
        assert_eq!(page.list.len(), 1);
        assert_eq!(page.list[0].machine_name, "extra_foo");
        assert_eq!(page.list[0].title, "Foo Recipe");
        assert_eq!(page.list[0].package_name, "extra/unknown");
        assert_eq!(page.list[0].project_type, "recipe");
        assert!(page.list[0].is_compatible);
        assert_eq!(page.source_id, "extra_recipes");
    }

    #[test]
    fn test_filter_definitions() {
        let temp_dir = TempDir::new().unwrap();
        let catalog =
            FfiCatalog::new(temp_dir.path().to_str().unwrap().to_string(), None).unwrap();

        let filters = catalog.filter_definitions();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].name, "search");
        assert_eq!(filters[0].label, "Search");
        assert_eq!(filters[0].kind, "text");
    }

    #[test]
    fn test_missing_config_file() {
        let result = FfiCatalog::from_config_file("/nonexistent/catalog.yml".to_string());
        assert!(matches!(result, Err(CatalogFfiError::IoError { .. })));
    }

    #[test]
    fn test_library_version() {
        let version = library_version();
        assert!(!version.is_empty());
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
    }
}
