//! The extra recipes catalog.
//!
//! Scans the search roots for `extra_*` recipes, caches the sorted result
//! as a single value and answers filtered, paginated queries from it.

use crate::cache::CacheBackend;
use crate::config::{CatalogConfig, ConfigError};
use crate::model::CatalogEntry;
use crate::query::{self, FilterDefinition, ProjectQuery, ResultsPage};
use crate::registry::{ProjectSource, SourceDescriptor};
use crate::resolver::resolve_search_roots;
use crate::walker::find_recipe_files;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use url::Url;

/// Errors that can occur when setting up the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog configuration: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Project source listing the `extra_*` recipes of a codebase.
///
/// # Examples
///
/// ```no_run
/// use extra_recipes_catalog::{CatalogConfig, ExtraRecipes, MemoryCache, ProjectQuery};
/// use std::sync::Arc;
///
/// let catalog = ExtraRecipes::new(
///     CatalogConfig::new("/var/www/web"),
///     Arc::new(MemoryCache::new()),
/// )?;
/// let page = catalog.get_projects(&ProjectQuery::new().search("blog").page(0, 12));
/// println!("{} of {} recipes", page.list.len(), page.total_results);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ExtraRecipes {
    config: CatalogConfig,
    cache: Arc<dyn CacheBackend>,
    logo_url: Url,
}

impl ExtraRecipes {
    pub const DESCRIPTOR: SourceDescriptor = SourceDescriptor {
        id: "extra_recipes",
        label: "Extra recipes",
        description: "Recipes prefixed with \"extra_\" available in this codebase.",
    };

    /// Creates the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the configured logo path does not form a
    /// valid URL.
    pub fn new(config: CatalogConfig, cache: Arc<dyn CacheBackend>) -> Result<Self, CatalogError> {
        let logo_url = config.logo_url()?;
        Ok(ExtraRecipes {
            config,
            cache,
            logo_url,
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Returns the full sorted catalog, scanning and caching it on a miss.
    pub fn catalog(&self) -> Vec<CatalogEntry> {
        let cache_id = Self::DESCRIPTOR.id;
        if let Some(entries) = self.cache.get(cache_id) {
            return entries;
        }

        let entries = self.scan();
        self.cache.set(cache_id, entries.clone());
        entries
    }

    /// Scans the filesystem without touching the cache.
    ///
    /// Entries are sorted by case-insensitive title; ties keep discovery
    /// order. When two roots hold a recipe with the same machine name the
    /// first one found is kept.
    pub fn scan(&self) -> Vec<CatalogEntry> {
        let roots = resolve_search_roots(self.config.recipes_path.as_deref(), &self.config.app_root);
        log::debug!("scanning for recipes in {roots:?}");

        let mut seen = HashSet::new();
        let mut entries: Vec<CatalogEntry> = find_recipe_files(&roots)
            .iter()
            .filter_map(|path| CatalogEntry::from_recipe_file(path, &self.logo_url))
            .filter(|entry| {
                let first = seen.insert(entry.machine_name().to_string());
                if !first {
                    log::warn!(
                        "ignoring duplicate recipe {} found in another search root",
                        entry.machine_name()
                    );
                }
                first
            })
            .collect();

        // Stable, so equal titles keep discovery order
        entries.sort_by_cached_key(|entry| entry.title().to_lowercase());

        log::info!("found {} extra recipes", entries.len());
        entries
    }

    /// Drops the cached catalog so the next query rescans.
    pub fn invalidate(&self) {
        self.cache.invalidate(Self::DESCRIPTOR.id);
    }

    pub fn filter_definitions(&self) -> BTreeMap<String, FilterDefinition> {
        BTreeMap::from([("search".to_string(), FilterDefinition::text("Search"))])
    }

    /// Returns the page of recipes matching `query`.
    pub fn get_projects(&self, query: &ProjectQuery) -> ResultsPage {
        let (list, total_results) = query::apply(self.catalog(), query);
        ResultsPage {
            list,
            total_results,
            source_id: Self::DESCRIPTOR.id.to_string(),
        }
    }
}

impl ProjectSource for ExtraRecipes {
    fn descriptor(&self) -> SourceDescriptor {
        Self::DESCRIPTOR
    }

    fn filter_definitions(&self) -> BTreeMap<String, FilterDefinition> {
        ExtraRecipes::filter_definitions(self)
    }

    fn get_projects(&self, query: &ProjectQuery) -> ResultsPage {
        ExtraRecipes::get_projects(self, query)
    }
}
