pub mod cache;
pub mod catalog;
pub mod config;
pub mod ffi;
pub mod model;
pub mod query;
pub mod registry;
pub mod resolver;
pub mod walker;

pub use cache::{CacheBackend, MemoryCache};
pub use catalog::{CatalogError, ExtraRecipes};
pub use config::{CatalogConfig, ConfigError};
pub use model::*;
pub use query::{FilterDefinition, FilterKind, ProjectQuery, ResultsPage};
pub use registry::{ProjectSource, RegistryError, SourceDescriptor, SourceRegistry};
pub use resolver::resolve_search_roots;
pub use walker::find_recipe_files;

uniffi::setup_scaffolding!();
