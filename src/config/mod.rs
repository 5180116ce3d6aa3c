//! Catalog configuration.
//!
//! The host hands these settings to the service explicitly, either built
//! in code or loaded from a YAML file.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;
use url::Url;

/// Default location of the shared recipe logo, as served by the host.
pub const DEFAULT_LOGO_PATH: &str = "/modules/contrib/project_browser/images/recipe-logo.svg";

/// Errors that can occur when loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid logo path: {0}")]
    InvalidLogo(#[from] url::ParseError),
}

/// Settings for [`ExtraRecipes`](crate::ExtraRecipes).
///
/// # Examples
///
/// ```
/// use extra_recipes_catalog::CatalogConfig;
///
/// let config = CatalogConfig::from_yaml_str(
///     "app_root: /var/www/web\nrecipes_path: /var/www/recipes/{$name}\n",
/// )?;
/// assert_eq!(config.app_root, "/var/www/web");
/// assert_eq!(config.logo_url()?.as_str(), "base:/modules/contrib/project_browser/images/recipe-logo.svg");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Recipes location configured by the host, may end in a `{$name}` token
    #[serde(default)]
    pub recipes_path: Option<Utf8PathBuf>,
    /// Application root; `<app_root>/../recipes` is searched as well
    pub app_root: Utf8PathBuf,
    /// Host-relative path of the logo shown for every recipe
    #[serde(default = "default_logo_path")]
    pub logo_path: String,
}

fn default_logo_path() -> String {
    DEFAULT_LOGO_PATH.to_string()
}

impl CatalogConfig {
    pub fn new(app_root: impl Into<Utf8PathBuf>) -> Self {
        CatalogConfig {
            recipes_path: None,
            app_root: app_root.into(),
            logo_path: default_logo_path(),
        }
    }

    pub fn with_recipes_path(mut self, recipes_path: impl Into<Utf8PathBuf>) -> Self {
        self.recipes_path = Some(recipes_path.into());
        self
    }

    pub fn with_logo_path(mut self, logo_path: impl Into<String>) -> Self {
        self.logo_path = logo_path.into();
        self
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// The logo reference shared by all entries: `base:` + logo path.
    pub fn logo_url(&self) -> Result<Url, ConfigError> {
        Ok(Url::parse(&format!("base:{}", self.logo_path))?)
    }
}
