use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;
use std::fs;
use url::Url;

/// Package name used when a recipe ships no usable `composer.json`.
pub const UNKNOWN_PACKAGE: &str = "extra/unknown";

const COMPOSER_FILE_NAME: &str = "composer.json";

/// Represents the YAML body of a `recipe.yml` file.
///
/// This structure provides convenient access to the fields the catalog
/// cares about (name, description, type), while also allowing access
/// to any other top-level key through the `get()` method.
///
/// # Examples
///
/// ```
/// # use extra_recipes_catalog::RecipeMetadata;
/// let metadata = RecipeMetadata::parse("name: Blog\ntype: Site").unwrap();
/// assert_eq!(metadata.name(), Some("Blog"));
/// assert_eq!(metadata.recipe_type(), Some("Site"));
/// assert!(metadata.description().is_none());
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RecipeMetadata {
    #[serde(flatten)]
    pub(super) data: HashMap<String, Value>,
}

impl RecipeMetadata {
    /// Parses raw YAML content.
    ///
    /// Returns `None` if the content is empty, is not valid YAML, or is not
    /// a mapping with string keys.
    pub fn parse(yaml_content: &str) -> Option<Self> {
        if yaml_content.trim().is_empty() {
            return None;
        }

        serde_yaml::from_str::<HashMap<String, Value>>(yaml_content)
            .ok()
            .map(|data| RecipeMetadata { data })
    }

    /// Returns the human readable recipe name.
    ///
    /// Returns `None` if the field is missing or not a string.
    pub fn name(&self) -> Option<&str> {
        self.data.get("name").and_then(|v| v.as_str())
    }

    /// Returns the recipe summary, ignoring empty strings.
    pub fn description(&self) -> Option<&str> {
        self.data
            .get("description")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Returns the recipe's declared type (for example `Site` or `Content type`).
    pub fn recipe_type(&self) -> Option<&str> {
        self.data.get("type").and_then(|v| v.as_str())
    }

    /// Returns a top-level value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Package information read from a recipe's `composer.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    pub name: String,
    pub homepage: Option<Url>,
}

impl Default for PackageMetadata {
    fn default() -> Self {
        PackageMetadata {
            name: UNKNOWN_PACKAGE.to_string(),
            homepage: None,
        }
    }
}

impl PackageMetadata {
    /// Parses `composer.json` content.
    ///
    /// A missing or non-string `name` falls back to [`UNKNOWN_PACKAGE`]; a
    /// `homepage` that is not an absolute URL is dropped. Only invalid JSON
    /// is reported as an error.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let package: serde_json::Value = serde_json::from_str(content)?;

        let name = package
            .get("name")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN_PACKAGE.to_string());

        let homepage = package
            .get("homepage")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .and_then(|s| match Url::parse(s) {
                Ok(url) => Some(url),
                Err(e) => {
                    log::warn!("ignoring invalid homepage {s:?} of package {name}: {e}");
                    None
                }
            });

        Ok(PackageMetadata { name, homepage })
    }
}

/// Reads and parses a `recipe.yml` file.
/// Unreadable, empty or malformed files yield empty metadata.
pub(super) fn read_recipe_metadata(path: &Utf8Path) -> RecipeMetadata {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("failed to read {path}: {e}");
            return RecipeMetadata::default();
        }
    };

    RecipeMetadata::parse(&content).unwrap_or_else(|| {
        if !content.trim().is_empty() {
            log::warn!("ignoring malformed recipe metadata in {path}");
        }
        RecipeMetadata::default()
    })
}

/// Reads the `composer.json` next to a recipe, falling back to defaults
/// when it is absent, unreadable or malformed.
pub(super) fn read_package_metadata(recipe_dir: &Utf8Path) -> PackageMetadata {
    let composer = recipe_dir.join(COMPOSER_FILE_NAME);
    if !composer.exists() {
        return PackageMetadata::default();
    }

    // The file may disappear between the check and the read; that is
    // handled like any other read failure.
    let content = match fs::read_to_string(&composer) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("failed to read {composer}: {e}");
            return PackageMetadata::default();
        }
    };

    PackageMetadata::from_json_str(&content).unwrap_or_else(|e| {
        log::warn!("ignoring malformed {composer}: {e}");
        PackageMetadata::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use indoc::indoc;
    use tempfile::TempDir;

    fn temp_dir_path(temp_dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_parse_yaml_content() {
        // Test valid YAML
        let yaml_content = indoc! {r#"
            name: Blog
            description: A simple blog
            type: Site
            install:
              - node"#};
        let metadata = RecipeMetadata::parse(yaml_content).unwrap();
        assert_eq!(metadata.name(), Some("Blog"));
        assert_eq!(metadata.description(), Some("A simple blog"));
        assert_eq!(metadata.recipe_type(), Some("Site"));
        assert!(metadata.get("install").unwrap().is_sequence());

        // Test invalid YAML
        assert!(RecipeMetadata::parse("invalid: yaml: content:").is_none());

        // Test a YAML document that is not a mapping
        assert!(RecipeMetadata::parse("- one\n- two").is_none());

        // Test empty content
        assert!(RecipeMetadata::parse("").is_none());
        assert!(RecipeMetadata::parse("   \n").is_none());
    }

    #[test]
    fn test_non_string_fields_are_ignored() {
        let metadata = RecipeMetadata::parse("name: 42\ndescription: ''").unwrap();
        assert!(metadata.name().is_none());
        assert!(metadata.description().is_none());
        assert!(!metadata.is_empty());
    }

    #[test]
    fn test_package_metadata_from_json() {
        let package = PackageMetadata::from_json_str(indoc! {r#"
            {
                "name": "acme/extra_blog",
                "homepage": "https://example.com/blog"
            }"#})
        .unwrap();
        assert_eq!(package.name, "acme/extra_blog");
        assert_eq!(
            package.homepage.unwrap().as_str(),
            "https://example.com/blog"
        );
    }

    #[test]
    fn test_package_metadata_defaults() {
        let package = PackageMetadata::from_json_str("{}").unwrap();
        assert_eq!(package, PackageMetadata::default());
        assert_eq!(package.name, UNKNOWN_PACKAGE);

        let package = PackageMetadata::from_json_str(r#"{"name": 7, "homepage": ""}"#).unwrap();
        assert_eq!(package.name, UNKNOWN_PACKAGE);
        assert!(package.homepage.is_none());

        // Relative URLs cannot be represented and are dropped
        let package =
            PackageMetadata::from_json_str(r#"{"name": "a/b", "homepage": "/relative"}"#).unwrap();
        assert_eq!(package.name, "a/b");
        assert!(package.homepage.is_none());
    }

    #[test]
    fn test_package_metadata_malformed_json() {
        assert!(PackageMetadata::from_json_str("{not json").is_err());
    }

    #[test]
    fn test_read_recipe_metadata_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let metadata = read_recipe_metadata(&temp_dir_path(&temp_dir).join("recipe.yml"));
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_read_recipe_metadata_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir_path(&temp_dir).join("recipe.yml");
        fs::write(&path, "name: [unclosed").unwrap();
        assert!(read_recipe_metadata(&path).is_empty());
    }

    #[test]
    fn test_read_package_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir_path(&temp_dir);

        // No composer.json at all
        assert_eq!(read_package_metadata(&dir), PackageMetadata::default());

        // Malformed composer.json
        fs::write(dir.join("composer.json"), "{\"name\": ").unwrap();
        assert_eq!(read_package_metadata(&dir), PackageMetadata::default());

        // Valid composer.json
        fs::write(
            dir.join("composer.json"),
            r#"{"name": "acme/extra_shop", "homepage": "https://shop.example"}"#,
        )
        .unwrap();
        let package = read_package_metadata(&dir);
        assert_eq!(package.name, "acme/extra_shop");
        assert_eq!(package.homepage.unwrap().host_str(), Some("shop.example"));
    }
}
