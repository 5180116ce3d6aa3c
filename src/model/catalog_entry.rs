use super::metadata::{read_package_metadata, read_recipe_metadata, PackageMetadata, RecipeMetadata};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use url::Url;

/// Directory name prefix a recipe must carry to be listed.
pub const RECIPE_PREFIX: &str = "extra_";

/// File name of a recipe definition.
pub const RECIPE_FILE_NAME: &str = "recipe.yml";

/// Kind of project a catalog entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Module,
    Recipe,
}

/// A single recipe as listed by the catalog.
///
/// Entries are built once per scan from a `recipe.yml` file and its
/// optional sibling `composer.json`, and are never modified afterwards.
///
/// # Examples
///
/// ```no_run
/// use extra_recipes_catalog::CatalogEntry;
/// use camino::Utf8Path;
/// use url::Url;
///
/// let logo = Url::parse("base:/images/recipe-logo.svg")?;
/// if let Some(entry) =
///     CatalogEntry::from_recipe_file(Utf8Path::new("recipes/extra_blog/recipe.yml"), &logo)
/// {
///     println!("{} ({})", entry.title(), entry.package_name());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Name of the recipe directory, always starting with `extra_`
    machine_name: String,
    /// Recipe name from `recipe.yml`, or the machine name
    title: String,
    description: Option<String>,
    /// Composer package name, or `extra/unknown`
    package_name: String,
    homepage_url: Option<Url>,
    /// Shared logo for all recipes
    logo_url: Url,
    is_compatible: bool,
    #[serde(rename = "type")]
    project_type: ProjectType,
}

impl CatalogEntry {
    /// Creates an entry from already parsed metadata.
    pub fn new(
        machine_name: String,
        metadata: &RecipeMetadata,
        package: PackageMetadata,
        logo_url: Url,
    ) -> Self {
        let title = metadata
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| machine_name.clone());

        CatalogEntry {
            title,
            description: metadata.description().map(str::to_string),
            machine_name,
            package_name: package.name,
            homepage_url: package.homepage,
            logo_url,
            is_compatible: true,
            project_type: ProjectType::Recipe,
        }
    }

    /// Builds an entry from the path of a `recipe.yml` file.
    ///
    /// The machine name is the name of the directory holding the file.
    /// Returns `None` when that directory does not start with
    /// [`RECIPE_PREFIX`]. Unreadable or malformed metadata never fails the
    /// entry; defaults are used instead.
    pub fn from_recipe_file(path: &Utf8Path, logo_url: &Url) -> Option<Self> {
        let recipe_dir = path.parent()?;
        let machine_name = recipe_dir.file_name()?;
        if !machine_name.starts_with(RECIPE_PREFIX) {
            log::debug!("skipping {path}: directory is not prefixed with {RECIPE_PREFIX}");
            return None;
        }

        let metadata = read_recipe_metadata(path);
        let package = read_package_metadata(recipe_dir);

        Some(CatalogEntry::new(
            machine_name.to_string(),
            &metadata,
            package,
            logo_url.clone(),
        ))
    }

    pub fn machine_name(&self) -> &str {
        &self.machine_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn homepage_url(&self) -> Option<&Url> {
        self.homepage_url.as_ref()
    }

    pub fn logo_url(&self) -> &Url {
        &self.logo_url
    }

    /// Always `true`: recipes are not checked for compatibility.
    pub fn is_compatible(&self) -> bool {
        self.is_compatible
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }
}

#[cfg(test)]
pub(crate) fn test_entry(machine_name: &str, title: &str) -> CatalogEntry {
    let metadata = RecipeMetadata::parse(&format!("name: {title:?}")).unwrap_or_default();
    CatalogEntry::new(
        machine_name.to_string(),
        &metadata,
        PackageMetadata::default(),
        Url::parse("base:/images/recipe-logo.svg").unwrap(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNKNOWN_PACKAGE;
    use camino::Utf8PathBuf;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    fn logo() -> Url {
        Url::parse("base:/images/recipe-logo.svg").unwrap()
    }

    fn create_test_recipe(dir: &Utf8Path, name: &str, content: &str) -> Utf8PathBuf {
        let recipe_dir = dir.join(name);
        fs::create_dir_all(&recipe_dir).unwrap();
        let path = recipe_dir.join(RECIPE_FILE_NAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_entry_from_recipe_file() {
        let temp_dir = TempDir::new().unwrap();
        let temp_dir_path = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
        let path = create_test_recipe(
            &temp_dir_path,
            "extra_blog",
            indoc! {r#"
                name: Blog
                description: Adds a blog content type
                type: Site"#},
        );
        fs::write(
            temp_dir_path.join("extra_blog/composer.json"),
            r#"{"name": "acme/extra_blog", "homepage": "https://example.com"}"#,
        )
        .unwrap();

        let entry = CatalogEntry::from_recipe_file(&path, &logo()).unwrap();
        assert_eq!(entry.machine_name(), "extra_blog");
        assert_eq!(entry.title(), "Blog");
        assert_eq!(entry.description(), Some("Adds a blog content type"));
        assert_eq!(entry.package_name(), "acme/extra_blog");
        assert_eq!(
            entry.homepage_url().map(Url::as_str),
            Some("https://example.com/")
        );
        assert_eq!(entry.logo_url(), &logo());
        assert!(entry.is_compatible());
        assert_eq!(entry.project_type(), ProjectType::Recipe);
    }

    #[test]
    fn test_title_falls_back_to_machine_name() {
        let temp_dir = TempDir::new().unwrap();
        let temp_dir_path = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
        let path = create_test_recipe(&temp_dir_path, "extra_bar", "description: No name here");

        let entry = CatalogEntry::from_recipe_file(&path, &logo()).unwrap();
        assert_eq!(entry.title(), "extra_bar");
        assert_eq!(entry.description(), Some("No name here"));
        assert_eq!(entry.package_name(), UNKNOWN_PACKAGE);
        assert!(entry.homepage_url().is_none());
    }

    #[test]
    fn test_unprefixed_directory_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let temp_dir_path = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
        let path = create_test_recipe(&temp_dir_path, "other_thing", "name: Other");

        assert!(CatalogEntry::from_recipe_file(&path, &logo()).is_none());
    }

    #[test]
    fn test_malformed_files_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let temp_dir_path = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
        let path = create_test_recipe(&temp_dir_path, "extra_broken", "name: [oops");
        fs::write(temp_dir_path.join("extra_broken/composer.json"), "{{{").unwrap();

        let entry = CatalogEntry::from_recipe_file(&path, &logo()).unwrap();
        assert_eq!(entry.title(), "extra_broken");
        assert!(entry.description().is_none());
        assert_eq!(entry.package_name(), UNKNOWN_PACKAGE);
        assert!(entry.homepage_url().is_none());
    }

    #[test]
    fn test_empty_recipe_file() {
        let temp_dir = TempDir::new().unwrap();
        let temp_dir_path = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
        let path = create_test_recipe(&temp_dir_path, "extra_empty", "");

        let entry = CatalogEntry::from_recipe_file(&path, &logo()).unwrap();
        assert_eq!(entry.title(), "extra_empty");
    }

    #[test]
    fn test_entry_serialization() {
        let entry = test_entry("extra_foo", "Foo Recipe");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["machine_name"], "extra_foo");
        assert_eq!(json["title"], "Foo Recipe");
        assert_eq!(json["type"], "recipe");
        assert_eq!(json["is_compatible"], true);

        let back: CatalogEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
