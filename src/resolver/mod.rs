//! Search root resolution.
//!
//! Works out which directories may hold recipe directories: the host's
//! configured recipes path, the project level `recipes` directory next to
//! the application root, and the application root itself as a last resort.

use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use std::sync::OnceLock;

/// Project level recipes directory, relative to the application root.
const PROJECT_RECIPES_DIR: &str = "../recipes";

/// Returns true if `name` is a path template token such as `{$name}`.
///
/// Hosts often configure the recipes location as a pattern like
/// `recipes/{$name}`; the directory to scan is then its parent.
fn is_placeholder(name: &str) -> bool {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER
        .get_or_init(|| Regex::new(r"^\{\$?[A-Za-z_][A-Za-z0-9_]*\}$").unwrap())
        .is_match(name)
}

/// Canonicalizes a path, returning `None` if it does not exist or the
/// result is not valid UTF-8.
fn realpath(path: &Utf8Path) -> Option<Utf8PathBuf> {
    match path.canonicalize_utf8() {
        Ok(resolved) => Some(resolved),
        Err(e) => {
            log::debug!("skipping search root {path}: {e}");
            None
        }
    }
}

/// Resolves the directories to search for recipes.
///
/// # Arguments
///
/// * `recipes_path` - Optional recipes location configured by the host.
///   A trailing placeholder component (e.g. `{$name}`) is stripped.
/// * `app_root` - The application root. `<app_root>/../recipes` is always
///   tried as well.
///
/// # Returns
///
/// The resolved roots in discovery order without duplicates. When nothing
/// resolves, `app_root` itself is returned so there is always at least one
/// root.
///
/// # Examples
///
/// ```no_run
/// use extra_recipes_catalog::resolve_search_roots;
/// use camino::Utf8Path;
///
/// let roots = resolve_search_roots(
///     Some(Utf8Path::new("/var/www/recipes/{$name}")),
///     Utf8Path::new("/var/www/web"),
/// );
/// assert!(!roots.is_empty());
/// ```
pub fn resolve_search_roots(
    recipes_path: Option<&Utf8Path>,
    app_root: &Utf8Path,
) -> Vec<Utf8PathBuf> {
    let mut candidates = Vec::new();

    if let Some(recipes_dir) = recipes_path.filter(|p| !p.as_str().is_empty()) {
        let recipes_dir = match (recipes_dir.file_name(), recipes_dir.parent()) {
            (Some(name), Some(parent)) if is_placeholder(name) => parent,
            _ => recipes_dir,
        };
        candidates.push(recipes_dir.to_path_buf());
    }
    candidates.push(app_root.join(PROJECT_RECIPES_DIR));

    let mut roots: Vec<Utf8PathBuf> = Vec::new();
    for resolved in candidates.iter().filter_map(|c| realpath(c)) {
        if !roots.contains(&resolved) {
            roots.push(resolved);
        }
    }

    if roots.is_empty() {
        log::debug!("no recipe directories found, falling back to {app_root}");
        roots.push(app_root.to_path_buf());
    }

    roots
}
