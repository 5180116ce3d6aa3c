//! Recipe file discovery.
//!
//! Recipes live one directory below a search root, as
//! `<root>/<machine_name>/recipe.yml`. Nothing deeper is considered.

use crate::model::RECIPE_FILE_NAME;
use camino::Utf8PathBuf;
use glob::Pattern;

/// Finds every `recipe.yml` exactly one directory below each root.
///
/// Symbolic links to recipe directories and to recipe files are followed.
/// Roots are visited in the given order and the files of each root come
/// back sorted by path, so repeated scans of an unchanged tree return the
/// same sequence. Entries that cannot be read are logged and skipped.
pub fn find_recipe_files(roots: &[Utf8PathBuf]) -> Vec<Utf8PathBuf> {
    let mut files = Vec::new();

    for root in roots {
        let pattern = format!(
            "{}/*/{}",
            Pattern::escape(root.as_str()),
            Pattern::escape(RECIPE_FILE_NAME)
        );

        let entries = match glob::glob(&pattern) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("invalid search root {root}: {e}");
                continue;
            }
        };

        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    log::warn!("failed to read {}: {}", e.path().display(), e.error());
                    continue;
                }
            };
            let path = match Utf8PathBuf::from_path_buf(path) {
                Ok(path) => path,
                Err(path) => {
                    log::warn!("skipping non UTF-8 path {}", path.display());
                    continue;
                }
            };
            // Follows links, so a dangling link or a directory named
            // recipe.yml is dropped here.
            if path.is_file() {
                files.push(path);
            }
        }
    }

    files
}
