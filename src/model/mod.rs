mod catalog_entry;
mod metadata;

pub use catalog_entry::*;
pub use metadata::{PackageMetadata, RecipeMetadata, UNKNOWN_PACKAGE};

#[cfg(test)]
pub(crate) use catalog_entry::test_entry;
