use crate::CatalogEntry;

mod model;
pub use model::*;

/// Filters a catalog and cuts out the requested page.
///
/// Filters apply in order: exact `machine_name`, then a case-insensitive
/// substring match of `search` against the title. Empty filter strings
/// are ignored. The returned total counts every entry that passed the
/// filters, regardless of paging.
pub fn apply(entries: Vec<CatalogEntry>, query: &ProjectQuery) -> (Vec<CatalogEntry>, usize) {
    let machine_name = query.machine_name.as_deref().filter(|s| !s.is_empty());
    let search = query
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let filtered: Vec<CatalogEntry> = entries
        .into_iter()
        .filter(|entry| machine_name.map_or(true, |name| entry.machine_name() == name))
        .filter(|entry| {
            search
                .as_deref()
                .map_or(true, |term| entry.title().to_lowercase().contains(term))
        })
        .collect();

    let total = filtered.len();
    (paginate(filtered, query.page, query.limit), total)
}

/// Returns chunk `page` of size `limit`.
///
/// Without a page, or with a missing or zero limit, everything is
/// returned. A page past the end yields an empty list.
fn paginate(entries: Vec<CatalogEntry>, page: Option<usize>, limit: Option<usize>) -> Vec<CatalogEntry> {
    match (page, limit) {
        (Some(page), Some(limit)) if limit > 0 => entries
            .chunks(limit)
            .nth(page)
            .map(<[CatalogEntry]>::to_vec)
            .unwrap_or_default(),
        _ => entries,
    }
}
