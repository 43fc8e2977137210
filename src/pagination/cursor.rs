//! Page request computation

use super::types::PaginationOptions;
use crate::http::RequestSpec;

/// Request for page `page` of the collection described by `resource`.
///
/// Pure: the same arguments always yield the same spec. The page number
/// walk is independent of `options.order`.
pub fn next_page_spec(resource: &RequestSpec, options: &PaginationOptions, page: u32) -> RequestSpec {
    options
        .query_pairs(page)
        .into_iter()
        .fold(resource.clone(), |spec, (key, value)| spec.query(key, value))
}

/// Page numbers of the batch starting at `first`
pub fn batch_pages(first: u32, options: &PaginationOptions) -> impl Iterator<Item = u32> {
    let size = options.batch_size.max(1);
    (0..size).map_while(move |offset| first.checked_add(offset))
}
