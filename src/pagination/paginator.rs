//! Auto-paginator
//!
//! Walks every page of a collection endpoint and flattens the pages into a
//! single sequence, ordered by page number and then by position within the
//! page.
//!
//! Pages are requested in batches of `batch_size` concurrent requests. A
//! batch is always awaited in full and then scanned in page order; the
//! first short or empty page ends the walk and everything after it in the
//! same batch is discarded, errors included. The result is therefore the
//! same as a strictly sequential walk would produce.

use super::cursor::{batch_pages, next_page_spec};
use super::types::PaginationOptions;
use crate::error::{Error, Result};
use crate::http::{fetch_json, RequestSpec, Transport};
use crate::types::Page;
use futures::future::join_all;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Items of one batch and where the walk continues
struct Batch<T> {
    items: Vec<T>,
    /// `None` once the last page has been seen
    next_page: Option<u32>,
}

/// Fetch the single page `options.page`
pub async fn fetch_page<T: DeserializeOwned>(
    transport: &dyn Transport,
    resource: &RequestSpec,
    options: &PaginationOptions,
) -> Result<Page<T>> {
    fetch_json(transport, next_page_spec(resource, options, options.page)).await
}

async fn fetch_batch<T: DeserializeOwned>(
    transport: &dyn Transport,
    resource: &RequestSpec,
    options: &PaginationOptions,
    first_page: u32,
) -> Result<Batch<T>> {
    let pages: Vec<u32> = batch_pages(first_page, options).collect();

    debug!(
        "Fetching pages {}..={} of {}",
        first_page,
        pages.last().copied().unwrap_or(first_page),
        resource.path
    );

    let responses = join_all(pages.iter().map(|&page| {
        fetch_json::<Page<T>>(transport, next_page_spec(resource, options, page))
    }))
    .await;

    let mut items = Vec::new();
    for (&page, response) in pages.iter().zip(responses) {
        let page_items = response?;
        let last = options.is_last_page(page_items.len());
        items.extend(page_items);

        if last {
            debug!(
                "Page {} of {} is the last page, {} items in batch",
                page,
                resource.path,
                items.len()
            );
            return Ok(Batch {
                items,
                next_page: None,
            });
        }
    }

    Ok(Batch {
        items,
        next_page: pages.last().and_then(|p| p.checked_add(1)),
    })
}

/// Fetch every page of a collection into one vector.
///
/// All-or-nothing: the first failing page before the end of the
/// collection aborts the walk and no partial result is returned.
pub async fn collect_all<T: DeserializeOwned>(
    transport: &dyn Transport,
    resource: &RequestSpec,
    options: &PaginationOptions,
) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut next_page = Some(options.page);

    while let Some(first_page) = next_page {
        let batch = fetch_batch(transport, resource, options, first_page).await?;
        items.extend(batch.items);
        next_page = batch.next_page;
    }

    debug!("Collected {} items from {}", items.len(), resource.path);
    Ok(items)
}

/// Lazily walk every page of a collection.
///
/// Nothing is requested until the stream is polled. Items are yielded one
/// batch at a time in the same order as [`collect_all`]; a failure is
/// yielded once and ends the stream. Each call starts a fresh walk from
/// `options.page`.
pub fn paginate<T>(
    transport: Arc<dyn Transport>,
    resource: RequestSpec,
    options: PaginationOptions,
) -> BoxStream<'static, Result<T>>
where
    T: DeserializeOwned + Send + 'static,
{
    stream::unfold(Some(options.page), move |next_page| {
        let transport = Arc::clone(&transport);
        let resource = resource.clone();
        async move {
            let first_page = next_page?;
            match fetch_batch::<T>(transport.as_ref(), &resource, &options, first_page).await {
                Ok(batch) => Some((Ok(batch.items), batch.next_page)),
                Err(e) => Some((Err(e), None)),
            }
        }
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, Error>)))
    .try_flatten()
    .boxed()
}
