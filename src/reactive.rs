// Reactive extensions: collections as streams

use crate::builder::{Clauses, MAX_ROWS_PER_PAGE};
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceOperations};
use crate::types::*;
use crate::utils::validate_range;
use futures::stream::{self, Stream, StreamExt};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tracing::debug;

/// Status of a collection stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStreamStatus {
    /// No page has been fetched yet
    Initializing,
    /// Items are arriving
    Streaming,
    /// Every page has been read
    Complete,
    /// A page fetch failed; the stream ends after yielding the error
    Error,
}

/// Every item of a collection, fetched page by page as the stream is polled
pub struct CollectionStream<T> {
    inner: Pin<Box<dyn Stream<Item = CupiResult<T>> + Send>>,
    status: CollectionStreamStatus,
    last_error: Option<CupiError>,
    items_seen: usize,
}

impl<T: Send + 'static> CollectionStream<T> {
    /// Walk pages of `rows_per_page` items, starting at page 1, keeping the
    /// query and sort clauses of `clauses`
    pub fn new<F, Fut>(clauses: Clauses, rows_per_page: u32, fetch: F) -> CupiResult<Self>
    where
        F: Fn(Clauses) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CupiResult<Page<T>>> + Send + 'static,
    {
        let rows = validate_range(rows_per_page, 1, MAX_ROWS_PER_PAGE, "rows_per_page")?;
        let fetch = Arc::new(fetch);

        let pages = stream::unfold(Some(1u32), move |next_page| {
            let fetch = fetch.clone();
            let clauses = clauses.clone();
            async move {
                let page_number = next_page?;
                let page_clauses = match clauses.with_page(page_number, rows) {
                    Ok(page_clauses) => page_clauses,
                    Err(e) => return Some((vec![Err(e)], None)),
                };
                match fetch(page_clauses).await {
                    Ok(page) => {
                        let seen = u64::from(page_number - 1) * u64::from(rows) + page.len() as u64;
                        let more = page.len() as u32 == rows && seen < u64::from(page.total);
                        debug!("Page {}: {} items, {} of {} seen", page_number, page.len(), seen, page.total);
                        let items: Vec<CupiResult<T>> = page.into_items().into_iter().map(Ok).collect();
                        Some((items, more.then(|| page_number + 1)))
                    }
                    Err(e) => Some((vec![Err(e)], None)),
                }
            }
        });

        Ok(Self {
            inner: Box::pin(pages.flat_map(stream::iter)),
            status: CollectionStreamStatus::Initializing,
            last_error: None,
            items_seen: 0,
        })
    }
}

impl<T> CollectionStream<T> {
    pub fn status(&self) -> CollectionStreamStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == CollectionStreamStatus::Complete
    }

    pub fn has_error(&self) -> bool {
        self.status == CollectionStreamStatus::Error
    }

    pub fn last_error(&self) -> Option<&CupiError> {
        self.last_error.as_ref()
    }

    /// Items yielded so far
    pub fn items_seen(&self) -> usize {
        self.items_seen
    }
}

impl<T> Stream for CollectionStream<T> {
    type Item = CupiResult<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.status == CollectionStreamStatus::Complete || self.status == CollectionStreamStatus::Error {
            return Poll::Ready(None);
        }

        match self.inner.as_mut().poll_next(cx) {
            Poll::Ready(Some(Ok(item))) => {
                self.status = CollectionStreamStatus::Streaming;
                self.items_seen += 1;
                Poll::Ready(Some(Ok(item)))
            }
            Poll::Ready(Some(Err(e))) => {
                self.status = CollectionStreamStatus::Error;
                self.last_error = Some(e.clone());
                Poll::Ready(Some(Err(e)))
            }
            Poll::Ready(None) => {
                self.status = CollectionStreamStatus::Complete;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl ConnectionServer {
    /// Stream every element named `element_name` under `path`, e.g.
    /// `server.stream_collection::<Partition>("partitions", "Partition", Clauses::none(), 100)`
    pub fn stream_collection<T>(
        &self,
        path: impl Into<String>,
        element_name: impl Into<String>,
        clauses: Clauses,
        rows_per_page: u32,
    ) -> CupiResult<CollectionStream<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let path = Arc::new(path.into());
        let element_name = Arc::new(element_name.into());
        let base = Arc::new(BaseResourceClient::new(Arc::new(self.clone()), element_name.as_str()));

        CollectionStream::new(clauses, rows_per_page, move |page_clauses| {
            let base = base.clone();
            let path = path.clone();
            let element_name = element_name.clone();
            async move {
                let page: Page<T> = base.fetch_page(&path, &element_name, &page_clauses).await?;
                Ok(page)
            }
        })
    }
}
