//! Lazy, token-driven pagination over list-style operations.
//!
//! A [`Paginator`] is a one-shot [`Stream`] of pages. It fetches the first page
//! without a token and keeps following the continuation token until the
//! service stops returning one.

use futures::stream::{self, BoxStream, Stream, StreamExt};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

enum Cursor {
    Start,
    Next(String),
    Done,
}

/// A lazy stream of result pages.
///
/// Termination rules:
/// - a page whose token is absent or empty is the last page;
/// - a fetch error is yielded once and ends the stream;
/// - a token equal to the one just used ends the stream after that page.
///
/// Once exhausted the paginator keeps returning `None`.
pub struct Paginator<P, E> {
    inner: BoxStream<'static, Result<P, E>>,
}

impl<P, E> Paginator<P, E>
where
    P: Send + 'static,
    E: Send + 'static,
{
    /// Build a paginator from a page fetcher and a token extractor.
    ///
    /// `fetch` receives `None` for the first page and the previous page's
    /// token afterwards.
    pub fn new<F, Fut, T>(fetch: F, next_token: T) -> Self
    where
        F: FnMut(Option<String>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<P, E>> + Send + 'static,
        T: Fn(&P) -> Option<String> + Send + Sync + 'static,
    {
        let state = (fetch, next_token, Cursor::Start);
        let inner = stream::unfold(state, |(mut fetch, next_token, cursor)| async move {
            let token = match cursor {
                Cursor::Done => return None,
                Cursor::Start => None,
                Cursor::Next(token) => Some(token),
            };
            match fetch(token.clone()).await {
                Ok(page) => {
                    let cursor = match next_token(&page).filter(|t| !t.is_empty()) {
                        None => Cursor::Done,
                        Some(next) if token.as_deref() == Some(next.as_str()) => {
                            tracing::warn!(token = %next, "service repeated pagination token, stopping");
                            Cursor::Done
                        }
                        Some(next) => Cursor::Next(next),
                    };
                    Some((Ok(page), (fetch, next_token, cursor)))
                }
                Err(err) => Some((Err(err), (fetch, next_token, Cursor::Done))),
            }
        });
        Self { inner: inner.fuse().boxed() }
    }

    /// A paginator over pages that are already in memory.
    pub fn from_pages(pages: Vec<Result<P, E>>) -> Self {
        Self { inner: stream::iter(pages).fuse().boxed() }
    }

    /// Fetch the next page, or `None` when exhausted.
    pub async fn next_page(&mut self) -> Option<Result<P, E>> {
        self.inner.next().await
    }

    /// Drain every page, stopping at the first error.
    pub async fn collect_pages(self) -> Result<Vec<P>, E> {
        let mut pages = Vec::new();
        let mut inner = self.inner;
        while let Some(page) = inner.next().await {
            pages.push(page?);
        }
        Ok(pages)
    }

    /// Drain every page and flatten the items `items` extracts from each.
    pub async fn try_collect_items<I, F>(self, mut items: F) -> Result<Vec<I>, E>
    where
        F: FnMut(P) -> Vec<I>,
    {
        let mut out = Vec::new();
        let mut inner = self.inner;
        while let Some(page) = inner.next().await {
            out.extend(items(page?));
        }
        Ok(out)
    }
}

impl<P, E> Stream for Paginator<P, E> {
    type Item = Result<P, E>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.poll_next_unpin(cx)
    }
}

impl<P, E> std::fmt::Debug for Paginator<P, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator").finish_non_exhaustive()
    }
}
