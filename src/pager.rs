use crate::cursor::CursorStack;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// A page of results from a cursor based query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items in this page.
    pub items: Vec<T>,

    /// The cursor to fetch the next page with, if there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl<T> Page<T> {
    /// Construct a page.
    pub fn new(items: Vec<T>, cursor: Option<String>) -> Self {
        Self { items, cursor }
    }
}

/// Drives a [`CursorStack`] through fetches.
///
/// Every navigation fetches the page at the new position using the recorded cursor and only records the
/// server's next cursor once the fetch succeeded. A failed fetch rolls the position back so the state is the
/// same as if the navigation had never been attempted.
///
/// Navigations must not overlap: a listing should disable its controls while a fetch is in flight.
#[derive(Clone, Debug, Default)]
pub struct Pager {
    stack: CursorStack,
}

impl Pager {
    /// Construct a pager positioned before the first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying cursor stack.
    pub fn stack(&self) -> &CursorStack {
        &self.stack
    }

    /// Whether the previous page can be loaded.
    pub fn can_previous(&self) -> bool {
        self.stack.can_step_backward()
    }

    /// Whether the next page can be loaded.
    ///
    /// This requires the current page to have been loaded, which is what records the next page's cursor.
    pub fn can_next(&self) -> bool {
        self.stack.can_step_forward() && !self.stack.is_at_tail()
    }

    /// Fetch the page at the current position.
    pub async fn load<T, E, F, Fut>(&mut self, fetch: F) -> Result<Vec<T>, E>
    where
        F: FnOnce(Option<String>) -> Fut,
        Fut: Future<Output = Result<Page<T>, E>>,
    {
        let page = fetch(self.stack.current_cursor().map(String::from)).await?;
        self.stack.record_cursor(page.cursor);
        Ok(page.items)
    }

    /// Fetch the next page.
    ///
    /// Returns `None` without fetching if there is no next page.
    pub async fn next<T, E, F, Fut>(&mut self, fetch: F) -> Result<Option<Vec<T>>, E>
    where
        F: FnOnce(Option<String>) -> Fut,
        Fut: Future<Output = Result<Page<T>, E>>,
    {
        if !self.can_next() {
            return Ok(None);
        }
        self.stack.step_forward();
        match self.load(fetch).await {
            Ok(items) => Ok(Some(items)),
            Err(e) => {
                tracing::debug!(position = self.stack.position(), "fetching next page failed, stepping back");
                self.stack.step_backward();
                Err(e)
            }
        }
    }

    /// Fetch the previous page.
    ///
    /// Returns `None` without fetching if there is no previous page.
    pub async fn previous<T, E, F, Fut>(&mut self, fetch: F) -> Result<Option<Vec<T>>, E>
    where
        F: FnOnce(Option<String>) -> Fut,
        Fut: Future<Output = Result<Page<T>, E>>,
    {
        if !self.can_previous() {
            return Ok(None);
        }
        self.stack.step_backward();
        match self.load(fetch).await {
            Ok(items) => Ok(Some(items)),
            Err(e) => {
                tracing::debug!(position = self.stack.position(), "fetching previous page failed, stepping forward");
                self.stack.step_forward();
                Err(e)
            }
        }
    }

    /// Forget every cursor, for use when the query itself changes.
    pub fn reset(&mut self) {
        self.stack.reset();
    }
}
