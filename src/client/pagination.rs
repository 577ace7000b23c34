//! Pagination types for Graph collection responses
//!
//! Graph list endpoints return one of two shapes: an object carrying a
//! `value` array and an optional absolute `@odata.nextLink` URL, or (rarely)
//! a bare array for unpaged collections. The fetch loop in
//! [`crate::client::GraphClient`] follows next links until they run out.

use serde::Deserialize;

/// Page-size hint (`$top`) sent with list requests
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Hard ceiling on pages followed in a single listing.
///
/// Hitting the cap finalizes the accumulated results as a success; it exists
/// to bound a malfunctioning backend that keeps handing out next links.
pub const MAX_PAGES: usize = 1000;

/// One page of a Graph collection response
#[derive(Debug, Deserialize)]
pub struct ListPage<T> {
    /// Items in this page
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,

    /// Absolute URL of the next page; absent on the final page
    #[serde(default, rename = "@odata.nextLink")]
    pub next_link: Option<String>,
}

/// A list response body: a paged object or a bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PageBody<T> {
    Collection(ListPage<T>),
    Items(Vec<T>),
}

impl<T> PageBody<T> {
    /// Split into (items, next link). Bare arrays never have a next page.
    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        match self {
            PageBody::Collection(page) => (page.value, page.next_link),
            PageBody::Items(items) => (items, None),
        }
    }
}
