//! Repository-facing page results and the serialised list envelope.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::links::page_links;
use crate::request::PageWindow;

/// One window of items plus the total they were sliced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paged<T> {
    items: Vec<T>,
    total: u64,
    window: PageWindow,
}

impl<T> Paged<T> {
    /// Wrap the items returned for `window`.
    #[must_use]
    pub const fn new(items: Vec<T>, total: u64, window: PageWindow) -> Self {
        Self {
            items,
            total,
            window,
        }
    }

    /// Items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Total number of items across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// The window the items were taken from.
    #[must_use]
    pub const fn window(&self) -> &PageWindow {
        &self.window
    }

    /// Convert each item, keeping the window and total.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paged<U> {
        Paged {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            window: self.window,
        }
    }
}

/// List response body: `{count, next, previous, results}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages.
    pub count: u64,
    /// Absolute URL of the following page, if any.
    pub next: Option<String>,
    /// Absolute URL of the preceding page, if any.
    pub previous: Option<String>,
    /// Items on this page.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Build the envelope for `paged`, deriving links from the request URL.
    #[must_use]
    pub fn from_paged(paged: Paged<T>, base: &Url) -> Self {
        let (next, previous) = page_links(base, &paged.window);
        Self {
            count: paged.total,
            next: next.map(String::from),
            previous: previous.map(String::from),
            results: paged.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU64;

    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::request::PageRequest;

    #[rstest]
    fn envelope_serialises_with_null_links() {
        let size = NonZeroU64::new(100).expect("non-zero size");
        let window = PageRequest::first(size).window(0).expect("first page");
        let base = Url::parse("http://host/guests/").expect("url");
        let page = Page::from_paged(Paged::<u8>::new(Vec::new(), 0, window), &base);

        let value = serde_json::to_value(&page).expect("serialise page");
        assert_eq!(
            value,
            json!({ "count": 0, "next": null, "previous": null, "results": [] })
        );
    }

    #[rstest]
    fn map_keeps_window_and_total() {
        let size = NonZeroU64::new(2).expect("non-zero size");
        let window = PageRequest::first(size).window(3).expect("first page");
        let paged = Paged::new(vec![1_u8, 2], 3, window).map(|n| n * 10);
        assert_eq!(paged.items(), &[10, 20]);
        assert_eq!(paged.total(), 3);
        assert_eq!(paged.window().page_count(), 2);
    }
}
