//! Page-number pagination primitives shared by list endpoints.
//!
//! The crate keeps pagination arithmetic and link construction out of the
//! HTTP handlers:
//!
//! - [`PageRequest`] parses the `page` query parameter (a positive integer or
//!   the keyword `last`) and resolves it against a total row count into a
//!   [`PageWindow`].
//! - [`Paged`] carries one window of items back from a repository.
//! - [`Page`] is the serialised list envelope `{count, next, previous,
//!   results}` with absolute navigation links.
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroU64;
//!
//! use pagination::{Page, PageRequest, Paged};
//! use url::Url;
//!
//! let size = NonZeroU64::new(2).expect("non-zero");
//! let request = PageRequest::from_query(Some("2"), size).expect("valid page");
//! let window = request.window(5).expect("page in range");
//! let paged = Paged::new(vec!["c", "d"], 5, window);
//!
//! let base = Url::parse("https://example.test/guests/?page=2").expect("url");
//! let page = Page::from_paged(paged, &base);
//! assert_eq!(page.count, 5);
//! assert_eq!(page.next.as_deref(), Some("https://example.test/guests/?page=3"));
//! assert_eq!(page.previous.as_deref(), Some("https://example.test/guests/"));
//! ```

mod envelope;
mod links;
mod request;

pub use envelope::{Page, Paged};
pub use links::page_links;
pub use request::{PAGE_QUERY_PARAM, PageRequest, PageSelector, PageWindow, PaginationError};
