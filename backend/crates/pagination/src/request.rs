//! Page selection and window arithmetic.

use std::num::NonZeroU64;
use std::str::FromStr;

/// Query parameter carrying the requested page.
pub const PAGE_QUERY_PARAM: &str = "page";

const LAST_PAGE_KEYWORD: &str = "last";

/// Errors raised while interpreting a page request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// The selector was neither a positive integer nor `last`.
    #[error("invalid page selector: {raw:?}")]
    InvalidSelector {
        /// Raw selector text as received.
        raw: String,
    },
    /// The requested page lies past the final page.
    #[error("page {requested} is beyond the last page ({last})")]
    OutOfRange {
        /// Requested one-based page number.
        requested: u64,
        /// Final available page number.
        last: u64,
    },
}

/// Which page a client asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelector {
    /// A one-based page number.
    Number(NonZeroU64),
    /// The final page, whatever its number turns out to be.
    Last,
}

impl Default for PageSelector {
    fn default() -> Self {
        Self::Number(NonZeroU64::MIN)
    }
}

impl FromStr for PageSelector {
    type Err = PaginationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw == LAST_PAGE_KEYWORD {
            return Ok(Self::Last);
        }
        raw.parse::<u64>()
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self::Number)
            .ok_or_else(|| PaginationError::InvalidSelector {
                raw: raw.to_owned(),
            })
    }
}

/// A page selector paired with the fixed page size of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    selector: PageSelector,
    size: NonZeroU64,
}

impl PageRequest {
    /// Build a request from an already parsed selector.
    #[must_use]
    pub const fn new(selector: PageSelector, size: NonZeroU64) -> Self {
        Self { selector, size }
    }

    /// Request the first page.
    #[must_use]
    pub const fn first(size: NonZeroU64) -> Self {
        Self::new(PageSelector::Number(NonZeroU64::MIN), size)
    }

    /// Parse the raw `page` query value; `None` or an empty value selects
    /// the first page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidSelector`] when the value is not a
    /// positive integer or `last`.
    pub fn from_query(raw: Option<&str>, size: NonZeroU64) -> Result<Self, PaginationError> {
        let selector = raw
            .filter(|value| !value.is_empty())
            .map(str::parse)
            .transpose()?
            .unwrap_or_default();
        Ok(Self::new(selector, size))
    }

    /// Requested selector.
    #[must_use]
    pub const fn selector(&self) -> PageSelector {
        self.selector
    }

    /// Number of items per page.
    #[must_use]
    pub const fn size(&self) -> NonZeroU64 {
        self.size
    }

    /// Resolve the request against the total number of rows.
    ///
    /// An empty listing still has one (empty) first page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::OutOfRange`] when the selected page number
    /// exceeds the number of pages.
    pub fn window(&self, total: u64) -> Result<PageWindow, PaginationError> {
        let size = self.size.get();
        let page_count = total.div_ceil(size).max(1);
        let number = match self.selector {
            PageSelector::Number(number) => number.get(),
            PageSelector::Last => page_count,
        };
        if number > page_count {
            return Err(PaginationError::OutOfRange {
                requested: number,
                last: page_count,
            });
        }
        Ok(PageWindow {
            number,
            size,
            offset: (number - 1).saturating_mul(size),
            page_count,
        })
    }
}

/// A resolved page: its number, bounds and the total page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    number: u64,
    size: u64,
    offset: u64,
    page_count: u64,
}

impl PageWindow {
    /// One-based page number.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.size
    }

    /// Number of items preceding the page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Total number of pages.
    #[must_use]
    pub const fn page_count(&self) -> u64 {
        self.page_count
    }

    /// Whether a following page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number < self.page_count
    }

    /// Whether a preceding page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }
}
