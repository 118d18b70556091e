//! Absolute navigation links for a resolved page.

use url::Url;

use crate::request::{PAGE_QUERY_PARAM, PageWindow};

/// Build the `(next, previous)` links for `window`, relative to `base`.
///
/// `base` is the absolute URL of the current request. Query parameters other
/// than `page` are preserved. The link back to page one omits `page`
/// entirely so that the first page has a single canonical address.
#[must_use]
pub fn page_links(base: &Url, window: &PageWindow) -> (Option<Url>, Option<Url>) {
    let number = window.number();
    let next = window
        .has_next()
        .then(|| with_page(base, Some(number + 1)));
    let previous = window.has_previous().then(|| {
        let target = number - 1;
        with_page(base, (target > 1).then_some(target))
    });
    (next, previous)
}

fn with_page(base: &Url, page: Option<u64>) -> Url {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != PAGE_QUERY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    url.set_query(None);
    if !retained.is_empty() || page.is_some() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        if let Some(number) = page {
            pairs.append_pair(PAGE_QUERY_PARAM, &number.to_string());
        }
    }
    url
}

#[cfg(test)]
mod tests {
    //! Link construction around the first and last pages.

    use std::num::NonZeroU64;

    use rstest::rstest;

    use super::*;
    use crate::request::PageRequest;

    fn window(raw: &str, total: u64) -> PageWindow {
        let size = NonZeroU64::new(100).expect("non-zero size");
        PageRequest::from_query(Some(raw), size)
            .expect("valid selector")
            .window(total)
            .expect("page in range")
    }

    fn url(raw: &str) -> Url {
        Url::parse(raw).expect("valid url")
    }

    #[rstest]
    fn single_page_has_no_links() {
        let (next, previous) = page_links(&url("http://host/guests/"), &window("1", 3));
        assert!(next.is_none());
        assert!(previous.is_none());
    }

    #[rstest]
    fn first_of_many_links_forward() {
        let (next, previous) = page_links(&url("http://host/guests/"), &window("1", 150));
        assert_eq!(
            next.map(String::from).as_deref(),
            Some("http://host/guests/?page=2")
        );
        assert!(previous.is_none());
    }

    #[rstest]
    fn link_back_to_first_page_drops_page_param() {
        let (next, previous) =
            page_links(&url("http://host/guests/?page=2"), &window("2", 150));
        assert!(next.is_none());
        assert_eq!(
            previous.map(String::from).as_deref(),
            Some("http://host/guests/")
        );
    }

    #[rstest]
    fn middle_page_links_both_ways_and_keeps_other_params() {
        let (next, previous) = page_links(
            &url("http://host/guests/?page=3&format=json"),
            &window("3", 450),
        );
        assert_eq!(
            next.map(String::from).as_deref(),
            Some("http://host/guests/?format=json&page=4")
        );
        assert_eq!(
            previous.map(String::from).as_deref(),
            Some("http://host/guests/?format=json&page=2")
        );
    }
}
