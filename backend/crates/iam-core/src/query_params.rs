//! Lenient parsing of the `page` and `search` list parameters.
//!
//! Bad input never fails: an unusable page falls back to the first page and
//! a missing search means "no filter".

/// Query parameter carrying the 1-based page number
pub const PAGE_QUERY_PARAM: &str = "page";
/// Query parameter carrying the free-text name filter
pub const SEARCH_QUERY_PARAM: &str = "search";

const DEFAULT_PAGE: u32 = 1;

/// Parse a page number, defaulting to 1 unless it is a positive integer.
///
/// Like browser `parseInt`, only the leading run of digits counts, so
/// `"3abc"` and `"3.9"` both read as page 3.
pub fn parse_page_query_param(value: Option<&str>) -> u32 {
    value
        .and_then(leading_integer)
        .filter(|page| *page > 0)
        .unwrap_or(DEFAULT_PAGE)
}

fn leading_integer(value: &str) -> Option<u32> {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return None;
    }

    // Overflowing values are not a usable page either
    digits[..end].parse().ok()
}

/// Parse a search term, trimmed; empty when absent.
pub fn parse_search_query_param(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Paging and filtering for the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub page: u32,
    pub search: String,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            search: String::new(),
        }
    }
}

impl ListOptions {
    pub fn new(page: u32, search: impl Into<String>) -> Self {
        Self {
            page: page.max(DEFAULT_PAGE),
            search: search.into().trim().to_string(),
        }
    }

    /// Build options from raw query parameter values.
    pub fn from_query(page: Option<&str>, search: Option<&str>) -> Self {
        Self {
            page: parse_page_query_param(page),
            search: parse_search_query_param(search),
        }
    }

    /// The search term, or `None` when no filter should be sent.
    pub fn search(&self) -> Option<&str> {
        if self.search.is_empty() {
            None
        } else {
            Some(&self.search)
        }
    }

    /// Query pairs in the order the API expects them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![(PAGE_QUERY_PARAM, self.page.to_string())];
        if let Some(search) = self.search() {
            pairs.push((SEARCH_QUERY_PARAM, search.to_string()));
        }
        pairs
    }
}
