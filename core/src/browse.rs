//! Listing state kept in the navigable address, plus pagination controls.
//!
//! The listing's address carries `page` (1-based, omitted when 1) and `query`
//! (omitted when empty). Changing the search always returns to page 1.

/// Characters per listing page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Pages shown in the numbered window of the pagination control.
const WINDOW: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    pub page: u32,
    pub query: String,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            page: 1,
            query: String::new(),
        }
    }
}

impl BrowseState {
    /// Parse `page=N&query=Q` (a leading `?` is allowed). Unknown keys are
    /// ignored. The page is read from its leading digits (`3abc` is page 3); a
    /// missing, unparseable or zero page becomes 1.
    pub fn from_query_string(raw: &str) -> Self {
        let mut state = Self::default();
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "page" => state.page = leading_page(&value).unwrap_or(1),
                "query" => state.query = value.into_owned(),
                _ => {}
            }
        }
        state
    }

    /// Inverse of `from_query_string`, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        if self.page > 1 {
            out.append_pair("page", &self.page.to_string());
        }
        if !self.query.is_empty() {
            out.append_pair("query", &self.query);
        }
        out.finish()
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            query: self.query.clone(),
        }
    }

    /// Start a new search. The query is kept exactly as typed.
    pub fn with_search(&self, query: &str) -> Self {
        Self {
            page: 1,
            query: query.to_string(),
        }
    }

    pub fn offset(&self, per_page: u32) -> u32 {
        (self.page.max(1) - 1).saturating_mul(per_page)
    }

    /// The prefix to send as `nameStartsWith`, if any.
    pub fn name_prefix(&self) -> Option<&str> {
        (!self.query.is_empty()).then_some(self.query.as_str())
    }
}

/// What a pagination control should render for a given result total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current: u32,
    pub total_pages: u32,
    /// Consecutive page numbers to show, at most five.
    pub pages: Vec<u32>,
    pub show_first: bool,
    pub leading_gap: bool,
    pub show_last: bool,
    pub trailing_gap: bool,
}

impl PageWindow {
    /// `None` when everything fits on one page.
    pub fn new(total_items: u32, per_page: u32, current: u32) -> Option<Self> {
        let total_pages = total_pages(total_items, per_page);
        if total_pages <= 1 {
            return None;
        }
        let current = current.clamp(1, total_pages);

        let mut start = current.saturating_sub(2).max(1);
        let end = start.saturating_add(WINDOW - 1).min(total_pages);
        if end - start < WINDOW - 1 {
            start = end.saturating_sub(WINDOW - 1).max(1);
        }

        Some(Self {
            current,
            total_pages,
            pages: (start..=end).collect(),
            show_first: start > 1,
            leading_gap: start > 2,
            show_last: end < total_pages,
            trailing_gap: end.saturating_add(1) < total_pages,
        })
    }

    pub fn previous(&self) -> Option<u32> {
        (self.current > 1).then(|| self.current - 1)
    }

    pub fn next(&self) -> Option<u32> {
        (self.current < self.total_pages).then(|| self.current + 1)
    }
}

fn leading_page(raw: &str) -> Option<u32> {
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse::<u32>().ok().filter(|p| *p >= 1)
}

pub fn total_pages(total_items: u32, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}
