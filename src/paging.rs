//! Pagination parameters for timeline-like endpoints.

/// Controls pagination of `GET direct_messages` and `GET direct_messages/sent`.
///
/// Only the parameters that are set are sent.
///
/// ## Example
///
/// ```rust
/// use twitter_rest::Paging;
///
/// let paging = Paging::new().count(50).since_id(240136858829479936);
/// # let _ = paging;
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, oauth::Request)]
pub struct Paging {
    count: Option<u32>,
    max_id: Option<u64>,
    page: Option<u32>,
    since_id: Option<u64>,
}

impl Paging {
    pub fn new() -> Self {
        Paging::default()
    }

    /// Set the number of records to retrieve.
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Return results with an ID less than (older than) or equal to `max_id`.
    pub fn max_id(mut self, max_id: u64) -> Self {
        self.max_id = Some(max_id);
        self
    }

    /// Set the page of results to retrieve. Pages start at 1.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Return results with an ID greater than (newer than) `since_id`.
    pub fn since_id(mut self, since_id: u64) -> Self {
        self.since_id = Some(since_id);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Paging::default()
    }
}
