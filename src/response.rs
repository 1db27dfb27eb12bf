//! Metadata attached to every response of the API.

use std::ops::{Deref, DerefMut};

use chrono::TimeZone;
use http::HeaderMap;

use crate::types::DateTime;

str_enum! {
    /// Access level of the token used for a request, as reported in `x-access-level`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum AccessLevel {
        Read = "read",
        ReadWrite = "read-write",
        ReadWriteDirectMessages = "read-write-directmessages",
    }
}

/// Rate limit status of an endpoint, as reported in the `x-rate-limit-*` headers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RateLimitStatus {
    /// The rate limit ceiling for the endpoint.
    pub limit: u32,
    /// The number of requests left for the current window.
    pub remaining: u32,
    /// The time at which the current window resets.
    pub reset: DateTime,
}

/// A value returned from the API along with the metadata of the response carrying it.
///
/// `Response<T>` dereferences to `T`.
#[derive(Clone, Debug)]
pub struct Response<T> {
    pub rate_limit_status: Option<RateLimitStatus>,
    pub access_level: Option<AccessLevel>,
    pub data: T,
}

impl RateLimitStatus {
    const LIMIT: &'static str = "x-rate-limit-limit";
    const REMAINING: &'static str = "x-rate-limit-remaining";
    const RESET: &'static str = "x-rate-limit-reset";

    /// Reads the status from response headers.
    /// Returns `None` unless all three headers are present and well-formed.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let limit = header_value(headers, Self::LIMIT)?.parse().ok()?;
        let remaining = header_value(headers, Self::REMAINING)?.parse().ok()?;
        let reset = header_value(headers, Self::RESET)?.parse().ok()?;
        let reset = chrono::Utc.timestamp_opt(reset, 0).single()?;

        Some(RateLimitStatus {
            limit,
            remaining,
            reset,
        })
    }

    /// Seconds until the current window resets, counted from `now`. Zero if already reset.
    pub fn seconds_until_reset(&self, now: DateTime) -> i64 {
        (self.reset - now).num_seconds().max(0)
    }
}

impl AccessLevel {
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        header_value(headers, "x-access-level").and_then(AccessLevel::from_str_opt)
    }
}

impl<T> Response<T> {
    pub fn new(headers: &HeaderMap, data: T) -> Self {
        Response {
            rate_limit_status: RateLimitStatus::from_headers(headers),
            access_level: AccessLevel::from_headers(headers),
            data,
        }
    }

    pub fn into_inner(self) -> T {
        self.data
    }

    /// Maps the data while keeping the metadata.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Response<U> {
        Response {
            rate_limit_status: self.rate_limit_status,
            access_level: self.access_level,
            data: f(self.data),
        }
    }
}

impl<T> Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T> DerefMut for Response<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::trim)
}
