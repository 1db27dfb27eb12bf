//! Common types used across the crate.

pub use http::Method as RequestMethod;
pub use http::StatusCode;
pub use http::Uri;

use chrono::Utc;

pub type DateTime = chrono::DateTime<Utc>;

/// Numerical ID of a user.
pub type UserId = u64;

/// ID of a direct message.
pub type DirectMessageId = u64;

/// ID of a direct message event.
pub type EventId = u64;

/// ID of an uploaded media.
pub type MediaId = u64;

/// A pair of integers indicating the offsets within a text where an entity begins and ends.
///
/// The first integer is the position of the first code point of the entity and the second is
/// the position of the first code point after it.
pub type Indices = (u64, u64);
