//! Users

use std::hash::{Hash, Hasher};

use serde::Deserialize;

use crate::types::{DateTime, UserId};
use crate::util;

/// A snapshot of a user on Twitter, as embedded in direct messages.
///
/// Only `id` is required. The other fields fall back to their defaults when absent,
/// since the embedded objects vary between endpoints.
///
/// Two `User`s compare equal when their `id`s are equal.
///
/// # Reference
///
/// 1. [User object | Twitter Developers](https://developer.twitter.com/en/docs/twitter-api/v1/data-dictionary/object-model/user)
#[derive(Clone, Debug, Deserialize)]
pub struct User {
    /// The integer representation of the unique identifier for this User.
    #[serde(deserialize_with = "util::deserialize_id")]
    pub id: UserId,

    /// The name of the user, as they've defined it.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub name: String,

    /// The screen name, handle, or alias that this user identifies themselves with.
    ///
    /// `screen_name`s are unique but subject to change. Use `id` as a user identifier whenever
    /// possible.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub screen_name: String,

    /// The user-defined location for this account's profile.
    #[serde(default)]
    pub location: Option<String>,

    /// The user-defined UTF-8 string describing their account.
    #[serde(default)]
    pub description: Option<String>,

    /// A URL provided by the user in association with their profile.
    #[serde(default)]
    pub url: Option<String>,

    /// When `true`, indicates that this user has chosen to protect their Tweets.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub protected: bool,

    /// When `true`, indicates that the user has a verified account.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub verified: bool,

    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub followers_count: u64,

    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub friends_count: u64,

    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub listed_count: u64,

    /// British spelling used in the field name for historical reasons.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub favourites_count: u64,

    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub statuses_count: u64,

    /// The UTC datetime that the user account was created on Twitter.
    #[serde(default, deserialize_with = "util::deserialize_opt_datetime")]
    pub created_at: Option<DateTime>,

    /// The BCP 47 code for the user's self-declared user interface language.
    #[serde(default)]
    pub lang: Option<String>,

    #[serde(default)]
    pub time_zone: Option<String>,

    /// The offset from GMT/UTC in seconds.
    #[serde(default)]
    pub utc_offset: Option<i64>,

    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub geo_enabled: bool,

    /// When `true`, indicates that the user has not altered the theme or background of their
    /// user profile.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub default_profile: bool,

    /// When `true`, indicates that the user has not uploaded their own avatar.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub default_profile_image: bool,

    /// A HTTPS-based URL pointing to the user's avatar image.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub profile_image_url_https: String,

    #[serde(default)]
    pub profile_banner_url: Option<String>,
}

impl PartialEq for User {
    fn eq(&self, other: &User) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_fields() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 6253282,
                "id_str": "6253282",
                "name": "Twitter API",
                "screen_name": "TwitterAPI",
                "description": null,
                "followers_count": null,
                "created_at": "Wed May 23 06:01:13 +0000 2007",
                "translator_type": "regular"
            }"#,
        )
        .unwrap();

        assert_eq!(user.id, 6253282);
        assert_eq!(user.screen_name, "TwitterAPI");
        assert_eq!(user.description, None);
        assert_eq!(user.followers_count, 0);
        assert!(user.created_at.is_some());
        assert!(!user.verified);
    }

    #[test]
    fn id_is_required() {
        assert!(serde_json::from_str::<User>(r#"{"screen_name":"jack"}"#).is_err());
    }

    #[test]
    fn equality_by_id() {
        let a: User = serde_json::from_str(r#"{"id":1,"name":"a"}"#).unwrap();
        let b: User = serde_json::from_str(r#"{"id":1,"name":"b"}"#).unwrap();
        let c: User = serde_json::from_str(r#"{"id":2,"name":"a"}"#).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
