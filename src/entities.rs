//! Entities

use serde::Deserialize;

use crate::types::{Indices, MediaId, UserId};
use crate::util;

/// Represents Entities.
///
/// Every category is always present. A category that is missing or `null` in the JSON
/// is represented by an empty `Vec`.
///
/// # Reference
///
/// 1. [Entities | Twitter Developers](https://developer.twitter.com/en/docs/twitter-api/v1/data-dictionary/object-model/entities)
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Hash)]
pub struct Entities {
    /// Represents hashtags which have been parsed out of the text.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub hashtags: Vec<Hashtag>,

    /// Represents media elements uploaded with the message.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub media: Vec<Media>,

    /// Represents URLs included in the text.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub urls: Vec<UrlEntity>,

    /// Represents other Twitter users mentioned in the text.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub user_mentions: Vec<UserMention>,

    /// Represents financial symbols which have been parsed out of the text.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub symbols: Vec<Symbol>,
}

/// Represents a hashtag in `hashtags` field of `Entities`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Hash)]
pub struct Hashtag {
    /// The first integer represents the location of the `#` character in the text.
    /// The second integer represents the location of the first character after the hashtag.
    pub indices: Indices,

    /// Name of the hashtag, minus the leading `#` character.
    pub text: String,
}

/// Represents `media` field in `Entities`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Hash)]
pub struct Media {
    /// URL of the media to display to clients.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub display_url: String,

    /// An expanded version of `display_url`. Links to the media display page.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub expanded_url: String,

    #[serde(deserialize_with = "util::deserialize_id")]
    pub id: MediaId,

    pub indices: Indices,

    /// An http:// URL pointing directly to the uploaded media file.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub media_url: String,

    /// An https:// URL pointing directly to the uploaded media file.
    ///
    /// For media in direct messages, `media_url_https` must be accessed by signing a request
    /// with the user's access token. See `DirectMessagesResources::get_dm_image`.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub media_url_https: String,

    /// An object showing available sizes for the media file.
    #[serde(default)]
    pub sizes: Option<Sizes>,

    /// Type of uploaded media, e.g. `photo`.
    #[serde(rename = "type", default, deserialize_with = "util::deserialize_default")]
    pub kind: String,

    /// Wrapped URL for the media link, as it appears in the text.
    pub url: String,
}

/// Represents the `sizes` field in `Media`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Hash)]
pub struct Sizes {
    pub thumb: Size,
    pub large: Size,
    pub medium: Size,
    pub small: Size,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Hash)]
pub struct Size {
    /// Height in pixels of this size.
    pub h: u64,

    /// Resizing method used to obtain this size, either `fit` or `crop`.
    pub resize: String,

    /// Width in pixels of this size.
    pub w: u64,
}

/// Represents a URL in `urls` field of `Entities`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Hash)]
pub struct UrlEntity {
    /// Version of the URL to display to clients.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub display_url: String,

    /// Expanded version of `display_url`.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub expanded_url: String,

    pub indices: Indices,

    /// Wrapped URL, corresponding to the value embedded directly into the raw text.
    pub url: String,
}

/// Represents a user in `user_mentions` field of `Entities`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Hash)]
pub struct UserMention {
    /// ID of the mentioned user.
    #[serde(deserialize_with = "util::deserialize_id")]
    pub id: UserId,

    /// The first integer represents the location of the `@` character of the user mention.
    /// The second integer represents the location of the first non-screenname character
    /// following the user mention.
    pub indices: Indices,

    /// Display name of the referenced user.
    #[serde(default, deserialize_with = "util::deserialize_default")]
    pub name: String,

    /// Screen name of the referenced user.
    pub screen_name: String,
}

/// Represents a financial symbol in `symbols` field of `Entities`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Hash)]
pub struct Symbol {
    pub text: String,
    pub indices: Indices,
}

impl Entities {
    /// Returns `true` if no category holds an entity.
    pub fn is_empty(&self) -> bool {
        self.hashtags.is_empty()
            && self.media.is_empty()
            && self.urls.is_empty()
            && self.user_mentions.is_empty()
            && self.symbols.is_empty()
    }

    /// Mutable references to the offsets of every entity, in no particular order.
    pub fn indices_mut(&mut self) -> impl Iterator<Item = &mut Indices> {
        let Entities {
            hashtags,
            media,
            urls,
            user_mentions,
            symbols,
        } = self;

        hashtags
            .iter_mut()
            .map(|e| &mut e.indices)
            .chain(media.iter_mut().map(|e| &mut e.indices))
            .chain(urls.iter_mut().map(|e| &mut e.indices))
            .chain(user_mentions.iter_mut().map(|e| &mut e.indices))
            .chain(symbols.iter_mut().map(|e| &mut e.indices))
    }
}
