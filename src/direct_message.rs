//! Direct messages

use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::Deserialize;

use crate::entities::{Entities, Hashtag, Media, Symbol, UrlEntity, UserMention};
use crate::html;
use crate::json_store::{ObjectKey, StoredJson};
use crate::types::{DateTime, DirectMessageId, UserId};
use crate::user::User;
use crate::util;

/// A direct message sent or received by the authenticating user.
///
/// A `DirectMessage` is immutable once parsed. Two messages compare equal, and hash
/// identically, when their IDs are equal.
///
/// The text is HTML-unescaped and the entity offsets point into the unescaped text.
///
/// ## Example
///
/// ```rust
/// use twitter_rest::DirectMessage;
///
/// let json = r#"{
///     "id": 240136858829479936,
///     "sender_id": 12, "recipient_id": 13,
///     "sender_screen_name": "jack", "recipient_screen_name": "biz",
///     "sender": {"id": 12, "screen_name": "jack"},
///     "recipient": {"id": 13, "screen_name": "biz"},
///     "created_at": "Mon Aug 27 17:21:03 +0000 2012",
///     "text": "booyakasha &amp; #hello"
/// }"#;
///
/// let dm: DirectMessage = json.parse().unwrap();
/// assert_eq!(dm.id(), 240136858829479936);
/// assert_eq!(dm.text(), "booyakasha & #hello");
/// assert!(dm.hashtag_entities().is_empty());
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(from = "RawDirectMessage")]
pub struct DirectMessage {
    id: DirectMessageId,
    text: String,
    sender_id: UserId,
    recipient_id: UserId,
    created_at: Option<DateTime>,
    sender_screen_name: String,
    recipient_screen_name: String,
    sender: User,
    recipient: User,
    entities: Entities,
}

/// The message object as it appears on the wire.
#[derive(Deserialize)]
struct RawDirectMessage {
    #[serde(deserialize_with = "util::deserialize_id")]
    id: DirectMessageId,
    #[serde(deserialize_with = "util::deserialize_id")]
    sender_id: UserId,
    #[serde(deserialize_with = "util::deserialize_id")]
    recipient_id: UserId,
    #[serde(default, deserialize_with = "util::deserialize_opt_datetime")]
    created_at: Option<DateTime>,
    #[serde(default, deserialize_with = "util::deserialize_default")]
    sender_screen_name: String,
    #[serde(default, deserialize_with = "util::deserialize_default")]
    recipient_screen_name: String,
    sender: User,
    recipient: User,
    #[serde(default, deserialize_with = "util::deserialize_default")]
    entities: Entities,
    text: String,
}

impl From<RawDirectMessage> for DirectMessage {
    fn from(raw: RawDirectMessage) -> Self {
        let RawDirectMessage {
            id,
            sender_id,
            recipient_id,
            created_at,
            sender_screen_name,
            recipient_screen_name,
            sender,
            recipient,
            mut entities,
            text,
        } = raw;

        let text = html::unescape_and_slide(&text, entities.indices_mut());
        let sender_screen_name = html::unescape(&sender_screen_name);
        let recipient_screen_name = html::unescape(&recipient_screen_name);

        DirectMessage {
            id,
            text,
            sender_id,
            recipient_id,
            created_at,
            sender_screen_name,
            recipient_screen_name,
            sender,
            recipient,
            entities,
        }
    }
}

impl DirectMessage {
    /// Parses a direct message from a JSON value.
    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Parses a direct message from a JSON byte slice.
    pub fn from_slice(json: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(json)
    }

    /// Parses a JSON array of direct messages, as returned by `GET direct_messages`.
    pub fn parse_list(json: &[u8]) -> serde_json::Result<Vec<Self>> {
        serde_json::from_slice(json)
    }

    pub fn id(&self) -> DirectMessageId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender_id(&self) -> UserId {
        self.sender_id
    }

    pub fn recipient_id(&self) -> UserId {
        self.recipient_id
    }

    /// The time the message was created, if the API reported it.
    pub fn created_at(&self) -> Option<DateTime> {
        self.created_at
    }

    pub fn sender_screen_name(&self) -> &str {
        &self.sender_screen_name
    }

    pub fn recipient_screen_name(&self) -> &str {
        &self.recipient_screen_name
    }

    pub fn sender(&self) -> &User {
        &self.sender
    }

    pub fn recipient(&self) -> &User {
        &self.recipient
    }

    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    pub fn user_mention_entities(&self) -> &[UserMention] {
        &self.entities.user_mentions
    }

    pub fn url_entities(&self) -> &[UrlEntity] {
        &self.entities.urls
    }

    pub fn hashtag_entities(&self) -> &[Hashtag] {
        &self.entities.hashtags
    }

    pub fn media_entities(&self) -> &[Media] {
        &self.entities.media
    }

    pub fn symbol_entities(&self) -> &[Symbol] {
        &self.entities.symbols
    }
}

impl FromStr for DirectMessage {
    type Err = serde_json::Error;

    fn from_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl PartialEq for DirectMessage {
    fn eq(&self, other: &DirectMessage) -> bool {
        self.id == other.id
    }
}

impl Eq for DirectMessage {}

impl Hash for DirectMessage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl StoredJson for DirectMessage {
    fn json_key(&self) -> ObjectKey {
        ObjectKey::DirectMessage(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::hash_map::DefaultHasher;

    use chrono::{TimeZone, Utc};

    const JSON: &str = r#"{
        "id": 240136858829479936,
        "id_str": "240136858829479936",
        "sender_id": 38895958,
        "sender_id_str": "38895958",
        "recipient_id": 14927800,
        "recipient_id_str": "14927800",
        "sender_screen_name": "theSeanCook",
        "recipient_screen_name": "Jason",
        "sender": {"id": 38895958, "screen_name": "theSeanCook", "name": "Sean Cook"},
        "recipient": {"id": 14927800, "screen_name": "Jason", "name": "Jason Costa"},
        "created_at": "Mon Aug 27 17:21:03 +0000 2012",
        "text": "Tom &amp; Jerry @jason #cartoon",
        "entities": {
            "hashtags": [{"indices": [23, 31], "text": "cartoon"}],
            "urls": [],
            "user_mentions": [{
                "id": 14927800,
                "name": "Jason Costa",
                "screen_name": "jason",
                "indices": [16, 22]
            }]
        }
    }"#;

    fn hash<T: Hash>(t: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        t.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn parse() {
        let dm: DirectMessage = JSON.parse().unwrap();

        assert_eq!(dm.id(), 240136858829479936);
        assert_eq!(dm.sender_id(), 38895958);
        assert_eq!(dm.recipient_id(), 14927800);
        assert_eq!(dm.sender_screen_name(), "theSeanCook");
        assert_eq!(dm.recipient_screen_name(), "Jason");
        assert_eq!(dm.sender().name, "Sean Cook");
        assert_eq!(dm.recipient().id, 14927800);
        assert_eq!(
            dm.created_at(),
            Some(Utc.with_ymd_and_hms(2012, 8, 27, 17, 21, 3).unwrap())
        );
        assert_eq!(dm.text(), "Tom & Jerry @jason #cartoon");

        let (start, end) = dm.hashtag_entities()[0].indices;
        assert_eq!((start, end), (19, 27));
        let tag: String = dm
            .text()
            .chars()
            .skip(start as usize)
            .take((end - start) as usize)
            .collect();
        assert_eq!(tag, "#cartoon");
        assert_eq!(dm.user_mention_entities()[0].indices, (12, 18));

        assert!(dm.url_entities().is_empty());
        assert!(dm.media_entities().is_empty());
        assert!(dm.symbol_entities().is_empty());
    }

    #[test]
    fn absent_entities_are_empty() {
        let mut value: serde_json::Value = serde_json::from_str(JSON).unwrap();
        value.as_object_mut().unwrap().remove("entities");
        let dm = DirectMessage::from_value(value.clone()).unwrap();
        assert!(dm.entities().is_empty());

        value["entities"] = serde_json::Value::Null;
        let dm = DirectMessage::from_value(value).unwrap();
        assert!(dm.hashtag_entities().is_empty());
        assert!(dm.user_mention_entities().is_empty());
    }

    #[test]
    fn required_fields() {
        for field in &["id", "sender_id", "recipient_id"] {
            let mut value: serde_json::Value = serde_json::from_str(JSON).unwrap();
            value.as_object_mut().unwrap().remove(*field);
            assert!(
                DirectMessage::from_value(value).is_err(),
                "missing `{}` should fail",
                field,
            );
        }

        let mut value: serde_json::Value = serde_json::from_str(JSON).unwrap();
        value["sender_id"] = "not a number".into();
        assert!(DirectMessage::from_value(value).is_err());
    }

    #[test]
    fn lenient_fields() {
        let mut value: serde_json::Value = serde_json::from_str(JSON).unwrap();
        let obj = value.as_object_mut().unwrap();
        obj.remove("created_at");
        obj.remove("sender_screen_name");
        let dm = DirectMessage::from_value(value.clone()).unwrap();
        assert_eq!(dm.created_at(), None);
        assert_eq!(dm.sender_screen_name(), "");

        value["created_at"] = serde_json::Value::Null;
        assert_eq!(DirectMessage::from_value(value).unwrap().created_at(), None);
    }

    #[test]
    fn screen_names_are_unescaped() {
        let mut value: serde_json::Value = serde_json::from_str(JSON).unwrap();
        value["sender_screen_name"] = "Tom&amp;Jerry".into();
        value["recipient_screen_name"] = "a&lt;b".into();
        let dm = DirectMessage::from_value(value).unwrap();
        assert_eq!(dm.sender_screen_name(), "Tom&Jerry");
        assert_eq!(dm.recipient_screen_name(), "a<b");
    }

    #[test]
    fn symbols_are_slid() {
        let mut value: serde_json::Value = serde_json::from_str(JSON).unwrap();
        value["text"] = "Q&amp;A on $TWTR".into();
        value["entities"] = serde_json::json!({
            "symbols": [{"text": "TWTR", "indices": [11, 16]}]
        });
        let dm = DirectMessage::from_value(value).unwrap();
        assert_eq!(dm.text(), "Q&A on $TWTR");
        assert_eq!(dm.symbol_entities()[0].indices, (7, 12));
    }

    #[test]
    fn equality_and_hash_by_id() {
        let a: DirectMessage = JSON.parse().unwrap();

        let mut value: serde_json::Value = serde_json::from_str(JSON).unwrap();
        value["text"] = "something else".into();
        value["sender_id"] = 1.into();
        let b = DirectMessage::from_value(value.clone()).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));

        value["id"] = 1.into();
        let c = DirectMessage::from_value(value).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn from_slice() {
        let dm = DirectMessage::from_slice(JSON.as_bytes()).unwrap();
        assert_eq!(dm.json_key(), ObjectKey::DirectMessage(240136858829479936));

        let list = DirectMessage::parse_list(format!("[{}]", JSON).as_bytes()).unwrap();
        assert_eq!(list, [dm]);
        assert!(DirectMessage::parse_list(JSON.as_bytes()).is_err());
    }
}
