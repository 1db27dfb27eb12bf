//! Direct Message events
//!
//! The `direct_messages/events/*` endpoints deliver direct messages wrapped in `message_create`
//! events with a nested structure, and accept new messages in the same shape. The types in this
//! module flatten that structure on the way in and rebuild it on the way out.

use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::slice;
use std::vec;

use serde::{Deserialize, Serialize};

use crate::entities::{Entities, Hashtag, Media, Symbol, UrlEntity, UserMention};
use crate::html;
use crate::json_store::{ObjectKey, StoredJson};
use crate::types::{DateTime, EventId, MediaId, UserId};
use crate::util;

/// A `message_create` event, i.e. a direct message in the Direct Message event API.
///
/// Two events compare equal, and hash identically, when their IDs are equal.
#[derive(Clone, Debug, Deserialize)]
#[serde(from = "RawEvent")]
pub struct DirectMessageEvent {
    id: EventId,
    event_type: String,
    created_at: DateTime,
    recipient_id: UserId,
    sender_id: UserId,
    source_app_id: Option<u64>,
    text: String,
    entities: Entities,
    quick_reply_response: Option<QuickReplyResponse>,
    attachment: Option<Media>,
}

/// The option a user chose in reply to a quick reply prompt.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
pub struct QuickReplyResponse {
    /// Type of the quick reply, `options` for now.
    #[serde(rename = "type")]
    pub kind: String,
    /// The `metadata` of the chosen `QuickReplyOption`.
    #[serde(default)]
    pub metadata: Option<String>,
}

/// A page of direct message events, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectMessageEventList {
    events: Vec<DirectMessageEvent>,
    next_cursor: Option<String>,
}

/// A new direct message to be sent with `DirectMessagesResources::create_message`.
///
/// ## Example
///
/// ```rust
/// use twitter_rest::{MessageData, QuickReplyOption};
///
/// let message = MessageData::new(783214, "Which one?")
///     .quick_reply_option(QuickReplyOption::new("Red").metadata("red"))
///     .quick_reply_option(QuickReplyOption::new("Blue").metadata("blue"));
/// # let _ = message;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageData {
    recipient_id: UserId,
    text: String,
    media_id: Option<MediaId>,
    quick_reply_options: Vec<QuickReplyOption>,
}

/// An option of a quick reply prompt attached to a `MessageData`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuickReplyOption {
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<String>,
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(deserialize_with = "util::deserialize_id")]
    id: EventId,
    #[serde(rename = "type")]
    event_type: String,
    #[serde(deserialize_with = "util::deserialize_timestamp_ms")]
    created_timestamp: DateTime,
    message_create: RawMessageCreate,
}

#[derive(Deserialize)]
struct RawMessageCreate {
    target: RawTarget,
    #[serde(deserialize_with = "util::deserialize_id")]
    sender_id: UserId,
    #[serde(default, deserialize_with = "util::deserialize_opt_id")]
    source_app_id: Option<u64>,
    message_data: RawMessageData,
}

#[derive(Deserialize)]
struct RawTarget {
    #[serde(deserialize_with = "util::deserialize_id")]
    recipient_id: UserId,
}

#[derive(Deserialize)]
struct RawMessageData {
    text: String,
    #[serde(default, deserialize_with = "util::deserialize_default")]
    entities: Entities,
    #[serde(default)]
    quick_reply_response: Option<QuickReplyResponse>,
    #[serde(default)]
    attachment: Option<RawAttachment>,
}

#[derive(Deserialize)]
struct RawAttachment {
    #[serde(default)]
    media: Option<Media>,
}

impl From<RawEvent> for DirectMessageEvent {
    fn from(raw: RawEvent) -> Self {
        let RawMessageCreate {
            target,
            sender_id,
            source_app_id,
            message_data,
        } = raw.message_create;
        let RawMessageData {
            text,
            mut entities,
            quick_reply_response,
            attachment,
        } = message_data;
        let mut attachment = attachment.and_then(|a| a.media);

        let indices = entities
            .indices_mut()
            .chain(attachment.iter_mut().map(|m| &mut m.indices));
        let text = html::unescape_and_slide(&text, indices);

        DirectMessageEvent {
            id: raw.id,
            event_type: raw.event_type,
            created_at: raw.created_timestamp,
            recipient_id: target.recipient_id,
            sender_id,
            source_app_id,
            text,
            entities,
            quick_reply_response,
            attachment,
        }
    }
}

impl DirectMessageEvent {
    pub fn id(&self) -> EventId {
        self.id
    }

    /// Type of the event. Always `message_create` for direct messages.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn created_at(&self) -> DateTime {
        self.created_at
    }

    pub fn recipient_id(&self) -> UserId {
        self.recipient_id
    }

    pub fn sender_id(&self) -> UserId {
        self.sender_id
    }

    /// ID of the app that sent the message, if any.
    pub fn source_app_id(&self) -> Option<u64> {
        self.source_app_id
    }

    pub fn text(&self) -> &str {
        &self.text
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

    pub fn quick_reply_response(&self) -> Option<&QuickReplyResponse> {
        self.quick_reply_response.as_ref()
    }

    /// The media attached to the message.
    pub fn attachment(&self) -> Option<&Media> {
        self.attachment.as_ref()
    }
}

impl PartialEq for DirectMessageEvent {
    fn eq(&self, other: &DirectMessageEvent) -> bool {
        self.id == other.id
    }
}

impl Eq for DirectMessageEvent {}

impl Hash for DirectMessageEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl StoredJson for DirectMessageEvent {
    fn json_key(&self) -> ObjectKey {
        ObjectKey::DirectMessageEvent(self.id)
    }
}

impl DirectMessageEventList {
    pub fn new(events: Vec<DirectMessageEvent>, next_cursor: Option<String>) -> Self {
        DirectMessageEventList {
            events,
            next_cursor,
        }
    }

    /// The cursor to pass to `get_direct_message_events` to get the next page,
    /// or `None` on the last page.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    pub fn into_vec(self) -> Vec<DirectMessageEvent> {
        self.events
    }
}

impl Deref for DirectMessageEventList {
    type Target = [DirectMessageEvent];

    fn deref(&self) -> &[DirectMessageEvent] {
        &self.events
    }
}

impl IntoIterator for DirectMessageEventList {
    type Item = DirectMessageEvent;
    type IntoIter = vec::IntoIter<DirectMessageEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a DirectMessageEventList {
    type Item = &'a DirectMessageEvent;
    type IntoIter = slice::Iter<'a, DirectMessageEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl MessageData {
    pub fn new(recipient_id: UserId, text: impl Into<String>) -> Self {
        MessageData {
            recipient_id,
            text: text.into(),
            media_id: None,
            quick_reply_options: Vec::new(),
        }
    }

    /// Attach a media uploaded with `media/upload` (`media_category=dm_image` or alike).
    pub fn media_id(mut self, media_id: MediaId) -> Self {
        self.media_id = Some(media_id);
        self
    }

    /// Append an option to the quick reply prompt of the message.
    pub fn quick_reply_option(mut self, option: QuickReplyOption) -> Self {
        self.quick_reply_options.push(option);
        self
    }

    pub fn recipient_id(&self) -> UserId {
        self.recipient_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Serializes the message as the body of a `POST direct_messages/events/new` request.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        #[derive(Serialize)]
        struct Envelope<'a> {
            event: Event<'a>,
        }

        #[derive(Serialize)]
        struct Event<'a> {
            #[serde(rename = "type")]
            event_type: &'static str,
            message_create: MessageCreate<'a>,
        }

        #[derive(Serialize)]
        struct MessageCreate<'a> {
            target: Target,
            message_data: Data<'a>,
        }

        #[derive(Serialize)]
        struct Target {
            #[serde(serialize_with = "util::serialize_id")]
            recipient_id: UserId,
        }

        #[derive(Serialize)]
        struct Data<'a> {
            text: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            attachment: Option<Attachment>,
            #[serde(skip_serializing_if = "Option::is_none")]
            quick_reply: Option<QuickReply<'a>>,
        }

        #[derive(Serialize)]
        struct Attachment {
            #[serde(rename = "type")]
            kind: &'static str,
            media: AttachmentMedia,
        }

        #[derive(Serialize)]
        struct AttachmentMedia {
            #[serde(serialize_with = "util::serialize_id")]
            id: MediaId,
        }

        #[derive(Serialize)]
        struct QuickReply<'a> {
            #[serde(rename = "type")]
            kind: &'static str,
            options: &'a [QuickReplyOption],
        }

        let envelope = Envelope {
            event: Event {
                event_type: "message_create",
                message_create: MessageCreate {
                    target: Target {
                        recipient_id: self.recipient_id,
                    },
                    message_data: Data {
                        text: &self.text,
                        attachment: self.media_id.map(|id| Attachment {
                            kind: "media",
                            media: AttachmentMedia { id },
                        }),
                        quick_reply: if self.quick_reply_options.is_empty() {
                            None
                        } else {
                            Some(QuickReply {
                                kind: "options",
                                options: &self.quick_reply_options,
                            })
                        },
                    },
                },
            },
        };

        serde_json::to_vec(&envelope)
    }
}

impl QuickReplyOption {
    pub fn new(label: impl Into<String>) -> Self {
        QuickReplyOption {
            label: label.into(),
            description: None,
            metadata: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Metadata to be sent back in the `quick_reply_response` when the option is chosen.
    pub fn metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
