//! Resources of the Direct Message API.

use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response as HttpResponse};
use http_body::Body;
use tower_service::Service;

use crate::client::Client;
use crate::direct_message::DirectMessage;
use crate::error::Error;
use crate::event::{DirectMessageEvent, DirectMessageEventList, MessageData};
use crate::paging::Paging;
use crate::response::Response;
use crate::types::{DirectMessageId, EventId, RequestMethod, UserId};

/// The recipient of a direct message, either a user ID or a screen name.
///
/// ```rust
/// use twitter_rest::Recipient;
///
/// assert_eq!(Recipient::from(783214), Recipient::UserId(783214));
/// assert_eq!(Recipient::from("twitter"), Recipient::ScreenName("twitter"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Recipient<'a> {
    UserId(UserId),
    ScreenName(&'a str),
}

/// Methods of the `direct_messages` family of endpoints.
///
/// See the [Twitter Developer Documentation][1] for more information.
///
/// [1]: https://developer.twitter.com/en/docs/direct-messages/api-features
#[async_trait]
pub trait DirectMessagesResources {
    type Error;

    /// Returns the 20 most recent direct messages sent to the authenticating user,
    /// unless `paging` says otherwise.
    async fn get_direct_messages(
        &self,
        paging: &Paging,
    ) -> Result<Response<Vec<DirectMessage>>, Self::Error>;

    /// Returns the 20 most recent direct messages sent by the authenticating user,
    /// unless `paging` says otherwise.
    async fn get_sent_direct_messages(
        &self,
        paging: &Paging,
    ) -> Result<Response<Vec<DirectMessage>>, Self::Error>;

    /// Returns direct message events (both sent and received) within the last 30 days,
    /// in reverse chronological order.
    ///
    /// Pass the `next_cursor` of a previous list as `cursor` to retrieve the next page.
    async fn get_direct_message_events(
        &self,
        count: u32,
        cursor: Option<&str>,
    ) -> Result<Response<DirectMessageEventList>, Self::Error>;

    /// Returns a single direct message.
    async fn show_direct_message(
        &self,
        id: DirectMessageId,
    ) -> Result<Response<DirectMessage>, Self::Error>;

    /// Returns a single direct message event.
    async fn show_direct_message_event(
        &self,
        id: EventId,
    ) -> Result<Response<DirectMessageEvent>, Self::Error>;

    /// Destroys a direct message, returning the destroyed message.
    /// The authenticating user must be the recipient of the message.
    async fn destroy_direct_message(
        &self,
        id: DirectMessageId,
    ) -> Result<Response<DirectMessage>, Self::Error>;

    /// Deletes a direct message event from the authenticating user's view.
    async fn destroy_direct_message_event(&self, id: EventId) -> Result<Response<()>, Self::Error>;

    /// Publishes a new `message_create` event.
    async fn create_message(
        &self,
        message: &MessageData,
    ) -> Result<Response<DirectMessageEvent>, Self::Error>;

    /// Sends a new direct message to `recipient`.
    async fn send_direct_message(
        &self,
        recipient: Recipient<'_>,
        text: &str,
    ) -> Result<Response<DirectMessage>, Self::Error>;

    /// Downloads an image attached to a direct message.
    ///
    /// `url` is the absolute URL of the media, which requires an authenticated request.
    async fn get_dm_image(&self, url: &str) -> Result<Response<Bytes>, Self::Error>;
}

#[derive(oauth::Request)]
struct Id {
    id: u64,
}

#[derive(oauth::Request)]
struct EventsList<'a> {
    count: u32,
    cursor: Option<&'a str>,
}

#[derive(oauth::Request)]
struct NewDirectMessage<'a> {
    screen_name: Option<&'a str>,
    text: &'a str,
    user_id: Option<u64>,
}

#[async_trait]
impl<S, B, ResB> DirectMessagesResources for Client<S, B>
where
    S: Service<Request<B>, Response = HttpResponse<ResB>> + Clone + Send + Sync,
    S::Future: Send,
    S::Error: Send,
    B: Default + From<Vec<u8>> + Send,
    ResB: Body + Send,
    ResB::Data: Send,
    ResB::Error: Into<S::Error>,
{
    type Error = Error<S::Error>;

    async fn get_direct_messages(
        &self,
        paging: &Paging,
    ) -> Result<Response<Vec<DirectMessage>>, Self::Error> {
        let url = self.config().endpoint("direct_messages.json");
        let req = self.request(RequestMethod::GET, url, paging)?;
        self.send(req).await
    }

    async fn get_sent_direct_messages(
        &self,
        paging: &Paging,
    ) -> Result<Response<Vec<DirectMessage>>, Self::Error> {
        let url = self.config().endpoint("direct_messages/sent.json");
        let req = self.request(RequestMethod::GET, url, paging)?;
        self.send(req).await
    }

    async fn get_direct_message_events(
        &self,
        count: u32,
        cursor: Option<&str>,
    ) -> Result<Response<DirectMessageEventList>, Self::Error> {
        let url = self.config().endpoint("direct_messages/events/list.json");
        let req = self.request(RequestMethod::GET, url, &EventsList { count, cursor })?;
        self.send(req).await
    }

    async fn show_direct_message(
        &self,
        id: DirectMessageId,
    ) -> Result<Response<DirectMessage>, Self::Error> {
        let url = self.config().endpoint("direct_messages/show.json");
        let req = self.request(RequestMethod::GET, url, &Id { id })?;
        self.send(req).await
    }

    async fn show_direct_message_event(
        &self,
        id: EventId,
    ) -> Result<Response<DirectMessageEvent>, Self::Error> {
        let url = self.config().endpoint("direct_messages/events/show.json");
        let req = self.request(RequestMethod::GET, url, &Id { id })?;
        self.send(req).await
    }

    async fn destroy_direct_message(
        &self,
        id: DirectMessageId,
    ) -> Result<Response<DirectMessage>, Self::Error> {
        let url = self.config().endpoint("direct_messages/destroy.json");
        let req = self.post_form(url, &Id { id })?;
        self.send(req).await
    }

    async fn destroy_direct_message_event(
        &self,
        id: EventId,
    ) -> Result<Response<()>, Self::Error> {
        let url = self.config().endpoint("direct_messages/events/destroy.json");
        let req = self.request(RequestMethod::DELETE, url, &Id { id })?;
        self.send(req).await
    }

    async fn create_message(
        &self,
        message: &MessageData,
    ) -> Result<Response<DirectMessageEvent>, Self::Error> {
        let url = self.config().endpoint("direct_messages/events/new.json");
        let req = self.post_json(url, message.to_json()?)?;
        self.send(req).await
    }

    async fn send_direct_message(
        &self,
        recipient: Recipient<'_>,
        text: &str,
    ) -> Result<Response<DirectMessage>, Self::Error> {
        let (user_id, screen_name) = match recipient {
            Recipient::UserId(id) => (Some(id), None),
            Recipient::ScreenName(name) => (None, Some(name)),
        };
        let params = NewDirectMessage {
            screen_name,
            text,
            user_id,
        };
        let url = self.config().endpoint("direct_messages/new.json");
        let req = self.post_form(url, &params)?;
        self.send(req).await
    }

    async fn get_dm_image(&self, url: &str) -> Result<Response<Bytes>, Self::Error> {
        let req = self.request(RequestMethod::GET, url.to_owned(), &())?;
        self.send(req).await
    }
}

impl From<UserId> for Recipient<'_> {
    fn from(id: UserId) -> Self {
        Recipient::UserId(id)
    }
}

impl<'a> From<&'a str> for Recipient<'a> {
    fn from(screen_name: &'a str) -> Self {
        Recipient::ScreenName(screen_name)
    }
}

impl<'a> From<&'a String> for Recipient<'a> {
    fn from(screen_name: &'a String) -> Self {
        Recipient::ScreenName(screen_name)
    }
}
