//! A client of the Twitter REST API, generic over the underlying HTTP client.

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use bytes::Bytes;
use futures_util::future;
use futures_util::stream::TryStreamExt;
use http::header::{
    HeaderMap, HeaderValue, ACCEPT_ENCODING, AUTHORIZATION, CONTENT_ENCODING, CONTENT_LENGTH,
    CONTENT_TYPE,
};
use http::{Request, Response as HttpResponse};
use http_body::Body;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tower_service::Service;

use crate::config::Config;
use crate::direct_message::DirectMessage;
use crate::error::Error;
use crate::event::{DirectMessageEvent, DirectMessageEventList};
use crate::gzip;
use crate::json_store::{self, StoredJson};
use crate::response::Response;
use crate::token::Token;
use crate::types::RequestMethod;
use crate::util::HttpBodyAsStream;

/// A client of the Twitter REST API.
///
/// `S` is an HTTP client, i.e. a [`Service`] taking `http::Request<B>`s and returning
/// `http::Response`s. With the default `hyper` feature, `twitter_rest::hyper::Client`
/// provides a ready-made client.
///
/// The API resources are provided as traits like [`DirectMessagesResources`].
///
/// [`DirectMessagesResources`]: crate::DirectMessagesResources
pub struct Client<S, B> {
    http: S,
    token: Token,
    config: Config,
    marker: PhantomData<fn() -> B>,
}

/// A body of a response, converted to the type of a resource.
pub(crate) trait FromResponse: Sized {
    /// Converts the body. `store` tells whether to register the parsed objects
    /// to the `json_store`.
    fn from_body(body: Vec<u8>, store: bool) -> serde_json::Result<Self>;
}

impl<S, B> Client<S, B> {
    /// Creates a client which sends requests through `http`.
    pub fn from_service(http: S, token: Token) -> Self {
        Self::with_service(http, token, Config::default())
    }

    /// Same as `from_service` but with a custom `Config`.
    pub fn with_service(http: S, token: Token, config: Config) -> Self {
        Client {
            http,
            token,
            config,
            marker: PhantomData,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Returns the underlying HTTP client.
    pub fn service(&self) -> &S {
        &self.http
    }

    /// Builds a signed request without a body. `params` go to the query string.
    pub(crate) fn request<R>(
        &self,
        method: RequestMethod,
        url: String,
        params: &R,
    ) -> Result<Request<B>, http::Error>
    where
        R: oauth::Request + ?Sized,
        B: Default,
    {
        let authorization = self.oauth().build(method.as_str(), &url, params);
        let uri = oauth::to_uri_query(url, params);

        self.builder(method, authorization)
            .uri(uri)
            .body(B::default())
    }

    /// Builds a signed request with `params` in a `application/x-www-form-urlencoded` body.
    pub(crate) fn post_form<R>(&self, url: String, params: &R) -> Result<Request<B>, http::Error>
    where
        R: oauth::Request + ?Sized,
        B: From<Vec<u8>>,
    {
        let authorization = self.oauth().build("POST", &url, params);
        let form = oauth::to_form_urlencoded(params);

        self.builder(RequestMethod::POST, authorization)
            .uri(url)
            .header(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            )
            .header(CONTENT_LENGTH, form.len())
            .body(form.into_bytes().into())
    }

    /// Builds a signed request with a JSON body. The body is not part of the signature.
    pub(crate) fn post_json(&self, url: String, json: Vec<u8>) -> Result<Request<B>, http::Error>
    where
        B: From<Vec<u8>>,
    {
        let authorization = self.oauth().build("POST", &url, &());

        self.builder(RequestMethod::POST, authorization)
            .uri(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(CONTENT_LENGTH, json.len())
            .body(json.into())
    }

    fn builder(&self, method: RequestMethod, authorization: String) -> http::request::Builder {
        let req = Request::builder()
            .method(method)
            .header(AUTHORIZATION, authorization);
        if self.config.gzip && gzip::ENABLED {
            req.header(ACCEPT_ENCODING, HeaderValue::from_static("gzip"))
        } else {
            req
        }
    }

    fn oauth(&self) -> oauth::Builder<'_, oauth::HmacSha1, &str> {
        let mut oauth = oauth::Builder::new(self.token.client.as_ref(), oauth::HmacSha1);
        oauth.token(self.token.token.as_ref());
        oauth
    }

    /// Sends `req` and converts the response body into `T`.
    pub(crate) async fn send<T, ResB>(
        &self,
        req: Request<B>,
    ) -> Result<Response<T>, Error<S::Error>>
    where
        T: FromResponse,
        S: Service<Request<B>, Response = HttpResponse<ResB>> + Clone,
        ResB: Body,
        ResB::Error: Into<S::Error>,
    {
        log::debug!("{} {}", req.method(), req.uri());

        let mut http = self.http.clone();
        future::poll_fn(|cx| http.poll_ready(cx))
            .await
            .map_err(Error::Service)?;
        let res = http.call(req).await.map_err(Error::Service)?;

        let (parts, body) = res.into_parts();
        let body = HttpBodyAsStream::new(body)
            .map_err(Into::<S::Error>::into)
            .try_fold(Vec::new(), |mut vec, chunk| {
                vec.extend_from_slice(&chunk);
                future::ok(vec)
            })
            .await
            .map_err(Error::Service)?;
        log::trace!("received {} bytes ({})", body.len(), parts.status);

        let body = if is_gzip(&parts.headers) {
            let body = gzip::decode(body).map_err(Error::Gzip)?;
            log::trace!("inflated to {} bytes", body.len());
            body
        } else {
            body
        };

        if !parts.status.is_success() {
            log::warn!("the API responded with {}", parts.status);
            return Err(Error::from_response(parts.status, &body));
        }

        let data = T::from_body(body, self.config.json_store_enabled)?;
        Ok(Response::new(&parts.headers, data))
    }
}

impl<S: Clone, B> Clone for Client<S, B> {
    fn clone(&self) -> Self {
        Client {
            http: self.http.clone(),
            token: self.token.clone(),
            config: self.config.clone(),
            marker: PhantomData,
        }
    }
}

impl<S: Debug, B> Debug for Client<S, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("http", &self.http)
            .field("config", &self.config)
            .finish()
    }
}

fn is_gzip(headers: &HeaderMap) -> bool {
    headers
        .get_all(CONTENT_ENCODING)
        .iter()
        .any(|e| e == "gzip")
}

/// Parses a single object, registering its JSON when `store` is set.
fn parse_object<T>(value: Value, store: bool) -> serde_json::Result<T>
where
    T: DeserializeOwned + StoredJson,
{
    if store {
        let json = value.to_string();
        let obj = T::deserialize(value)?;
        json_store::register(&obj, json);
        Ok(obj)
    } else {
        T::deserialize(value)
    }
}

fn parse_list<T>(values: Vec<Value>, store: bool) -> serde_json::Result<Vec<T>>
where
    T: DeserializeOwned + StoredJson,
{
    values
        .into_iter()
        .map(|value| parse_object(value, store))
        .collect()
}

impl FromResponse for DirectMessage {
    fn from_body(body: Vec<u8>, store: bool) -> serde_json::Result<Self> {
        if store {
            json_store::clear();
            parse_object(serde_json::from_slice(&body)?, true)
        } else {
            DirectMessage::from_slice(&body)
        }
    }
}

impl FromResponse for Vec<DirectMessage> {
    fn from_body(body: Vec<u8>, store: bool) -> serde_json::Result<Self> {
        if store {
            json_store::clear();
            parse_list(serde_json::from_slice(&body)?, true)
        } else {
            DirectMessage::parse_list(&body)
        }
    }
}

#[derive(Deserialize)]
struct EventEnvelope<T> {
    event: T,
}

#[derive(Deserialize)]
struct EventPage<T> {
    #[serde(default = "Vec::new")]
    events: Vec<T>,
    #[serde(default)]
    next_cursor: Option<String>,
}

impl FromResponse for DirectMessageEvent {
    fn from_body(body: Vec<u8>, store: bool) -> serde_json::Result<Self> {
        if store {
            json_store::clear();
            let EventEnvelope { event } = serde_json::from_slice::<EventEnvelope<Value>>(&body)?;
            parse_object(event, true)
        } else {
            serde_json::from_slice::<EventEnvelope<_>>(&body).map(|e| e.event)
        }
    }
}

impl FromResponse for DirectMessageEventList {
    fn from_body(body: Vec<u8>, store: bool) -> serde_json::Result<Self> {
        if store {
            json_store::clear();
            let page = serde_json::from_slice::<EventPage<Value>>(&body)?;
            let events = parse_list(page.events, true)?;
            Ok(DirectMessageEventList::new(events, page.next_cursor))
        } else {
            let page = serde_json::from_slice::<EventPage<_>>(&body)?;
            Ok(DirectMessageEventList::new(page.events, page.next_cursor))
        }
    }
}

impl FromResponse for () {
    fn from_body(_: Vec<u8>, store: bool) -> serde_json::Result<Self> {
        if store {
            json_store::clear();
        }
        Ok(())
    }
}

impl FromResponse for Bytes {
    fn from_body(body: Vec<u8>, store: bool) -> serde_json::Result<Self> {
        if store {
            json_store::clear();
        }
        Ok(body.into())
    }
}
