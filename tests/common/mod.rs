#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use futures::future::{BoxFuture, FutureExt};
use http::{HeaderMap, Method, Request, Response, StatusCode, Uri};
use hyper_pkg::Body;
use tower::util::ServiceFn;
use twitter_rest::{Client, Config, Token};

pub type ResponseFuture = BoxFuture<'static, Result<Response<Body>, hyper_pkg::Error>>;

pub type MockClient<F> = Client<ServiceFn<F>, Body>;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A request received by the mock service.
#[derive(Debug)]
pub struct Captured {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// The response that the mock service gives to every request.
#[derive(Clone, Debug)]
pub struct Reply {
    status: StatusCode,
    headers: Vec<(&'static str, Vec<u8>)>,
    body: Vec<u8>,
}

impl Captured {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn path(&self) -> &str {
        self.uri.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.uri.query()
    }

    pub fn body_str(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }
}

impl Reply {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Reply::with_status(StatusCode::OK, body)
    }

    pub fn with_status(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Reply {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<Vec<u8>>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    fn to_response(&self) -> Response<Body> {
        let mut res = Response::builder().status(self.status);
        for (name, value) in &self.headers {
            res = res.header(*name, &value[..]);
        }
        res.body(Body::from(self.body.clone())).unwrap()
    }
}

pub fn fixture(name: &str) -> Vec<u8> {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read(path).unwrap()
}

pub fn token() -> Token {
    Token::new(
        "consumer_key".to_owned(),
        "consumer_secret".to_owned(),
        "access_key".to_owned(),
        "access_secret".to_owned(),
    )
}

/// Creates a client whose requests are answered with `reply`, along with the list of the
/// requests it has sent.
pub fn mock(
    reply: Reply,
) -> (
    MockClient<impl FnMut(Request<Body>) -> ResponseFuture + Clone + Send + Sync>,
    Arc<Mutex<Vec<Captured>>>,
) {
    mock_with_config(reply, Config::default())
}

pub fn mock_with_config(
    reply: Reply,
    config: Config,
) -> (
    MockClient<impl FnMut(Request<Body>) -> ResponseFuture + Clone + Send + Sync>,
    Arc<Mutex<Vec<Captured>>>,
) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let service = {
        let captured = captured.clone();
        tower::service_fn(move |req: Request<Body>| {
            let captured = captured.clone();
            let reply = reply.clone();
            async move {
                let (parts, body) = req.into_parts();
                let body = hyper_pkg::body::to_bytes(body).await?;
                captured.lock().unwrap().push(Captured {
                    method: parts.method,
                    uri: parts.uri,
                    headers: parts.headers,
                    body: body.to_vec(),
                });
                Ok::<_, hyper_pkg::Error>(reply.to_response())
            }
            .boxed()
        })
    };

    (Client::with_service(service, token(), config), captured)
}

/// Creates a client whose service fails every request with `message`.
pub fn failing(
    message: &'static str,
) -> MockClient<
    impl FnMut(Request<Body>) -> BoxFuture<'static, Result<Response<Body>, BoxError>>
        + Clone
        + Send
        + Sync,
> {
    let service = tower::service_fn(move |_: Request<Body>| {
        async move { Err::<Response<Body>, BoxError>(message.into()) }.boxed()
    });
    Client::with_service(service, token(), Config::default())
}

/// Returns the only request sent so far.
pub fn single(captured: &Mutex<Vec<Captured>>) -> Captured {
    let mut captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1, "{:?}", captured);
    captured.pop().unwrap()
}

pub fn assert_signed(req: &Captured) {
    let authorization = req.header("authorization").unwrap();
    assert!(authorization.starts_with("OAuth "), "{}", authorization);
    assert!(authorization.contains(r#"oauth_consumer_key="consumer_key""#));
    assert!(authorization.contains(r#"oauth_token="access_key""#));
    assert!(authorization.contains(r#"oauth_signature_method="HMAC-SHA1""#));
    assert!(authorization.contains("oauth_signature="));
}
