//! Type aliases for use with `hyper` crate's HTTP client.

use crate::config::Config;
use crate::token::Token;

/// The HTTPS client used by `Client::new`.
pub type HttpsClient =
    hyper_pkg::Client<hyper_tls::HttpsConnector<hyper_pkg::client::HttpConnector>>;
pub type Client = crate::Client<HttpsClient, hyper_pkg::Body>;
pub type Error = crate::Error<hyper_pkg::Error>;

impl crate::Client<HttpsClient, hyper_pkg::Body> {
    /// Creates a client with a default `hyper` HTTPS client.
    ///
    /// # Panics
    ///
    /// This will panic if the underlying HTTPS connector failed to initialize.
    pub fn new(token: Token) -> Self {
        Self::with_config(token, Config::default())
    }

    /// Same as `new` but with a custom `Config`.
    ///
    /// # Panics
    ///
    /// This will panic if the underlying HTTPS connector failed to initialize.
    pub fn with_config(token: Token, config: Config) -> Self {
        let conn = hyper_tls::HttpsConnector::new();
        let http = hyper_pkg::Client::builder().build::<_, hyper_pkg::Body>(conn);
        Self::with_service(http, token, config)
    }
}
