#![doc(html_root_url = "https://docs.rs/twitter-rest/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
# Twitter REST

A library for the Direct Message resources of the Twitter REST API.

## Usage

Add `twitter-rest` to your dependencies in your project's `Cargo.toml`:

```toml
[dependencies]
tokio = { version = "1", features = ["macros", "rt-multi-thread"] }
twitter-rest = "0.1"
```

## Overview

Here is a basic example that prints the direct messages sent to the authenticating user:

```rust,no_run
use twitter_rest::{DirectMessagesResources, Paging, Token};

# #[tokio::main]
# async fn main() {
let token = Token::new("consumer_key", "consumer_secret", "access_key", "access_secret");
let client = twitter_rest::hyper::Client::new(token.to_owned());

let messages = client.get_direct_messages(&Paging::new().count(50)).await.unwrap();
for dm in messages.iter() {
    println!("@{}: {}", dm.sender_screen_name(), dm.text());
}
if let Some(status) = messages.rate_limit_status {
    println!("{} requests left", status.remaining);
}
# }
```

Any HTTP client implementing `tower_service::Service<http::Request<B>>` can be used in place
of the default `hyper` client through [`Client::from_service`].
*/

#[cfg(feature = "hyper")]
extern crate hyper_pkg;

#[macro_use]
mod util;

pub mod entities;
pub mod error;
pub mod event;
#[cfg(feature = "hyper")]
#[cfg_attr(docsrs, doc(cfg(feature = "hyper")))]
pub mod hyper;
pub mod json_store;
pub mod response;
pub mod types;
pub mod user;

mod client;
mod config;
mod direct_message;
mod gzip;
mod html;
mod paging;
mod resources;
mod token;

pub use oauth_credentials::Credentials;

pub use crate::client::Client;
pub use crate::config::Config;
pub use crate::direct_message::DirectMessage;
pub use crate::error::Error;
pub use crate::event::{DirectMessageEvent, DirectMessageEventList, MessageData, QuickReplyOption};
pub use crate::paging::Paging;
pub use crate::resources::{DirectMessagesResources, Recipient};
pub use crate::response::Response;
pub use crate::token::Token;
