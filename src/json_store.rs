//! A per-thread store of the raw JSON behind parsed objects.
//!
//! The store is only populated when `Config::json_store_enabled` is set. Each call to a resource
//! method clears the calling thread's store before registering the objects of its response,
//! so the JSON is available until the next call made on the same thread.
//!
//! Note that the objects are registered on the thread which polls the response future to
//! completion.
//!
//! ## Example
//!
//! ```rust,no_run
//! use twitter_rest::{json_store, Config, DirectMessagesResources, Token};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let token = Token::new("consumer_key", "consumer_secret", "access_key", "access_secret");
//! let config = Config::default().json_store_enabled(true);
//! let client = twitter_rest::hyper::Client::with_config(token.to_owned(), config);
//!
//! let dm = client.show_direct_message(240136858829479936).await.unwrap();
//! println!("{}", json_store::get_raw_json(&*dm).unwrap());
//! # }
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::types::{DirectMessageId, EventId};

/// Identifies an object in the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKey {
    DirectMessage(DirectMessageId),
    DirectMessageEvent(EventId),
}

/// An object whose raw JSON can be registered to the store.
pub trait StoredJson {
    fn json_key(&self) -> ObjectKey;
}

thread_local! {
    static STORE: RefCell<HashMap<ObjectKey, String>> = RefCell::new(HashMap::new());
}

/// Returns the raw JSON that `obj` was parsed from, if it has been registered on this thread.
pub fn get_raw_json<T: StoredJson + ?Sized>(obj: &T) -> Option<String> {
    let key = obj.json_key();
    STORE.with(|store| store.borrow().get(&key).cloned())
}

pub(crate) fn clear() {
    STORE.with(|store| store.borrow_mut().clear());
}

pub(crate) fn register<T: StoredJson + ?Sized>(obj: &T, json: String) {
    let key = obj.json_key();
    log::trace!("registering raw JSON of {:?}", key);
    STORE.with(|store| {
        store.borrow_mut().insert(key, json);
    });
}
