use std::fmt::{self, Formatter};
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Buf, Bytes};
use futures_core::Stream;
use http_body::Body;
use pin_project_lite::pin_project;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::types::DateTime;

/// Creates an enum with `AsRef<str>`, `Display` and a fallible string conversion.
macro_rules! str_enum {
    (
        $(#[$attr:meta])*
        pub enum $E:ident {
            $(
                $(#[$v_attr:meta])*
                $V:ident = $by:expr
            ),*$(,)?
        }
    ) => {
        $(#[$attr])*
        pub enum $E {
            $(
                $(#[$v_attr])*
                $V,
            )*
        }

        impl $E {
            /// Returns the variant represented by `s`, if any.
            pub fn from_str_opt(s: &str) -> Option<Self> {
                match s {
                    $($by => Some($E::$V),)*
                    _ => None,
                }
            }
        }

        impl std::convert::AsRef<str> for $E {
            fn as_ref(&self) -> &str {
                match *self {
                    $($E::$V => $by,)*
                }
            }
        }

        impl std::fmt::Display for $E {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(AsRef::<str>::as_ref(self))
            }
        }
    }
}

pin_project! {
    /// Wraps `http_body::Body` to make it a `Stream`.
    pub struct HttpBodyAsStream<B> {
        #[pin]
        pub inner: B,
    }
}

impl<B: Body> HttpBodyAsStream<B> {
    pub fn new(inner: B) -> Self {
        HttpBodyAsStream { inner }
    }
}

impl<B: Body> Stream for HttpBodyAsStream<B> {
    type Item = Result<Bytes, B::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().inner.poll_data(cx).map(|opt| {
            opt.map(|result| result.map(|mut buf| buf.copy_to_bytes(buf.remaining())))
        })
    }
}

/// Deserializes a nullable value, replacing `null` with `T::default()`.
///
/// Combine with `#[serde(default)]` to also cover absent fields.
pub fn deserialize_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::deserialize(d).map(Option::unwrap_or_default)
}

/// Parses the `created_at` format used throughout the REST API,
/// e.g. `Mon May 01 00:01:02 +0000 2017`.
pub fn parse_datetime(s: &str) -> chrono::ParseResult<DateTime> {
    chrono::DateTime::parse_from_str(s, "%a %b %d %H:%M:%S %z %Y")
        .map(|dt| dt.with_timezone(&chrono::Utc))
}

pub fn deserialize_datetime<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime, D::Error> {
    struct DTVisitor;

    impl<'de> Visitor<'de> for DTVisitor {
        type Value = DateTime;

        fn visit_str<E: de::Error>(self, s: &str) -> Result<DateTime, E> {
            parse_datetime(s).map_err(|e| E::custom(e.to_string()))
        }

        fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write!(f, "a formatted date and time string")
        }
    }

    d.deserialize_str(DTVisitor)
}

/// Same as `deserialize_datetime` but maps `null` to `None`.
///
/// Combine with `#[serde(default)]` to also cover absent fields.
pub fn deserialize_opt_datetime<'de, D>(d: D) -> Result<Option<DateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Dt(#[serde(deserialize_with = "deserialize_datetime")] DateTime);

    Option::<Dt>::deserialize(d).map(|o| o.map(|Dt(dt)| dt))
}

/// Deserializes an epoch-milliseconds timestamp that may be encoded as a string.
pub fn deserialize_timestamp_ms<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime, D::Error> {
    use chrono::TimeZone;

    let ms = deserialize_id(d)?;
    let ms = i64::try_from(ms).map_err(<D::Error as de::Error>::custom)?;
    chrono::Utc
        .timestamp_millis_opt(ms)
        .single()
        .ok_or_else(|| de::Error::custom(format_args!("timestamp out of range: {}", ms)))
}

/// Deserializes an ID that may be encoded either as a JSON number or as a decimal string,
/// as the Direct Message event endpoints do.
pub fn deserialize_id<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = u64;

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<u64, E> {
            s.parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(s), &self))
        }

        fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write!(f, "an unsigned integer or a string containing one")
        }
    }

    d.deserialize_any(IdVisitor)
}

pub fn deserialize_opt_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
    #[derive(Deserialize)]
    struct Id(#[serde(deserialize_with = "deserialize_id")] u64);

    Option::<Id>::deserialize(d).map(|o| o.map(|Id(id)| id))
}

/// Serializes an ID as a decimal string.
pub fn serialize_id<S: serde::Serializer>(id: &u64, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(id)
}
