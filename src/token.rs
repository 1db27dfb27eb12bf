use oauth_credentials::Credentials;
use serde::de::Deserializer;
use serde::Deserialize;

/// An OAuth token used to sign requests to the API.
///
/// The owned `Token` can be deserialized from an object with `consumer_key`,
/// `consumer_secret`, `access_key` and `access_secret` fields:
///
/// ```rust
/// use twitter_rest::Token;
///
/// let token: Token = serde_json::from_str(r#"{
///     "consumer_key": "ck", "consumer_secret": "cs",
///     "access_key": "ak", "access_secret": "as"
/// }"#).unwrap();
/// assert_eq!(token.client.identifier(), "ck");
/// assert_eq!(token.token.secret(), "as");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Token<C = String, T = String> {
    /// The consumer (client) credentials of the application.
    pub client: Credentials<C>,
    /// The access token credentials of the user.
    pub token: Credentials<T>,
}

impl<C: AsRef<str>, T: AsRef<str>> Token<C, T> {
    pub fn new(consumer_key: C, consumer_secret: C, access_key: T, access_secret: T) -> Self {
        Token {
            client: Credentials::new(consumer_key, consumer_secret),
            token: Credentials::new(access_key, access_secret),
        }
    }

    pub fn from_credentials(client: Credentials<C>, token: Credentials<T>) -> Self {
        Token { client, token }
    }

    /// Borrows the token strings of `self`.
    pub fn as_ref(&self) -> Token<&str, &str> {
        Token::from_credentials(self.client.as_ref(), self.token.as_ref())
    }

    /// Copies the token strings into an owned `Token`, as taken by `Client`.
    pub fn to_owned(&self) -> Token {
        Token::new(
            self.client.identifier().to_owned(),
            self.client.secret().to_owned(),
            self.token.identifier().to_owned(),
            self.token.secret().to_owned(),
        )
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Keys {
            consumer_key: String,
            consumer_secret: String,
            access_key: String,
            access_secret: String,
        }

        let k = Keys::deserialize(d)?;
        Ok(Token::new(
            k.consumer_key,
            k.consumer_secret,
            k.access_key,
            k.access_secret,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_to_owned() {
        let token = Token::new("ck", "cs", "ak", "as").to_owned();
        assert_eq!(token.client.identifier(), "ck");
        assert_eq!(token.client.secret(), "cs");
        assert_eq!(token.as_ref().token.identifier(), "ak");
        assert_eq!(token.as_ref().token.secret(), "as");
    }

    #[test]
    fn deserialize() {
        let json = r#"{
            "consumer_key": "ck",
            "consumer_secret": "cs",
            "access_key": "ak",
            "access_secret": "as"
        }"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.client.identifier(), "ck");
        assert_eq!(token.client.secret(), "cs");
        assert_eq!(token.token.identifier(), "ak");
        assert_eq!(token.token.secret(), "as");
    }

    #[test]
    fn missing_key() {
        let json = r#"{"consumer_key":"ck","consumer_secret":"cs","access_key":"ak"}"#;
        assert!(serde_json::from_str::<Token>(json).is_err());
    }
}
