use serde::Deserialize;

/// Settings of a `Client`.
///
/// `Config` can be deserialized from a configuration file. Absent fields take their default
/// values.
///
/// ## Example
///
/// ```rust
/// use twitter_rest::Config;
///
/// let config: Config = serde_json::from_str(r#"{"json_store_enabled":true}"#).unwrap();
/// assert_eq!(config, Config::default().json_store_enabled(true));
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST API, ending with a slash.
    pub rest_base_url: String,
    /// Whether to register the raw JSON of parsed objects to the `json_store`.
    pub json_store_enabled: bool,
    /// Whether to ask the server for gzip-encoded responses.
    pub gzip: bool,
}

impl Config {
    pub const DEFAULT_REST_BASE_URL: &'static str = "https://api.twitter.com/1.1/";

    pub fn new() -> Self {
        Config::default()
    }

    pub fn rest_base_url(mut self, rest_base_url: impl Into<String>) -> Self {
        self.rest_base_url = rest_base_url.into();
        if !self.rest_base_url.ends_with('/') {
            self.rest_base_url.push('/');
        }
        self
    }

    pub fn json_store_enabled(mut self, enabled: bool) -> Self {
        self.json_store_enabled = enabled;
        self
    }

    pub fn gzip(mut self, gzip: bool) -> Self {
        self.gzip = gzip;
        self
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        let mut url = String::with_capacity(self.rest_base_url.len() + path.len() + 1);
        url.push_str(&self.rest_base_url);
        if !url.ends_with('/') {
            url.push('/');
        }
        url.push_str(path);
        url
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rest_base_url: Config::DEFAULT_REST_BASE_URL.to_owned(),
            json_store_enabled: false,
            gzip: true,
        }
    }
}
