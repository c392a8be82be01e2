//! Blocking HTTP GET with an explicit timeout.

use reqwest::blocking::Client;
use reqwest::Url;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub enum NetError {
    InvalidUrl(String),
    Request(reqwest::Error),
}

impl From<reqwest::Error> for NetError {
    fn from(err: reqwest::Error) -> Self {
        NetError::Request(err)
    }
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetError::InvalidUrl(url) => write!(f, "invalid URL: {}", url),
            NetError::Request(err) if err.is_timeout() => write!(f, "request timed out: {}", err),
            NetError::Request(err) => write!(f, "request failed: {}", err),
        }
    }
}

impl std::error::Error for NetError {}

/// Issues one GET per call; nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct HttpClient {
    timeout: Duration,
    use_proxy: bool,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            use_proxy: true,
        }
    }

    /// Ignores `HTTP_PROXY` and friends.
    pub fn without_proxy(mut self) -> Self {
        self.use_proxy = false;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches `url` and returns the body as text, whatever the status code.
    pub fn get_text(&self, url: &str) -> Result<String, NetError> {
        let url = Url::parse(url).map_err(|_| NetError::InvalidUrl(url.to_string()))?;

        let mut builder = Client::builder()
            .user_agent(concat!("sprig/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout);
        if !self.use_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        log::debug!("GET {}", url);
        let response = client.get(url).send()?;
        log::debug!("GET returned {}", response.status());
        Ok(response.text()?)
    }
}
