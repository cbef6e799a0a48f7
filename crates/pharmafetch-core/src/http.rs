//! Blocking HTTP requests over a shared async client.
//!
//! Uses async reqwest on a shared tokio runtime, but presents a sync
//! interface: the calling thread blocks until the response body is in hand.

use std::sync::{LazyLock, OnceLock};
use std::time::Duration;

/// Transport settings, installed once at startup via [`set_http_config`].
///
/// `None` leaves the corresponding limit to reqwest's defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpConfig {
    pub connect_timeout: Option<Duration>,
    /// Whole-request deadline
    pub request_timeout: Option<Duration>,
}

static HTTP_CONFIG: OnceLock<HttpConfig> = OnceLock::new();

/// Install transport settings. Must run before the first request.
pub fn set_http_config(config: HttpConfig) {
    if HTTP_CONFIG.set(config).is_err() {
        log::debug!("HTTP config already installed, keeping the first one");
    }
}

/// Active transport settings (defaults if none were installed).
pub fn http_config() -> HttpConfig {
    HTTP_CONFIG.get().copied().unwrap_or_default()
}

/// Error from a single HTTP exchange
#[derive(Debug)]
pub enum HttpError {
    /// Non-success status, or a transport failure without a status
    Http {
        status: Option<u16>,
        message: String,
    },
    /// Response body could not be read
    Body(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http {
                status: Some(s),
                message,
            } => write!(f, "HTTP {s}: {message}"),
            Self::Http {
                status: None,
                message,
            } => write!(f, "HTTP error: {message}"),
            Self::Body(message) => write!(f, "failed to read response body: {message}"),
        }
    }
}

impl std::error::Error for HttpError {}

impl HttpError {
    /// Create HTTP error from reqwest error.
    ///
    /// The URL is stripped: query strings may carry an API key.
    pub fn from_reqwest(e: reqwest::Error) -> Self {
        Self::Http {
            status: e.status().map(|s| s.as_u16()),
            message: e.without_url().to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => *status,
            Self::Body(_) => None,
        }
    }

    /// HTTP 429: the remote service is throttling this client
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

/// Shared async HTTP client.
static SHARED_CLIENT: LazyLock<reqwest::Client> =
    LazyLock::new(|| build_client(&http_config()).expect("failed to build HTTP client"));

fn build_client(config: &HttpConfig) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .user_agent(concat!("pharmafetch/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = config.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    builder.build()
}

/// Get shared HTTP client.
pub fn http_client() -> &'static reqwest::Client {
    &SHARED_CLIENT
}

/// Shared tokio runtime for HTTP operations.
///
/// One worker drives the connection; callers wait in `block_on`.
pub static SHARED_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
});

/// HTTP GET with query parameters → response body as text.
///
/// Must not be called from inside an async context.
pub fn get_text(url: &str, query: &[(&str, &str)]) -> Result<String, HttpError> {
    execute(|client| client.get(url).query(query))
}

/// HTTP POST with a url-encoded form body → response body as text.
///
/// Must not be called from inside an async context.
pub fn post_form_text(url: &str, form: &[(&str, &str)]) -> Result<String, HttpError> {
    execute(|client| client.post(url).form(form))
}

fn execute(
    build: impl FnOnce(&reqwest::Client) -> reqwest::RequestBuilder,
) -> Result<String, HttpError> {
    SHARED_RUNTIME.handle().block_on(async {
        let mut request = build(http_client());
        if let Some(timeout) = http_config().request_timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(HttpError::from_reqwest)?;

        response
            .text()
            .await
            .map_err(|e| HttpError::Body(e.without_url().to_string()))
    })
}
