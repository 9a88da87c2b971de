//! Network access for URL resources.
//!
//! [`UrlReader`] is the single seam between resolution and the network:
//! it turns a URL into the complete response body. [`HttpReader`] is the
//! production implementation on top of `reqwest`'s blocking client.

use std::io;
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;

use crate::error::{Error, Result};
use crate::resource::copy::copy_resource;

/// Fetches the full content behind a URL.
///
/// Implementations must be usable from several threads at once.
pub trait UrlReader: Send + Sync {
    /// Read the complete body of `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, cannot be served, or the
    /// transfer fails or times out.
    fn read(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP(S) reader.
///
/// Clients are built lazily on first use. When `trust_self_signed` is set,
/// `https` URLs go through a second client that accepts any certificate
/// chain and host name; it is built at most once per reader.
///
/// # Examples
///
/// ```
/// use respath::HttpReader;
/// use std::time::Duration;
///
/// let reader = HttpReader::new(Duration::from_secs(10), false);
/// assert!(!reader.trusts_any_certificate());
/// ```
#[derive(Debug)]
pub struct HttpReader {
    read_timeout: Duration,
    trust_self_signed: bool,
    plain: OnceLock<Client>,
    trusting: OnceLock<Client>,
    build_lock: Mutex<()>,
}

impl HttpReader {
    /// Create a reader whose requests time out after `read_timeout`.
    #[must_use]
    pub fn new(read_timeout: Duration, trust_self_signed: bool) -> Self {
        Self {
            read_timeout,
            trust_self_signed,
            plain: OnceLock::new(),
            trusting: OnceLock::new(),
            build_lock: Mutex::new(()),
        }
    }

    /// The timeout applied to each request.
    #[must_use]
    pub const fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Whether `https` certificates are accepted without verification.
    #[must_use]
    pub const fn trusts_any_certificate(&self) -> bool {
        self.trust_self_signed
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.read_timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Return the client for a request, building it on first use.
    fn client(&self, url: &str, https: bool) -> Result<&Client> {
        let trusting = https && self.trust_self_signed;
        let cell = if trusting { &self.trusting } else { &self.plain };

        if let Some(client) = cell.get() {
            return Ok(client);
        }

        let _guard = self
            .build_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = cell.get() {
            return Ok(client);
        }

        let mut builder = Client::builder().timeout(self.read_timeout);
        if trusting {
            log::warn!("Accepting any certificate and host name for https resources");
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder.build().map_err(|e| Error::Fetch {
            url: url.to_string(),
            source: Box::new(e),
        })?;

        Ok(cell.get_or_init(|| client))
    }

    fn map_request_error(&self, url: &str, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                url: url.to_string(),
                timeout_ms: self.timeout_ms(),
            }
        } else if let Some(status) = e.status() {
            Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }
        } else {
            Error::Fetch {
                url: url.to_string(),
                source: Box::new(e),
            }
        }
    }

    fn map_body_error(&self, url: &str, e: io::Error) -> Error {
        // The blocking response wraps its own timeout in an `Other` error
        let wrapped_timeout = e
            .get_ref()
            .and_then(|inner| inner.downcast_ref::<reqwest::Error>())
            .is_some_and(reqwest::Error::is_timeout);
        if wrapped_timeout || e.kind() == io::ErrorKind::TimedOut {
            Error::Timeout {
                url: url.to_string(),
                timeout_ms: self.timeout_ms(),
            }
        } else {
            Error::Fetch {
                url: url.to_string(),
                source: Box::new(e),
            }
        }
    }
}

impl UrlReader for HttpReader {
    fn read(&self, url: &str) -> Result<Vec<u8>> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let https = match parsed.scheme() {
            "http" => false,
            "https" => true,
            other => {
                return Err(Error::UnsupportedScheme {
                    url: url.to_string(),
                    scheme: other.to_string(),
                })
            }
        };

        log::debug!("GET {url}");
        let response = self
            .client(url, https)?
            .get(parsed)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| self.map_request_error(url, e))?;

        let mut body = Vec::new();
        copy_resource(response, &mut body).map_err(|e| self.map_body_error(url, e))?;
        log::debug!("Read {} bytes from {url}", body.len());
        Ok(body)
    }
}
