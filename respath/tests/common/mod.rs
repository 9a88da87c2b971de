//! Common test utilities for integration tests.
//!
//! This module wraps a `wiremock` server so the real blocking network client
//! can be exercised without any external service, and provides a few helpers
//! for building resolvers and file fixtures.

use std::path::Path;
use std::time::Duration;

use respath::{ResolverSettings, ResourceResolver};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A canned answer for one request path.
#[derive(Debug, Clone)]
pub struct Route {
    status: u16,
    body: Vec<u8>,
    delay: Duration,
}

impl Route {
    /// A `200 OK` answer with `body`.
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.as_bytes().to_vec(),
            delay: Duration::ZERO,
        }
    }

    /// An answer with the given status and an empty body.
    #[allow(dead_code)]
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
            delay: Duration::ZERO,
        }
    }

    /// Wait `delay` before answering.
    #[allow(dead_code)]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn template(&self) -> ResponseTemplate {
        ResponseTemplate::new(self.status)
            .set_body_bytes(self.body.clone())
            .set_delay(self.delay)
    }
}

/// Mock HTTP server serving fixed routes on a local port.
///
/// Unknown paths answer `404`. Every request is recorded so hits can be
/// counted per path. The resolver under test stays fully synchronous; the
/// runtime is only entered to set up mocks and to read the request log.
pub struct TestServer {
    server: MockServer,
    runtime: Runtime,
}

impl TestServer {
    /// Start serving `routes`, keyed by request path such as `/d/main.bob`.
    pub fn start(routes: &[(&str, Route)]) -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            for (route_path, route) in routes {
                Mock::given(method("GET"))
                    .and(path(*route_path))
                    .respond_with(route.template())
                    .mount(&server)
                    .await;
            }
            server
        });

        Self { server, runtime }
    }

    /// Full URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.server.uri())
    }

    /// Number of requests received for `path`.
    pub fn hits(&self, path: &str) -> usize {
        let requests = self
            .runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default();
        requests
            .iter()
            .filter(|request| request.url.path() == path)
            .count()
    }
}

/// Settings with a short read timeout and the given cache lifetime.
#[allow(dead_code)]
pub fn settings(cache_ttl: Duration) -> ResolverSettings {
    ResolverSettings {
        cache_ttl,
        read_timeout: Duration::from_secs(2),
        ..ResolverSettings::default()
    }
}

/// A resolver using the real HTTP client.
#[allow(dead_code)]
pub fn resolver(cache_ttl: Duration) -> ResourceResolver {
    ResourceResolver::new(settings(cache_ttl))
}

/// Path as a display reference string.
#[allow(dead_code)]
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
