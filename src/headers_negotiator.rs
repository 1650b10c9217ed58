use crate::constants::header;
use crate::message::Request;
use crate::util::equals_ignore_case;
use tracing::trace;

/// Decides whether a preflight's `Access-Control-Request-Headers` are allowed.
pub trait NegotiateHeaders: Send + Sync {
    fn negotiate(&self, request: &Request) -> bool;

    /// The allowed headers, echoed verbatim in `Access-Control-Allow-Headers`.
    fn allow_headers(&self) -> &[String];
}

/// Allow-list of request header names, matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadersNegotiator {
    allow_headers: Vec<String>,
}

impl HeadersNegotiator {
    pub fn new<I, S>(allow_headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allow_headers: allow_headers.into_iter().map(Into::into).collect(),
        }
    }

    /// True when every requested name appears in the allow-list. An empty
    /// request list is trivially covered.
    pub fn allows_headers<S: AsRef<str>>(&self, requested: &[S]) -> bool {
        requested.iter().all(|name| {
            self.allow_headers
                .iter()
                .any(|allowed| equals_ignore_case(allowed, name.as_ref()))
        })
    }
}

impl NegotiateHeaders for HeadersNegotiator {
    fn negotiate(&self, request: &Request) -> bool {
        let Some(requested) = request
            .headers()
            .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
        else {
            return false;
        };

        let allowed = self.allows_headers(requested);
        trace!(requested = ?requested, allowed, "headers negotiated");
        allowed
    }

    fn allow_headers(&self) -> &[String] {
        &self.allow_headers
    }
}

#[cfg(test)]
#[path = "headers_negotiator_test.rs"]
mod headers_negotiator_test;
