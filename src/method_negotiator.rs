use crate::constants::header;
use crate::message::Request;
use crate::util::normalize_upper;
use tracing::trace;

/// Decides whether a preflight's `Access-Control-Request-Method` is allowed.
pub trait NegotiateMethod: Send + Sync {
    fn negotiate(&self, request: &Request) -> bool;

    /// The allowed methods, echoed verbatim in `Access-Control-Allow-Methods`.
    fn allow_methods(&self) -> &[String];
}

/// Allow-list of method tokens.
///
/// The list is kept exactly as configured; entries are compared against the
/// upper-cased request method without being normalized themselves, so they
/// should be canonical upper-case tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodNegotiator {
    allow_methods: Vec<String>,
}

impl MethodNegotiator {
    pub fn new<I, S>(allow_methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allow_methods: allow_methods.into_iter().map(Into::into).collect(),
        }
    }
}

impl NegotiateMethod for MethodNegotiator {
    fn negotiate(&self, request: &Request) -> bool {
        let Some(requested) = request
            .headers()
            .first(header::ACCESS_CONTROL_REQUEST_METHOD)
            .filter(|value| !value.is_empty())
        else {
            return false;
        };

        let requested = normalize_upper(requested);
        let allowed = self
            .allow_methods
            .iter()
            .any(|method| method.as_str() == requested.as_ref());

        trace!(method = %requested, allowed, "method negotiated");
        allowed
    }

    fn allow_methods(&self) -> &[String] {
        &self.allow_methods
    }
}

#[cfg(test)]
#[path = "method_negotiator_test.rs"]
mod method_negotiator_test;
