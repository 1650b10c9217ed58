use crate::constants::header;
use crate::message::Request;
use crate::origin::OriginMatcher;
use tracing::trace;

/// Resolves the origin a response may be shared with.
pub trait NegotiateOrigin: Send + Sync {
    /// Returns the request's `Origin` when it is allowed, `None` otherwise.
    fn negotiate(&self, request: &Request) -> Option<String>;
}

/// Ordered list of [`OriginMatcher`]s; the first acceptance wins.
#[derive(Debug, Clone, Default)]
pub struct OriginNegotiator {
    matchers: Vec<OriginMatcher>,
}

impl OriginNegotiator {
    pub fn new<I, T>(matchers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self {
            matchers: matchers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matchers(&self) -> &[OriginMatcher] {
        &self.matchers
    }
}

impl NegotiateOrigin for OriginNegotiator {
    fn negotiate(&self, request: &Request) -> Option<String> {
        let origin = request
            .headers()
            .first(header::ORIGIN)
            .filter(|origin| !origin.is_empty())?;

        if self.matchers.iter().any(|matcher| matcher.matches(origin)) {
            trace!(origin, "origin accepted");
            Some(origin.to_owned())
        } else {
            trace!(origin, "origin not in allow-list");
            None
        }
    }
}

#[cfg(test)]
#[path = "origin_negotiator_test.rs"]
mod origin_negotiator_test;
