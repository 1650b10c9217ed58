use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

pub type OriginPredicateFn = dyn Fn(&str) -> bool + Send + Sync;

const MAX_PATTERN_LENGTH: usize = 50_000;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// A single rule deciding whether an `Origin` value is acceptable.
#[derive(Clone)]
pub enum OriginMatcher {
    /// Byte-for-byte comparison. No case folding, no scheme or port
    /// normalization.
    Exact(String),
    /// Regular expression search. The pattern is used as given, so it only
    /// matches the whole origin when the caller anchors it.
    Pattern(Regex),
    /// Caller-supplied predicate. Must be free of side effects.
    Predicate(Arc<OriginPredicateFn>),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|err| PatternError::Build(Box::new(err)))
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    pub fn matches(&self, origin: &str) -> bool {
        match self {
            OriginMatcher::Exact(value) => value == origin,
            OriginMatcher::Pattern(regex) => regex.is_match(origin),
            OriginMatcher::Predicate(predicate) => predicate(origin),
        }
    }
}

impl fmt::Debug for OriginMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginMatcher::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            OriginMatcher::Pattern(regex) => f.debug_tuple("Pattern").field(regex).finish(),
            OriginMatcher::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::Exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::Exact(value.to_owned())
    }
}

impl From<Regex> for OriginMatcher {
    fn from(value: Regex) -> Self {
        OriginMatcher::Pattern(value)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
