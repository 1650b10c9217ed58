use crate::constants::DEFAULT_MAX_AGE;

/// Response-side settings shared by both middleware branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsOptions {
    pub expose_headers: Vec<String>,
    pub allow_credentials: bool,
    /// Seconds a preflight result may be cached.
    pub max_age: u64,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            expose_headers: Vec::new(),
            allow_credentials: false,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = enabled;
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = seconds;
        self
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
