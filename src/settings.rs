use crate::constants::DEFAULT_MAX_AGE;
use crate::headers_negotiator::HeadersNegotiator;
use crate::method_negotiator::MethodNegotiator;
use crate::options::CorsOptions;
use crate::origin::{OriginMatcher, PatternError};
use crate::origin_negotiator::OriginNegotiator;
use crate::util::is_http_token;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("allow_origins[{index}] is not a valid pattern")]
    InvalidOriginPattern {
        index: usize,
        #[source]
        source: PatternError,
    },
    #[error("allow_methods entry `{0}` is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("allow_methods entry `{0}` must be upper-case to match request methods")]
    MethodNotUppercase(String),
    #[error("{field} entry `{name}` is not a valid header name")]
    InvalidHeaderName { field: &'static str, name: String },
}

/// One entry of the origin allow-list, as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginSetting {
    Exact(String),
    Pattern(String),
}

impl OriginSetting {
    fn compile(&self) -> Result<OriginMatcher, PatternError> {
        match self {
            OriginSetting::Exact(value) => Ok(OriginMatcher::exact(value.as_str())),
            OriginSetting::Pattern(pattern) => OriginMatcher::pattern_str(pattern),
        }
    }
}

/// Deserializable CORS configuration.
///
/// ```json
/// {
///   "allow_origins": [{ "exact": "https://mydomain.tld" }, { "pattern": "^https://.*\\.mydomain\\.tld$" }],
///   "allow_methods": ["GET", "POST"],
///   "allow_headers": ["Accept", "Content-Type"],
///   "expose_headers": ["X-Unknown"],
///   "allow_credentials": true,
///   "max_age": 7200
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsSettings {
    pub allow_origins: Vec<OriginSetting>,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age: u64,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allow_origins: Vec::new(),
            allow_methods: Vec::new(),
            allow_headers: Vec::new(),
            expose_headers: Vec::new(),
            allow_credentials: false,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

/// Negotiators and options compiled from [`CorsSettings`].
#[derive(Debug, Clone)]
pub struct CompiledSettings {
    pub origin_negotiator: OriginNegotiator,
    pub method_negotiator: MethodNegotiator,
    pub headers_negotiator: HeadersNegotiator,
    pub options: CorsOptions,
}

impl CorsSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.compile_origins().map(|_| ())?;
        self.validate_tokens()
    }

    pub fn compile(self) -> Result<CompiledSettings, ValidationError> {
        let matchers = self.compile_origins()?;
        self.validate_tokens()?;

        let CorsSettings {
            allow_methods,
            allow_headers,
            expose_headers,
            allow_credentials,
            max_age,
            ..
        } = self;

        Ok(CompiledSettings {
            origin_negotiator: OriginNegotiator::new(matchers),
            method_negotiator: MethodNegotiator::new(allow_methods),
            headers_negotiator: HeadersNegotiator::new(allow_headers),
            options: CorsOptions {
                expose_headers,
                allow_credentials,
                max_age,
            },
        })
    }

    fn compile_origins(&self) -> Result<Vec<OriginMatcher>, ValidationError> {
        self.allow_origins
            .iter()
            .enumerate()
            .map(|(index, setting)| {
                setting
                    .compile()
                    .map_err(|source| ValidationError::InvalidOriginPattern { index, source })
            })
            .collect()
    }

    fn validate_tokens(&self) -> Result<(), ValidationError> {
        if let Some(method) = self
            .allow_methods
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidMethod(method.clone()));
        }

        // Request methods are upper-cased before comparison.
        if let Some(method) = self
            .allow_methods
            .iter()
            .find(|method| method.bytes().any(|byte| byte.is_ascii_lowercase()))
        {
            return Err(ValidationError::MethodNotUppercase(method.clone()));
        }

        for (field, names) in [
            ("allow_headers", &self.allow_headers),
            ("expose_headers", &self.expose_headers),
        ] {
            if let Some(name) = names.iter().find(|name| !is_http_token(name)) {
                return Err(ValidationError::InvalidHeaderName {
                    field,
                    name: name.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;
