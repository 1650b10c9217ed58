use crate::constants::header;
use crate::message::Response;
use crate::options::CorsOptions;

/// Response decoration steps. Each one consumes the response built so far and
/// returns the next one with at most a single header added or overwritten.
pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn add_allow_origin(&self, response: Response, origin: &str) -> Response {
        response.with_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, [origin])
    }

    pub(crate) fn add_allow_methods(&self, response: Response, methods: &[String]) -> Response {
        response.with_header(header::ACCESS_CONTROL_ALLOW_METHODS, methods.iter().cloned())
    }

    pub(crate) fn add_allow_headers(&self, response: Response, headers: &[String]) -> Response {
        response.with_header(header::ACCESS_CONTROL_ALLOW_HEADERS, headers.iter().cloned())
    }

    pub(crate) fn add_allow_credentials(&self, response: Response) -> Response {
        let value = if self.options.allow_credentials {
            "true"
        } else {
            "false"
        };
        response.with_header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, [value])
    }

    pub(crate) fn add_expose_headers(&self, response: Response) -> Response {
        if self.options.expose_headers.is_empty() {
            return response;
        }
        response.with_header(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            self.options.expose_headers.iter().cloned(),
        )
    }

    pub(crate) fn add_max_age(&self, response: Response) -> Response {
        response.with_header(
            header::ACCESS_CONTROL_MAX_AGE,
            [self.options.max_age.to_string()],
        )
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
