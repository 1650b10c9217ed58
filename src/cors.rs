use crate::constants::status;
use crate::header_builder::HeaderBuilder;
use crate::headers_negotiator::{HeadersNegotiator, NegotiateHeaders};
use crate::message::{Handler, Request, Response, ResponseFactory};
use crate::method_negotiator::{MethodNegotiator, NegotiateMethod};
use crate::options::CorsOptions;
use crate::origin_negotiator::{NegotiateOrigin, OriginNegotiator};
use crate::settings::{CorsSettings, ValidationError};
use tracing::debug;

/// CORS middleware: answers preflights itself and decorates every other
/// response produced by the downstream [`Handler`].
///
/// Negotiation failures never turn into errors; they only leave headers out.
/// The middleware holds no mutable state and can be shared across tasks.
pub struct CorsMiddleware<
    F,
    O = OriginNegotiator,
    M = MethodNegotiator,
    H = HeadersNegotiator,
> {
    response_factory: F,
    origin_negotiator: O,
    method_negotiator: M,
    headers_negotiator: H,
    options: CorsOptions,
}

impl<F> CorsMiddleware<F>
where
    F: ResponseFactory,
{
    /// Builds the middleware from a deserialized configuration document.
    pub fn from_settings(
        settings: CorsSettings,
        response_factory: F,
    ) -> Result<Self, ValidationError> {
        let compiled = settings.compile()?;
        Ok(Self::new(
            response_factory,
            compiled.origin_negotiator,
            compiled.method_negotiator,
            compiled.headers_negotiator,
            compiled.options,
        ))
    }
}

impl<F, O, M, H> CorsMiddleware<F, O, M, H>
where
    F: ResponseFactory,
    O: NegotiateOrigin,
    M: NegotiateMethod,
    H: NegotiateHeaders,
{
    pub fn new(
        response_factory: F,
        origin_negotiator: O,
        method_negotiator: M,
        headers_negotiator: H,
        options: CorsOptions,
    ) -> Self {
        Self {
            response_factory,
            origin_negotiator,
            method_negotiator,
            headers_negotiator,
            options,
        }
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Runs the middleware for one request. Errors come only from `handler`
    /// and are returned unchanged.
    pub async fn process<D>(&self, request: &Request, handler: &D) -> Result<Response, D::Error>
    where
        D: Handler,
    {
        if request.is_preflight() {
            return Ok(self.process_preflight(request));
        }

        self.process_actual(request, handler).await
    }

    fn process_preflight(&self, request: &Request) -> Response {
        let response = self.response_factory.create(status::NO_CONTENT);

        let Some(origin) = self.origin_negotiator.negotiate(request) else {
            debug!("preflight without an allowed origin, returning bare response");
            return response;
        };

        let builder = HeaderBuilder::new(&self.options);
        let mut response = builder.add_allow_origin(response, &origin);

        if self.method_negotiator.negotiate(request) {
            response = builder.add_allow_methods(response, self.method_negotiator.allow_methods());
        } else {
            debug!(%origin, "preflight method not allowed, omitting allow-methods");
        }

        if self.headers_negotiator.negotiate(request) {
            response = builder.add_allow_headers(response, self.headers_negotiator.allow_headers());
        } else {
            debug!(%origin, "preflight headers not allowed, omitting allow-headers");
        }

        let response = builder.add_allow_credentials(response);
        let response = builder.add_expose_headers(response);
        let response = builder.add_max_age(response);

        debug!(%origin, "preflight answered");
        response
    }

    async fn process_actual<D>(&self, request: &Request, handler: &D) -> Result<Response, D::Error>
    where
        D: Handler,
    {
        let response = handler.handle(request).await?;

        let Some(origin) = self.origin_negotiator.negotiate(request) else {
            debug!(method = request.method(), "no allowed origin, response left undecorated");
            return Ok(response);
        };

        let builder = HeaderBuilder::new(&self.options);
        let response = builder.add_allow_origin(response, &origin);
        let response = builder.add_allow_credentials(response);
        let response = builder.add_expose_headers(response);

        debug!(%origin, method = request.method(), "response decorated");
        Ok(response)
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
