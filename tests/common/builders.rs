use super::handlers::RecordingHandler;
use bunner_cors_negotiation::constants::{header, method};
use bunner_cors_negotiation::{
    CorsMiddleware, CorsOptions, DefaultResponseFactory, HeadersNegotiator, MethodNegotiator,
    OriginMatcher, OriginNegotiator, Request, Response,
};

pub type Cors = CorsMiddleware<DefaultResponseFactory>;

#[derive(Default)]
pub struct CorsBuilder {
    origins: Vec<OriginMatcher>,
    methods: Option<Vec<String>>,
    headers: Option<Vec<String>>,
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, matcher: impl Into<OriginMatcher>) -> Self {
        self.origins.push(matcher.into());
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.expose_headers(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options = self.options.allow_credentials(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options = self.options.max_age(seconds);
        self
    }

    pub fn build(self) -> Cors {
        let methods = self
            .methods
            .unwrap_or_else(|| vec![method::GET.into(), method::POST.into()]);
        let headers = self
            .headers
            .unwrap_or_else(|| vec!["Accept".into(), "Content-Type".into()]);

        CorsMiddleware::new(
            DefaultResponseFactory,
            OriginNegotiator::new(self.origins),
            MethodNegotiator::new(methods),
            HeadersNegotiator::new(headers),
            self.options,
        )
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
    response: Response,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
            response: Response::new(200),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn handler_response(mut self, response: Response) -> Self {
        self.response = response;
        self
    }

    pub fn build(&self) -> Request {
        let request = Request::new(self.method.as_str());
        match &self.origin {
            Some(origin) => request.header(header::ORIGIN, origin.as_str()),
            None => request,
        }
    }

    /// Runs the request through `cors` and returns the response together with
    /// the number of times the downstream handler ran.
    pub async fn check(self, cors: &Cors) -> (Response, usize) {
        super::init_tracing();
        let handler = RecordingHandler::new(self.response.clone());
        let response = cors
            .process(&self.build(), &handler)
            .await
            .expect("recording handler never fails");
        (response, handler.calls())
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    method: Option<String>,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Vec<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the `OPTIONS` token, e.g. to test case variants.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_header(mut self, name: impl Into<String>) -> Self {
        self.request_headers.push(name.into());
        self
    }

    pub fn build(&self) -> Request {
        let mut request = Request::new(self.method.as_deref().unwrap_or(method::OPTIONS));
        if let Some(origin) = &self.origin {
            request = request.header(header::ORIGIN, origin.as_str());
        }
        if let Some(requested) = &self.request_method {
            request = request.header(header::ACCESS_CONTROL_REQUEST_METHOD, requested.as_str());
        }
        for name in &self.request_headers {
            request = request.header(header::ACCESS_CONTROL_REQUEST_HEADERS, name.as_str());
        }
        request
    }

    pub async fn check(self, cors: &Cors) -> (Response, usize) {
        super::init_tracing();
        let handler = RecordingHandler::empty();
        let response = cors
            .process(&self.build(), &handler)
            .await
            .expect("recording handler never fails");
        (response, handler.calls())
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
