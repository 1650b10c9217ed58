use crate::constants::method;
use crate::headers::HeaderMap;
use std::future::Future;

/// Inbound request as seen by the negotiators. Never mutated by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: String,
    headers: HeaderMap,
}

impl Request {
    pub fn new<S: Into<String>>(method: S) -> Self {
        Self {
            method: method.into(),
            headers: HeaderMap::new(),
        }
    }

    pub fn with_headers<S: Into<String>>(method: S, headers: HeaderMap) -> Self {
        Self {
            method: method.into(),
            headers,
        }
    }

    /// Adds a value to `name`, keeping any values already present.
    pub fn header<S: Into<String>>(mut self, name: &str, value: S) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
    }
}

/// Outbound response.
///
/// Header decoration goes through [`Response::with_header`], which consumes the
/// response and hands back a new value, so a decorated response never shares
/// header storage with the one it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    status: u16,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    pub fn with_body<B: Into<Vec<u8>>>(mut self, body: B) -> Self {
        self.body = body.into();
        self
    }

    /// Returns a copy of this response with `name` set to `values`, replacing
    /// whatever was stored under that name before.
    pub fn with_header<I, S>(self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Response {
            status,
            mut headers,
            body,
        } = self;
        headers.insert(name, values);
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Builds the bare response a preflight answers with.
pub trait ResponseFactory: Send + Sync {
    fn create(&self, status: u16) -> Response;
}

impl<F> ResponseFactory for F
where
    F: Fn(u16) -> Response + Send + Sync,
{
    fn create(&self, status: u16) -> Response {
        self(status)
    }
}

/// Factory producing an empty response with the requested status.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResponseFactory;

impl ResponseFactory for DefaultResponseFactory {
    fn create(&self, status: u16) -> Response {
        Response::new(status)
    }
}

/// The downstream handler a non-preflight request is forwarded to.
pub trait Handler: Send + Sync {
    type Error;

    fn handle(&self, request: &Request) -> impl Future<Output = Result<Response, Self::Error>> + Send;
}

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;
