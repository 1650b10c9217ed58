use bunner_cors_negotiation::{Handler, Request, Response};
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Downstream handler that records how often it ran and answers with a fixed
/// response.
pub struct RecordingHandler {
    response: Response,
    calls: AtomicUsize,
}

impl RecordingHandler {
    pub fn new(response: Response) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(Response::new(200))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Handler for RecordingHandler {
    type Error = Infallible;

    async fn handle(&self, _request: &Request) -> Result<Response, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unavailable(pub &'static str);

/// Downstream handler that always fails.
pub struct FailingHandler;

impl Handler for FailingHandler {
    type Error = Unavailable;

    async fn handle(&self, _request: &Request) -> Result<Response, Self::Error> {
        Err(Unavailable("backend down"))
    }
}
