use crate::domain::ports::Transport;
use crate::error::{Result, SevdError};
use std::cell::RefCell;
use std::collections::VecDeque;

/// A POST captured by [`InMemoryTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub fields: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A transport that answers from a script of canned bodies, in order, and
/// records every request it receives.
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    responses: RefCell<VecDeque<String>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl InMemoryTransport {
    /// Creates a new transport with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the body returned by the next unanswered request.
    pub fn respond_with(&self, body: impl Into<String>) -> &Self {
        self.responses.borrow_mut().push_back(body.into());
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn pending(&self) -> usize {
        self.responses.borrow().len()
    }
}

impl Transport for InMemoryTransport {
    fn post(&self, url: &str, fields: &[(&str, &str)]) -> Result<String> {
        self.requests.borrow_mut().push(RecordedRequest {
            url: url.to_string(),
            fields: fields
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        });
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| SevdError::Transport(format!("no scripted response for {url}")))
    }
}
