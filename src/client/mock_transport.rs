use std::collections::VecDeque;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::client::{SubmissionError, Transport};
use crate::model::registration::RegistrationPayload;
use crate::model::registration_result::RegistrationResult;

type Response = Result<RegistrationResult, SubmissionError>;

/// A mock implements Transport for tests and dry runs
///
/// It answers with the queued responses in order and records every call.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Response>>,
    calls: Mutex<Vec<(Uuid, RegistrationPayload)>>,
}

impl Transport for MockTransport {
    fn register(
        &self,
        request_id: &Uuid,
        payload: &RegistrationPayload,
    ) -> Response
    {
        self.calls.lock().push((*request_id, payload.clone()));
        self.responses.lock().pop_front().unwrap_or_else(|| {
            Err(SubmissionError::Network("no response queued".to_string()))
        })
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn respond(&self, response: Response) -> &Self {
        self.responses.lock().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<(Uuid, RegistrationPayload)> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}
