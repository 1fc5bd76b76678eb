use uuid::Uuid;

use crate::client::{SubmissionError, Transport};
use crate::logger::Logger;
use crate::model::registration::RegistrationPayload;
use crate::model::registration_result::RegistrationResult;

/// A single submission attempt
///
/// Each attempt carries its own request id, so that the API can tell a new
/// attempt from a replayed one.
#[derive(Clone, Debug)]
pub struct Submission {
    pub request_id: Uuid,
    pub payload: RegistrationPayload,
}

impl Submission {
    pub fn new(payload: RegistrationPayload) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            payload,
        }
    }
}

pub struct Registrar<'a> {
    transport: &'a dyn Transport,
    logger: &'a Logger,
}

impl<'a> Registrar<'a> {
    pub fn new(transport: &'a dyn Transport, logger: &'a Logger) -> Self {
        Self { transport, logger }
    }

    /// Sends the submission once. There is no retry.
    pub fn register(
        &self,
        submission: &Submission,
    ) -> Result<RegistrationResult, SubmissionError>
    {
        info!(
            self.logger,
            "submitting registration ({}) for {}",
            submission.request_id,
            submission.payload.username()
        );
        self.transport
            .register(&submission.request_id, &submission.payload)
            .map(|result| {
                info!(
                    self.logger,
                    "the user ({}) has been registered", &result.user
                );
                result
            })
            .map_err(|e| {
                error!(
                    self.logger,
                    "the registration ({}) has failed: {}",
                    submission.request_id,
                    e
                );
                e
            })
    }
}
