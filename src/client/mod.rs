//! Clients of the registration API.

pub mod http;
pub mod mock_transport;

use std::error;
use std::fmt;

use uuid::Uuid;

use crate::model::registration::RegistrationPayload;
use crate::model::registration_result::RegistrationResult;

pub use self::http::HttpClient;
pub use self::mock_transport::MockTransport;

pub const FALLBACK_MESSAGE: &str =
    "Une erreur est survenue lors de l'inscription. Veuillez réessayer.";

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionError {
    /// The API answered with a non-successful status.
    Rejected { status: u16, message: Option<String> },
    /// The request could not be sent or its response could not be read.
    Network(String),
    /// The API answered successfully with an unexpected body.
    Decode(String),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SubmissionError::Rejected {
                status,
                message: Some(m),
            } => write!(f, "rejected ({}): {}", status, m),
            SubmissionError::Rejected { status, .. } => {
                write!(f, "rejected ({})", status)
            },
            SubmissionError::Network(e) => write!(f, "network: {}", e),
            SubmissionError::Decode(e) => write!(f, "decode: {}", e),
        }
    }
}

impl error::Error for SubmissionError {}

impl SubmissionError {
    /// Returns the message shown to the user, the one given by the server
    /// if any.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Rejected {
                message: Some(m), ..
            } if !m.trim().is_empty() => m.to_string(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// A transport sends a registration to the API.
pub trait Transport {
    fn register(
        &self,
        request_id: &Uuid,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationResult, SubmissionError>;
}
