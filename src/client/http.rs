use reqwest::blocking::Client;
use uuid::Uuid;

use crate::client::{SubmissionError, Transport};
use crate::config::Config;
use crate::model::registration::RegistrationPayload;
use crate::model::registration_result::{Message, RegistrationResult};

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<Message>,
}

/// A transport posting the payload as JSON to the registration endpoint.
pub struct HttpClient {
    url: String,
    client: Client,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self, SubmissionError> {
        let client = Client::builder()
            .build()
            .map_err(|e| SubmissionError::Network(e.to_string()))?;
        Ok(Self {
            url: config.registration_api_url.to_string(),
            client,
        })
    }
}

impl Transport for HttpClient {
    fn register(
        &self,
        request_id: &Uuid,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationResult, SubmissionError>
    {
        let res = self
            .client
            .post(&self.url)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(payload)
            .send()
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        if status.is_success() {
            return serde_json::from_str::<RegistrationResult>(&body)
                .map_err(|e| SubmissionError::Decode(e.to_string()));
        }

        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.to_string());
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
