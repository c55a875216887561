use crate::models::QuizRequest;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000/generate";
pub const SERVICE_URL_VAR: &str = "MCQ_SERVICE_URL";

/// Failure taxonomy for one generation attempt. Every failure is terminal
/// for that attempt; the user resubmits.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service reported an error, or put the failure text where the
    /// question sequence belongs. Shown verbatim.
    #[error("{0}")]
    Reported(String),
    /// The body parsed but `mcqs` was neither text nor a sequence.
    #[error("Unexpected response format")]
    UnexpectedFormat,
    #[error("Error: {0}")]
    Http(#[from] ureq::Error),
    #[error("Error: {0}")]
    Body(#[from] std::io::Error),
}

/// Response envelope from the generation service. `mcqs` is left as a raw
/// value because the service sends either a question sequence or a failure
/// message in that slot.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub mcqs: Option<Value>,
}

/// Interpret the envelope. A reported error wins over everything else; a
/// text `mcqs` is itself the failure message; anything that is not a
/// sequence is a format mismatch.
pub fn decode_response(body: GenerateResponse) -> Result<Vec<Value>, ServiceError> {
    // An empty error string is not a failure, matching the truthiness the
    // service's clients have always applied to this field.
    if let Some(message) = body.error {
        if !message.is_empty() {
            return Err(ServiceError::Reported(message));
        }
    }
    match body.mcqs {
        Some(Value::String(message)) => Err(ServiceError::Reported(message)),
        Some(Value::Array(items)) => Ok(items),
        _ => Err(ServiceError::UnexpectedFormat),
    }
}

pub struct GenerationClient {
    agent: ureq::Agent,
    url: String,
}

impl GenerationClient {
    pub fn new(url: String) -> Self {
        Self {
            agent: ureq::agent(),
            url,
        }
    }

    pub fn from_env() -> Self {
        let url = std::env::var(SERVICE_URL_VAR).unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
        Self::new(url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Post the request and interpret the envelope. Error statuses still
    /// carry the service's JSON body, so a 400 with an `error` field shows
    /// that message rather than a bare status code.
    pub fn generate(&self, request: &QuizRequest) -> Result<Vec<Value>, ServiceError> {
        let response = match self.agent.post(&self.url).send_json(request) {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(e) => return Err(ServiceError::Http(e)),
        };
        let body: GenerateResponse = response.into_json()?;
        decode_response(body)
    }
}
