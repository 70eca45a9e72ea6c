//! Submission contract with the remote quote service.

use serde::Deserialize;
use thiserror::Error;

use crate::quote::QuoteRequest;

/// Toast text used whenever the service gives nothing more specific.
pub const GENERIC_FAILURE_MESSAGE: &str = "Error submitting quote request. Please try again.";

/// Toast text shown once the service accepts a request.
pub const SUCCESS_MESSAGE: &str =
    "Quote request submitted! We'll get back to you within 24 hours.";

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The service answered and refused the request.
    #[error("quote service rejected the request (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    /// The service answered with something other than a JSON object.
    #[error("malformed response from quote service: {0}")]
    Malformed(String),
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// The request could not be built.
    #[error("could not encode quote request: {0}")]
    Encode(String),
}

impl SubmitError {
    /// Text for the error toast.
    ///
    /// A message supplied by the service is shown verbatim; everything else
    /// collapses to the generic notice.
    pub fn user_message(&self) -> &str {
        match self {
            SubmitError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message,
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

/// Body returned by the quote service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuoteResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Decide the outcome of a completed HTTP exchange.
///
/// `status_ok` is whether the status was 2xx. The body must be a JSON object;
/// an explicit `"success": false` fails even on a 2xx status, and a missing
/// `success` leaves the decision to the status.
pub fn interpret_response(status: u16, status_ok: bool, body: &str) -> Result<(), SubmitError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| SubmitError::Malformed(e.to_string()))?;

    if !value.is_object() {
        return Err(SubmitError::Malformed(format!(
            "expected a JSON object, got {value}"
        )));
    }

    let response: QuoteResponse =
        serde_json::from_value(value).map_err(|e| SubmitError::Malformed(e.to_string()))?;

    if status_ok && response.success.unwrap_or(true) {
        Ok(())
    } else {
        Err(SubmitError::Rejected {
            status,
            message: response.message,
        })
    }
}

/// Where quote requests are sent.
///
/// The browser implementation posts with `fetch`; tests substitute a mock.
#[allow(async_fn_in_trait)]
pub trait QuoteEndpoint {
    /// Send `request`; `Ok` only once the service confirmed it.
    async fn submit(&self, request: &QuoteRequest) -> Result<(), SubmitError>;
}

impl<E: QuoteEndpoint> QuoteEndpoint for std::rc::Rc<E> {
    async fn submit(&self, request: &QuoteRequest) -> Result<(), SubmitError> {
        (**self).submit(request).await
    }
}
