use crate::model::EntityMode;
use thiserror::Error;

/// Input rejected locally before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a {} ID.", .0.label())]
    EmptyIdentifier(EntityMode),
    #[error("Message is empty")]
    EmptyDraft,
    #[error("A message is already being sent")]
    SendInFlight,
}

/// Failure talking to the tracking API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}
