//! The normalized result wrapping every backend call outcome.

use serde_json::Value;

/// Outcome of a backend request.
///
/// Every accessor operation resolves to one of these two variants; network
/// errors, non-2xx statuses, and body parse failures all collapse into
/// [`Envelope::Failure`] with a human-readable message. Callers never see a
/// raised error from the client layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// The request succeeded and the body parsed as JSON.
    Success(Value),

    /// The request failed; the message describes what went wrong.
    Failure(String),
}

impl Envelope {
    /// Build a failure envelope from any displayable error.
    pub fn failure(error: impl ToString) -> Self {
        Envelope::Failure(error.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    /// The payload, when the request succeeded.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Envelope::Success(data) => Some(data),
            Envelope::Failure(_) => None,
        }
    }

    /// The failure message, when the request failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Failure(error) => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_exposes_data_only() {
        let env = Envelope::Success(json!({"count": 4}));
        assert!(env.is_success());
        assert_eq!(env.data().unwrap()["count"], 4);
        assert!(env.error().is_none());
    }

    #[test]
    fn failure_exposes_message_only() {
        let env = Envelope::failure("HTTP error! status: 500");
        assert!(!env.is_success());
        assert!(env.data().is_none());
        assert_eq!(env.error(), Some("HTTP error! status: 500"));
    }
}
