//! The backend boundary contract.

use mailscope_core::MessageId;
use serde::{Deserialize, Serialize};

/// Errors that can occur at the backend boundary.
///
/// The stub implementation never produces these; they exist so a real
/// backend can surface failures through the same contract instead of
/// inventing a second result channel.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The backend could not be reached.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the request.
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Acknowledgement for a sent email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    /// Server-assigned identifier for the send.
    pub id: String,
    /// Recipient, echoed back unvalidated.
    pub to: String,
    /// Subject line, echoed back.
    pub subject: String,
}

/// Outcome of a suggested-action execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    /// The action completed.
    #[default]
    Ok,
}

/// Acknowledgement for an executed message action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionReceipt {
    /// Message the action was executed against.
    pub email_id: MessageId,
    /// The action name, echoed back.
    pub action: String,
    /// Completion status.
    pub status: ActionStatus,
}

/// Result of an AI assistant request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiResponse {
    /// Message the request was about.
    pub email_id: MessageId,
    /// Assistant reply text for the toast/sidebar.
    pub response_text: String,
}

/// Asynchronous backend operations invoked by compose and per-message UI.
///
/// Calls are fire-and-forget from the store's point of view: none of them
/// mutates the message list, and the caller displays the returned value as a
/// notification. Each call is independent - no deduplication, queueing, or
/// rate limiting - and once issued it cannot be cancelled; dismissing the
/// originating view does not abort an in-flight call. Real implementations
/// report failures through [`GatewayError`] and should decide their own
/// retry policy; the stub never fails.
#[allow(async_fn_in_trait)] // call sites are generic over the concrete gateway
pub trait Gateway {
    /// Sends an email and returns a receipt.
    ///
    /// The recipient is not validated as an address; the send does not land
    /// in any folder.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the backend fails; the stub never does.
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<SendReceipt>;

    /// Executes a suggested action against a message.
    ///
    /// Performs no mutation of the message it names.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the backend fails; the stub never does.
    async fn execute_action(&self, email_id: &MessageId, action: &str) -> Result<ActionReceipt>;

    /// Runs an AI assistant request about a message.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the backend fails; the stub never does.
    async fn run_ai_request(&self, email_id: &MessageId, prompt: &str) -> Result<AiResponse>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn receipts_serialize_with_camel_case_fields() {
        let receipt = ActionReceipt {
            email_id: MessageId::new("email_001"),
            action: "Archive email".into(),
            status: ActionStatus::Ok,
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["emailId"], "email_001");
        assert_eq!(json["status"], "ok");

        let response = AiResponse {
            email_id: MessageId::new("email_001"),
            response_text: "done".into(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["responseText"], "done");
    }

    #[test]
    fn gateway_errors_display_their_cause() {
        let err = GatewayError::Unavailable("connection refused".into());
        assert_eq!(err.to_string(), "backend unavailable: connection refused");
        let err = GatewayError::Rejected("quota exceeded".into());
        assert_eq!(err.to_string(), "request rejected: quota exceeded");
    }
}
