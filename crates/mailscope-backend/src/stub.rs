//! Fixed-latency stub gateway.

use std::time::Duration;

use chrono::Utc;
use mailscope_core::MessageId;
use tracing::debug;

use crate::gateway::{
    ActionReceipt, ActionStatus, AiResponse, Gateway, Result, SendReceipt,
};

/// Simulated latency for a send, matching the original mock backend.
pub const SEND_DELAY: Duration = Duration::from_millis(800);
/// Simulated latency for an action execution.
pub const ACTION_DELAY: Duration = Duration::from_millis(700);
/// Simulated latency for an AI request.
pub const AI_DELAY: Duration = Duration::from_millis(1100);

/// Gateway implementation that resolves every call with a canned response
/// after a fixed delay.
///
/// Because the delay is constant per operation type, overlapping calls of
/// the same kind complete in call order. The stub holds no state and never
/// returns an error.
#[derive(Debug, Clone)]
pub struct StubGateway {
    send_delay: Duration,
    action_delay: Duration,
    ai_delay: Duration,
}

impl StubGateway {
    /// Creates a stub with the standard simulated delays.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            send_delay: SEND_DELAY,
            action_delay: ACTION_DELAY,
            ai_delay: AI_DELAY,
        }
    }

    /// Creates a stub with custom delays.
    #[must_use]
    pub const fn with_delays(send: Duration, action: Duration, ai: Duration) -> Self {
        Self {
            send_delay: send,
            action_delay: action,
            ai_delay: ai,
        }
    }
}

impl Default for StubGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl Gateway for StubGateway {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<SendReceipt> {
        debug!(to, subject, body_len = body.len(), "stub send_email");
        tokio::time::sleep(self.send_delay).await;
        let receipt = SendReceipt {
            id: format!("sent_{}", Utc::now().timestamp_millis()),
            to: to.to_string(),
            subject: subject.to_string(),
        };
        debug!(id = %receipt.id, "stub send_email resolved");
        Ok(receipt)
    }

    async fn execute_action(&self, email_id: &MessageId, action: &str) -> Result<ActionReceipt> {
        debug!(email_id = %email_id, action, "stub execute_action");
        tokio::time::sleep(self.action_delay).await;
        Ok(ActionReceipt {
            email_id: email_id.clone(),
            action: action.to_string(),
            status: ActionStatus::Ok,
        })
    }

    async fn run_ai_request(&self, email_id: &MessageId, prompt: &str) -> Result<AiResponse> {
        debug!(email_id = %email_id, prompt, "stub run_ai_request");
        tokio::time::sleep(self.ai_delay).await;
        Ok(AiResponse {
            email_id: email_id.clone(),
            response_text: format!(
                "I've processed your request: \"{prompt}\". Draft has been created."
            ),
        })
    }
}
