//! Mock email service implementation
//!
//! Logs verification emails instead of sending them. Used in development
//! when no provider is configured, and by integration tests to observe
//! issued codes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::info;
use uuid::Uuid;

use gc_core::services::verification::MailerTrait;

/// Mock email service for development and testing
#[derive(Clone, Default)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Last code sent per recipient
    sent_codes: Arc<Mutex<HashMap<String, String>>>,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// The last code sent to a recipient, if any
    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.sent_codes.lock().unwrap().get(email).cloned()
    }
}

#[async_trait]
impl MailerTrait for MockEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        self.message_count.fetch_add(1, Ordering::SeqCst);
        self.sent_codes
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());

        let message_id = format!("mock-{}", Uuid::new_v4());
        info!(
            to = email,
            code = code,
            message_id = %message_id,
            "Mock mailer: verification email logged instead of sent"
        );

        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_sent_codes() {
        let mailer = MockEmailService::new();
        mailer
            .send_verification_code("a@x.com", "123456")
            .await
            .unwrap();

        assert_eq!(mailer.message_count(), 1);
        assert_eq!(mailer.last_code_for("a@x.com").as_deref(), Some("123456"));
        assert_eq!(mailer.last_code_for("b@x.com"), None);
    }
}
