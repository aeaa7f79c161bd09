//! Result types for the verification service

use crate::domain::entities::verification_code::VerificationCode;

/// Result of issuing a verification code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// The persisted code, including the plaintext digits for delivery
    pub verification_code: VerificationCode,

    /// Whether the mailer accepted the message
    pub delivered: bool,

    /// Provider message id, when delivery succeeded
    pub message_id: Option<String>,
}
