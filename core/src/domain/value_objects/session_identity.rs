//! Identity resolved for a realtime connection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity bound to a realtime connection for its whole lifetime.
///
/// Anonymous connections operate under a restricted capability set (no
/// per-user history persistence); the binding never changes after the
/// connection is established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SessionIdentity {
    /// No token was presented; restricted capabilities
    Anonymous,
    /// A valid session token resolved to this user
    Authenticated {
        /// The bound user id
        user_id: Uuid,
    },
}

impl SessionIdentity {
    /// The bound user id, if any
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            SessionIdentity::Anonymous => None,
            SessionIdentity::Authenticated { user_id } => Some(*user_id),
        }
    }

    /// Whether this connection belongs to an authenticated user
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionIdentity::Authenticated { .. })
    }
}
