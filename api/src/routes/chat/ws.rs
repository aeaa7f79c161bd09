//! Handler for GET /ws - the realtime chat endpoint
//!
//! The session binder resolves the optional `token` query parameter
//! before the websocket upgrade completes. No token means an anonymous
//! connection; an invalid or expired token rejects the connection with
//! 401 rather than silently downgrading. Whatever identity is bound here
//! stays bound for the connection's whole lifetime.

use actix_web::{web, HttpRequest, HttpResponse};
use actix_ws::{Message, MessageStream, Session};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};

use gc_core::domain::value_objects::SessionIdentity;
use gc_core::repositories::{UserRepository, VerificationCodeRepository};
use gc_core::services::google::IdTokenVerifier;
use gc_core::services::verification::MailerTrait;

use crate::handlers::error::to_response;
use crate::routes::AppState;

/// Connection parameters delivered out-of-band with the upgrade request
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    /// Optional bearer token proving a prior authentication
    pub token: Option<String>,
}

/// Frame sent to the client
#[derive(Debug, Serialize)]
struct ChatFrame<'a> {
    /// "system" or "chat"
    r#type: &'a str,
    /// The identity the connection is bound to
    identity: SessionIdentity,
    content: &'a str,
}

/// Upgrades the connection to a websocket after binding an identity.
pub async fn chat_ws<U, R, M, P>(
    req: HttpRequest,
    body: web::Payload,
    query: web::Query<ConnectQuery>,
    state: web::Data<AppState<U, R, M, P>>,
) -> actix_web::Result<HttpResponse>
where
    U: UserRepository + 'static,
    R: VerificationCodeRepository + 'static,
    M: MailerTrait + 'static,
    P: IdTokenVerifier + 'static,
{
    let identity = match state.session_binder.bind(query.token.as_deref()) {
        Ok(identity) => identity,
        Err(error) => {
            tracing::warn!(error = %error, "Rejecting websocket connection: invalid token");
            return Ok(to_response(&error));
        }
    };

    let (response, session, msg_stream) = actix_ws::handle(&req, body)?;

    tracing::info!(
        authenticated = identity.is_authenticated(),
        "Websocket connection established"
    );
    actix_web::rt::spawn(chat_session(session, msg_stream, identity));

    Ok(response)
}

/// Runs one chat connection until the peer disconnects.
///
/// Message persistence and reply generation live behind the chat
/// collaborator boundary; this loop greets the peer and echoes frames
/// tagged with the bound identity.
async fn chat_session(mut session: Session, mut msg_stream: MessageStream, identity: SessionIdentity) {
    let greeting = ChatFrame {
        r#type: "system",
        identity,
        content: "Welcome to GuideChat. How can we help you today?",
    };
    if let Ok(text) = serde_json::to_string(&greeting) {
        if session.text(text).await.is_err() {
            return;
        }
    }

    while let Some(msg) = msg_stream.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                let frame = ChatFrame {
                    r#type: "chat",
                    identity,
                    content: text.as_ref(),
                };
                let serialized = match serde_json::to_string(&frame) {
                    Ok(serialized) => serialized,
                    Err(_) => continue,
                };
                if session.text(serialized).await.is_err() {
                    break;
                }
            }
            Ok(Message::Ping(bytes)) => {
                if session.pong(&bytes).await.is_err() {
                    break;
                }
            }
            Ok(Message::Close(reason)) => {
                let _ = session.close(reason).await;
                tracing::debug!("Websocket closed by peer");
                return;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(error = %e, "Websocket protocol error");
                break;
            }
        }
    }

    let _ = session.close(None).await;
}
