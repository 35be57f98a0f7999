//! Shareable handle to one session, guarded against overlapping messages.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bazaar_common::SessionId;
use tokio::sync::Mutex;
use tracing::warn;

use crate::content::Turn;
use crate::AiClient;

use super::manager::Session;
use super::replies::fallback_reply;
use super::types::{BusyGuard, TurnState};

/// Cloneable handle; all clones talk to the same session.
///
/// The busy flag only tracks messages. Readers wait on the session lock
/// and never cause a message to be rejected.
#[derive(Clone)]
pub struct SessionHandle {
    id: SessionId,
    client: Arc<dyn AiClient>,
    session: Arc<Mutex<Session>>,
    busy: Arc<AtomicBool>,
}

impl SessionHandle {
    pub fn new(client: Arc<dyn AiClient>, session: Session) -> Self {
        Self {
            id: session.id().clone(),
            client,
            session: Arc::new(Mutex::new(session)),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Send a user message and wait for the reply text.
    ///
    /// Always resolves to a string. While another message on this session
    /// is in flight, the new one is rejected with a busy reply and not logged.
    pub async fn send_message(&self, text: impl Into<String>) -> String {
        let _guard = match BusyGuard::acquire(&self.busy) {
            Ok(guard) => guard,
            Err(e) => {
                warn!(session = %self.id, "Message rejected, session busy");
                return fallback_reply(&e).to_string();
            }
        };
        let mut session = self.session.lock().await;
        session.send_message(self.client.as_ref(), text).await
    }

    /// Whether a message is currently being handled.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Clear the conversation. Waits for an in-flight message to finish.
    pub async fn reset(&self) {
        self.session.lock().await.reset();
    }

    /// Copy of the conversation log.
    pub async fn turns(&self) -> Vec<Turn> {
        self.session.lock().await.turns().to_vec()
    }

    pub async fn state(&self) -> TurnState {
        self.session.lock().await.state()
    }

    /// Total tokens used by this session so far.
    pub async fn total_tokens(&self) -> u64 {
        self.session.lock().await.tracker().total_tokens()
    }
}
