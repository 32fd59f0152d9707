//! Conversational responder
//!
//! Turns a user utterance plus session history into a reply from the chat
//! model. The prompt is deterministic: a fixed persona preamble, the full
//! existing history rendered as alternating turns, then the new message.
//!
//! A failed model call returns a fixed apology and appends nothing, so the
//! stored history only ever contains exchanges the model actually produced.

use std::sync::Arc;

use tarmac_client::ChatModel;
use tarmac_core::domain::session::HistoryEntry;

use crate::session::SessionStore;

const PERSONA: &str = "\
You are a friendly and helpful assistant for an airline. Your role is to assist travellers and \
crew in reporting airline-related problems. Engage in a natural conversation to understand their \
issue. Your primary goal is to determine if they are reporting a physical issue (like damage, a \
broken seat, a mess, etc.). If they are describing a physical issue, your final response must be \
to gently ask for a picture. For example, say: \"I understand. To properly document this, it \
would be very helpful if you could share a picture of the issue.\" Keep your responses concise \
and empathetic.";

const FALLBACK_REPLY: &str =
    "Sorry, I ran into a problem while answering. Please try again in a moment.";

/// Conversational responder over a chat-model collaborator
pub struct Responder {
    model: Arc<dyn ChatModel>,
    store: Arc<SessionStore>,
}

impl Responder {
    /// Creates a responder backed by the given model and session store
    pub fn new(model: Arc<dyn ChatModel>, store: Arc<SessionStore>) -> Self {
        Self { model, store }
    }

    /// Produces a reply to one chat turn and records the exchange
    ///
    /// Fails soft: if the model call fails, the caller gets an apology, the
    /// history is left untouched, and the failure is logged.
    pub async fn respond(&self, user_id: &str, message: &str) -> String {
        let history = self.store.history(user_id);
        let prompt = build_prompt(&history, message);

        match self.model.complete(&prompt).await {
            Ok(reply) => {
                self.store.append_exchange(user_id, message, &reply);
                reply
            }
            Err(e) => {
                tracing::warn!("Chat model call failed for user {}: {}", user_id, e);
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

/// Assembles the deterministic prompt for one turn
fn build_prompt(history: &[HistoryEntry], message: &str) -> String {
    let mut prompt = String::from(PERSONA);
    prompt.push_str("\n\n--- Conversation History ---\n");
    for entry in history {
        prompt.push_str(entry.role.as_str());
        prompt.push_str(": ");
        prompt.push_str(&entry.content);
        prompt.push('\n');
    }
    prompt.push_str("user: ");
    prompt.push_str(message);
    prompt.push_str("\nassistant: ");
    prompt
}
