//! Conversational session layer
//!
//! The session store holds per-user history behind a lock; the responder
//! assembles prompts from it and drives the chat-model collaborator.

pub mod responder;
pub mod store;

pub use responder::Responder;
pub use store::SessionStore;
