//! Telegram bot handler tree configuration
//!
//! Commands, URL messages, and choice buttons are routed to the request
//! orchestrator. The same tree is used in production and can be driven from
//! integration tests.

mod commands;
mod requests;
mod schema;
mod types;

pub use schema::schema;
pub use types::{HandlerDeps, HandlerError, SessionDialogue, SessionStorage};
