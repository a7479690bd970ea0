//! Tone conversion relay
//!
//! Receives text plus a target audience, conditions a chat-completion
//! backend with the matching system prompt, and relays the rewritten text.

#![allow(clippy::must_use_candidate)]

mod audience;
mod backend;
mod error;
mod handler;
mod prompts;
pub mod protocol;
mod state;

pub use audience::Audience;
pub use backend::{ChatBackend, GroqClient};
pub use error::RelayError;
pub use handler::relay_router;
pub use prompts::system_prompt;
pub use state::{Conversion, RelayState};
