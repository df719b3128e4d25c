//! Session layer
//!
//! In-memory conversation store: history, current-conversation pointer and
//! the in-flight generation flag.

pub mod manager;

pub use manager::{get_global_conversation_manager, ConversationManager};
