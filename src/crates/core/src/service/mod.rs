//! Service layer
//!
//! Mock chat API facade: the send flow plus the conversation management
//! surface, fabricated entirely in-process.

pub mod chat;

pub use chat::{ChatService, CLEAR_SUCCESS_MESSAGE, DELETE_SUCCESS_MESSAGE};
