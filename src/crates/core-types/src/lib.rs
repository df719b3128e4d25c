//! Axiao Wenwen shared low-level chat DTOs
//!
//! Serialization-only types shared between the core library and front ends.

pub mod api;
pub mod conversation;
pub mod message;

pub use api::*;
pub use conversation::*;
pub use message::*;
