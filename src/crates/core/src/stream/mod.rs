//! Streaming emitter
//!
//! Drips a selected response out to a consumer callback in randomly sized
//! chunks on a fixed cadence, then reports completion exactly once.

pub mod emitter;

pub use emitter::{EmitterConfig, StreamEmitter, StreamResult, SEND_SUCCESS_MESSAGE};
