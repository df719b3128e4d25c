//! Utility layer

pub mod errors;

pub use errors::*;
