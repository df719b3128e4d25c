//! Response generator
//!
//! Classifies the user utterance and picks a canned response from the catalog.

pub mod catalog;
pub mod classifier;
pub mod selector;

pub use catalog::ResponseCatalog;
pub use classifier::{classify, Category};
pub use selector::ResponseSelector;
