//! Prompt composition for the idea generator
//!
//! Holds the static settings catalog and turns a user's selections plus
//! free-text notes into the natural-language prompt sent to the model.

pub mod catalog;
pub mod error;
pub mod prompt;
pub mod selections;

pub use catalog::{CATALOG, SettingEntry};
pub use error::{SelectionError, SelectionResult};
pub use prompt::{SURPRISE_PROMPT, compose_prompt};
pub use selections::Selections;
