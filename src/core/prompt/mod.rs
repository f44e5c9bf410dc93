//! Prompt construction
//!
//! Turns a (mode, scene) pair into the instruction sent upstream.

mod builder;
mod templates;

pub use builder::{BuiltPrompt, PromptBuilder};
