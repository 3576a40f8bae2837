//! Nanoguide - a terminal guide for Nano Banana image-editing prompts
//!
//! This library provides the guide's core functionality: the static prompt
//! catalog, the view controller driving the interactive frontend, the prompt
//! generator, and locally persisted favorites and theme preference.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod favorites;
pub mod generator;
pub mod notify;
pub mod search;
pub mod storage;
pub mod timers;
pub mod ui;
pub mod utils;

// Re-export core types for easier use
pub use catalog::{Catalog, Category, CategoryId, Difficulty, PromptEntry};
pub use config::{Config, Theme};
pub use controller::{port::ViewPort, state::Section, ViewController};
pub use favorites::Favorites;
pub use generator::GeneratorForm;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
