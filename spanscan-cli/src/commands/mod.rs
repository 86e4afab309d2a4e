//! Command modules for the spanscan CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod annotate;
pub mod languages;

// Re-export command types and functions
pub use annotate::{run_annotate, AnnotateArgs, AnnotateCommand};
pub use languages::{run_languages, LanguagesCommand};
