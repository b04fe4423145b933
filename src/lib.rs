//! Conventional Commits checker and semantic version engine.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use error::{ConchError, Result};
