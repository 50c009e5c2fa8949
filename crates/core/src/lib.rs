//! Core types for gk-rename
//!
//! This is the foundation crate (Layer 0) that all other gk-rename crates depend on.
//! It provides:
//! - The shared error type
//! - Substitution rules (company and project placeholders)
//! - The skip set used when copying the template
//!
//! This crate has no dependencies on other gk-rename crates.

pub mod error;
pub mod rules;
pub mod skip;

pub use error::{Error, Result};
pub use rules::{COMPANY_PLACEHOLDER, RenameRules, Substitution};
pub use skip::SkipSet;
