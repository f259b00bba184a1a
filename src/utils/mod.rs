//! Utility modules
//!
//! This module contains the error types and logging setup shared by the
//! rest of the crate.

pub mod errors;
pub mod logging;

pub use errors::{I18nError, MissingTranslation, Result};
