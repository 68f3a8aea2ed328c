//! Diagnostic types for error reporting.

mod error;
mod warning;

pub use error::CompilerError;
pub use warning::{Warning, Warnings};
