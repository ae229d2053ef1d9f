#![deny(clippy::all)]

//! Angular Core Runtime - component factories
//!
//! Resolves component factories from runtime definitions and instantiates
//! components against a renderer factory and sanitizer located through the
//! local and module injectors.

pub mod core;
pub mod di;
mod error;
pub mod render3;

// Re-exports
pub use error::{FactoryError, Result};
