//! Dependency Injection Module
//!
//! The small slice of DI the component runtime depends on: tokens, injector
//! scopes, module refs and the layered service locator.

pub mod injection_token;
pub mod injector;
pub mod locator;

// Re-exports
pub use injection_token::*;
pub use injector::*;
pub use locator::*;
