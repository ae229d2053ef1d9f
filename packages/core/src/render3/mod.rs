//! Render3 Module
//!
//! Component definitions and the factory pipeline that turns them into live
//! components.

pub mod component_factory;
pub mod component_factory_resolver;
pub mod component_ref;
pub mod config;
pub mod definition;
pub mod metadata;
pub mod renderer;
pub mod sanitizer;

// Re-exports
pub use component_factory::*;
pub use component_factory_resolver::*;
pub use component_ref::*;
pub use config::*;
pub use definition::*;
pub use metadata::*;
pub use renderer::*;
pub use sanitizer::*;
