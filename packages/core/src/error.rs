//! Errors raised while building factories or creating components.

use thiserror::Error;

/// Failure of definition normalization, service resolution or instantiation.
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("component definition has no type name")]
    MissingComponentType,

    #[error("component `{component}` declares no selectors")]
    EmptySelectors { component: String },

    #[error("component `{component}` has an empty first selector alternative")]
    EmptySelectorAlternative { component: String },

    #[error("service registered for `{token}` is not a valid {expected}")]
    InvalidServiceShape {
        token: &'static str,
        expected: &'static str,
    },

    #[error("invalid runtime configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Error raised by a component's own factory function, passed through as is.
    #[error(transparent)]
    Component(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FactoryError>;
