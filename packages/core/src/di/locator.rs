//! Layered Service Locator
//!
//! Resolves a token against an ordered list of scopes. The first scope that
//! finds the token wins; when every scope misses, the lazily supplied default
//! is built.

use tracing::{debug, trace};

use super::injection_token::InjectionToken;
use super::injector::{InjectorScope, Lookup, ServiceValue};
use crate::error::Result;

/// Conversion from a raw registered value into the service type a caller needs.
pub trait FromService: Sized {
    /// Fails with [`FactoryError::InvalidServiceShape`](crate::FactoryError::InvalidServiceShape)
    /// when the registration does not hold a `Self`.
    fn from_service(token: &InjectionToken, value: ServiceValue) -> Result<Self>;
}

impl FromService for ServiceValue {
    fn from_service(_token: &InjectionToken, value: ServiceValue) -> Result<Self> {
        Ok(value)
    }
}

/// Resolves `token` from the first scope in `scopes` that registers it.
///
/// Scopes after the first hit are never consulted. `fallback` runs at most
/// once, and only when every scope reports [`Lookup::NotFound`].
pub fn locate<T, F>(token: &InjectionToken, scopes: &[&dyn InjectorScope], fallback: F) -> Result<T>
where
    T: FromService,
    F: FnOnce() -> T,
{
    for (tier, scope) in scopes.iter().enumerate() {
        trace!(token = token.desc(), tier, "probing injector scope");
        if let Lookup::Found(value) = scope.resolve(token) {
            debug!(token = token.desc(), tier, "service resolved from injector scope");
            return T::from_service(token, value);
        }
    }
    debug!(token = token.desc(), scopes = scopes.len(), "falling back to default service");
    Ok(fallback())
}
