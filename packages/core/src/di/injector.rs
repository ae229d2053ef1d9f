//! Injector Scopes
//!
//! An injector scope is a lookup boundary that may or may not hold a
//! registration for a token. The runtime never walks parent pointers; callers
//! hand the locator an ordered list of scopes instead.

use indexmap::IndexMap;
use std::any::Any;
use std::sync::Arc;

use super::injection_token::InjectionToken;

/// A value registered in an injector.
///
/// `Null` is a registration whose value is deliberately empty. It is a
/// successful resolution and must not be confused with [`Lookup::NotFound`].
#[derive(Debug, Clone)]
pub enum ServiceValue {
    Instance(Arc<dyn Any + Send + Sync>),
    Null,
}

impl ServiceValue {
    pub fn of<T: Any + Send + Sync>(value: T) -> Self {
        ServiceValue::Instance(Arc::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ServiceValue::Null)
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            ServiceValue::Instance(value) => value.downcast_ref::<T>(),
            ServiceValue::Null => None,
        }
    }
}

/// Outcome of asking a single scope for a token.
#[derive(Debug, Clone)]
pub enum Lookup {
    Found(ServiceValue),
    NotFound,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// A single injector boundary.
pub trait InjectorScope {
    fn resolve(&self, token: &InjectionToken) -> Lookup;
}

/// Any lookup function is a scope.
impl<F> InjectorScope for F
where
    F: Fn(&InjectionToken) -> Lookup,
{
    fn resolve(&self, token: &InjectionToken) -> Lookup {
        self(token)
    }
}

/// Scope that holds no registrations.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullInjector;

impl InjectorScope for NullInjector {
    fn resolve(&self, _token: &InjectionToken) -> Lookup {
        Lookup::NotFound
    }
}

/// Map-backed injector with fixed registrations.
#[derive(Debug, Clone, Default)]
pub struct StaticInjector {
    records: IndexMap<InjectionToken, ServiceValue>,
}

impl StaticInjector {
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    /// Registers `value` under `token`, replacing an earlier registration.
    pub fn provide<T: Any + Send + Sync>(mut self, token: InjectionToken, value: T) -> Self {
        self.records.insert(token, ServiceValue::of(value));
        self
    }

    /// Registers `token` with an explicitly empty value.
    pub fn provide_null(mut self, token: InjectionToken) -> Self {
        self.records.insert(token, ServiceValue::Null);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl InjectorScope for StaticInjector {
    fn resolve(&self, token: &InjectionToken) -> Lookup {
        match self.records.get(token) {
            Some(value) => Lookup::Found(value.clone()),
            None => Lookup::NotFound,
        }
    }
}

/// Handle to a module whose injector forms the secondary lookup scope.
pub trait NgModuleRef {
    fn injector(&self) -> &dyn InjectorScope;
}

/// Module ref backed by a [`StaticInjector`].
#[derive(Debug, Clone, Default)]
pub struct StaticModuleRef {
    injector: StaticInjector,
}

impl StaticModuleRef {
    pub fn new(injector: StaticInjector) -> Self {
        Self { injector }
    }
}

impl NgModuleRef for StaticModuleRef {
    fn injector(&self) -> &dyn InjectorScope {
        &self.injector
    }
}
