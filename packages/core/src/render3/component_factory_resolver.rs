//! Component Factory Resolver
//!
//! Maps component types to their factories. A factory is built the first time
//! its type is resolved and shared by every later resolution.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::component_factory::ComponentFactory;
use super::definition::{Component, ComponentDef, ComponentType};
use crate::error::Result;

/// Cache of component factories keyed by component type.
#[derive(Debug, Default)]
pub struct ComponentFactoryResolver {
    factories: Mutex<HashMap<ComponentType, Arc<ComponentFactory>>>,
}

static GLOBAL_RESOLVER: Lazy<ComponentFactoryResolver> = Lazy::new(ComponentFactoryResolver::new);

impl ComponentFactoryResolver {
    pub fn new() -> Self {
        Self {
            factories: Mutex::new(HashMap::new()),
        }
    }

    /// Process-wide resolver.
    pub fn global() -> &'static ComponentFactoryResolver {
        &GLOBAL_RESOLVER
    }

    /// Resolves the factory for `def.type_`.
    ///
    /// The cache is keyed by type name only. Once a factory exists for a
    /// name, later definitions under that name are ignored and the cached
    /// factory is returned.
    pub fn resolve_component_factory(&self, def: &Arc<ComponentDef>) -> Result<Arc<ComponentFactory>> {
        let factory = self.get_or_build(&def.type_, || def.clone())?;
        if !Arc::ptr_eq(factory.definition(), def) {
            debug!(component = %def.type_, "definition ignored, factory already cached for type");
        }
        Ok(factory)
    }

    /// Resolves the factory of `C`; `C::definition()` only runs on a cache miss.
    pub fn resolve<C: Component>(&self) -> Result<Arc<ComponentFactory>> {
        self.get_or_build(&ComponentType::new(C::NAME), || Arc::new(C::definition()))
    }

    pub fn cached_factory_count(&self) -> usize {
        self.factories.lock().len()
    }

    pub fn clear(&self) {
        self.factories.lock().clear();
    }

    // The lock is held while building so that each type is normalized once.
    // `build` must not resolve through the same resolver.
    fn get_or_build<F>(&self, component_type: &ComponentType, build: F) -> Result<Arc<ComponentFactory>>
    where
        F: FnOnce() -> Arc<ComponentDef>,
    {
        let mut factories = self.factories.lock();
        if let Some(factory) = factories.get(component_type) {
            return Ok(factory.clone());
        }
        let factory = Arc::new(ComponentFactory::new(build())?);
        debug!(component = %component_type, "component factory created");
        factories.insert(component_type.clone(), factory.clone());
        Ok(factory)
    }
}

/// Resolves `def` through the process-wide resolver.
pub fn resolve_factory(def: &Arc<ComponentDef>) -> Result<Arc<ComponentFactory>> {
    ComponentFactoryResolver::global().resolve_component_factory(def)
}

/// Resolves `C` through the process-wide resolver.
pub fn resolve_factory_for<C: Component>() -> Result<Arc<ComponentFactory>> {
    ComponentFactoryResolver::global().resolve::<C>()
}
