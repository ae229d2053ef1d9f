//! Component Factory
//!
//! Creates live components from a normalized definition. Each creation looks
//! up the renderer factory and the sanitizer once, across the local injector
//! followed by the module injector, before falling back to the built-in
//! defaults.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use super::component_ref::{ComponentRef, ProjectableNode};
use super::config::is_dev_mode;
use super::definition::{ComponentDef, ComponentType};
use super::metadata::{normalize, ComponentFactoryContract, PropertyBinding};
use super::renderer::{default_renderer_factory, HostTarget, RendererFactory, RendererType};
use super::sanitizer::Sanitizer;
use crate::di::{locate, InjectorScope, NgModuleRef, RENDERER_FACTORY, SANITIZER};
use crate::error::Result;

/// Optional arguments of [`ComponentFactory::create_with`].
#[derive(Default)]
pub struct CreateOptions<'a> {
    /// Node groups to project, one group per content slot.
    pub projectable_nodes: Option<Vec<Vec<ProjectableNode>>>,
    pub host: Option<HostTarget>,
    /// Module whose injector is searched after the local injector.
    pub module: Option<&'a dyn NgModuleRef>,
}

impl<'a> CreateOptions<'a> {
    pub fn with_projectable_nodes(mut self, nodes: Vec<Vec<ProjectableNode>>) -> Self {
        self.projectable_nodes = Some(nodes);
        self
    }

    pub fn with_host(mut self, host: HostTarget) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_module(mut self, module: &'a dyn NgModuleRef) -> Self {
        self.module = Some(module);
        self
    }
}

/// Factory for one component type.
pub struct ComponentFactory {
    def: Arc<ComponentDef>,
    contract: Arc<ComponentFactoryContract>,
    renderer_type: RendererType,
}

impl ComponentFactory {
    /// Normalizes `def`; malformed definitions are rejected here rather than
    /// at creation time.
    pub fn new(def: Arc<ComponentDef>) -> Result<Self> {
        let contract = Arc::new(normalize(&def)?);
        let renderer_type = RendererType::from_def(&def);
        Ok(ComponentFactory {
            def,
            contract,
            renderer_type,
        })
    }

    pub fn component_type(&self) -> &ComponentType {
        &self.contract.component_type
    }

    pub fn selector(&self) -> &str {
        &self.contract.selector
    }

    pub fn ng_content_selectors(&self) -> &[String] {
        &self.contract.ng_content_selectors
    }

    pub fn inputs(&self) -> &[PropertyBinding] {
        &self.contract.inputs
    }

    pub fn outputs(&self) -> &[PropertyBinding] {
        &self.contract.outputs
    }

    pub fn contract(&self) -> &Arc<ComponentFactoryContract> {
        &self.contract
    }

    pub fn definition(&self) -> &Arc<ComponentDef> {
        &self.def
    }

    pub fn create(&self, injector: &dyn InjectorScope) -> Result<ComponentRef> {
        self.create_with(injector, CreateOptions::default())
    }

    pub fn create_with(
        &self,
        injector: &dyn InjectorScope,
        options: CreateOptions<'_>,
    ) -> Result<ComponentRef> {
        let CreateOptions {
            projectable_nodes,
            host,
            module,
        } = options;

        let projected_nodes = projectable_nodes.unwrap_or_default();
        if is_dev_mode() && projected_nodes.len() > self.contract.ng_content_selectors.len() {
            warn!(
                component = %self.contract.component_type,
                groups = projected_nodes.len(),
                slots = self.contract.ng_content_selectors.len(),
                "more projectable node groups than content slots"
            );
        }

        let mut scopes: Vec<&dyn InjectorScope> = vec![injector];
        if let Some(module) = module {
            scopes.push(module.injector());
        }

        let renderer_factory: Arc<dyn RendererFactory> =
            locate(&RENDERER_FACTORY, &scopes, default_renderer_factory)?;
        let renderer = renderer_factory.create_renderer(host.as_ref(), Some(&self.renderer_type));
        // The renderer already exists here, so a failed sanitizer lookup tears it down.
        let sanitizer: Option<Arc<dyn Sanitizer>> = match locate(&SANITIZER, &scopes, || None) {
            Ok(sanitizer) => sanitizer,
            Err(err) => {
                renderer.destroy();
                return Err(err);
            }
        };

        let instance = (self.def.factory)()?;
        debug!(component = %self.contract.component_type, "component created");

        Ok(ComponentRef {
            instance,
            renderer,
            sanitizer,
            host,
            projected_nodes,
            contract: self.contract.clone(),
        })
    }
}

impl fmt::Debug for ComponentFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentFactory")
            .field("contract", &self.contract)
            .field("renderer_type", &self.renderer_type)
            .finish_non_exhaustive()
    }
}
