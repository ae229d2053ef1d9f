//! Component Refs

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::definition::{ComponentInstance, ComponentType};
use super::metadata::ComponentFactoryContract;
use super::renderer::{HostTarget, Renderer};
use super::sanitizer::Sanitizer;

/// A node handed to a component for content projection.
pub type ProjectableNode = Arc<dyn Any + Send + Sync>;

/// A live component created by a [`ComponentFactory`](super::ComponentFactory).
///
/// The ref owns its instance and renderer. Tearing the view down is up to
/// whoever holds it.
pub struct ComponentRef {
    pub(crate) instance: ComponentInstance,
    pub(crate) renderer: Arc<dyn Renderer>,
    pub(crate) sanitizer: Option<Arc<dyn Sanitizer>>,
    pub(crate) host: Option<HostTarget>,
    pub(crate) projected_nodes: Vec<Vec<ProjectableNode>>,
    pub(crate) contract: Arc<ComponentFactoryContract>,
}

impl ComponentRef {
    pub fn instance<T: Any>(&self) -> Option<&T> {
        self.instance.downcast_ref::<T>()
    }

    pub fn instance_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.instance.downcast_mut::<T>()
    }

    pub fn component_type(&self) -> &ComponentType {
        &self.contract.component_type
    }

    pub fn contract(&self) -> &Arc<ComponentFactoryContract> {
        &self.contract
    }

    pub fn renderer(&self) -> &Arc<dyn Renderer> {
        &self.renderer
    }

    pub fn sanitizer(&self) -> Option<&Arc<dyn Sanitizer>> {
        self.sanitizer.as_ref()
    }

    pub fn host(&self) -> Option<&HostTarget> {
        self.host.as_ref()
    }

    /// Projected node groups, one per content slot in slot order.
    pub fn projected_nodes(&self) -> &[Vec<ProjectableNode>] {
        &self.projected_nodes
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRef")
            .field("component_type", self.component_type())
            .field("host", &self.host)
            .field("has_sanitizer", &self.sanitizer.is_some())
            .field("projected_groups", &self.projected_nodes.len())
            .finish_non_exhaustive()
    }
}
