//! Renderer Interfaces
//!
//! The rendering backend is an external collaborator. The factory pipeline
//! only needs to obtain a [`RendererFactory`] and ask it for one renderer.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::definition::ComponentDef;
use crate::core::ViewEncapsulation;
use crate::di::{FromService, InjectionToken, ServiceValue};
use crate::error::{FactoryError, Result};

/// Where the component's host element comes from.
#[derive(Clone)]
pub enum HostTarget {
    /// Select an existing root element by selector.
    Selector(String),
    /// Use an already created backend node.
    Node(Arc<dyn Any + Send + Sync>),
}

impl fmt::Debug for HostTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostTarget::Selector(selector) => f.debug_tuple("Selector").field(selector).finish(),
            HostTarget::Node(_) => f.write_str("Node(..)"),
        }
    }
}

/// Component metadata handed to [`RendererFactory::create_renderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct RendererType {
    pub id: String,
    pub encapsulation: ViewEncapsulation,
    pub styles: Vec<String>,
    pub data: IndexMap<String, serde_json::Value>,
}

impl RendererType {
    pub fn from_def(def: &ComponentDef) -> Self {
        RendererType {
            id: def.type_.name().to_string(),
            encapsulation: def.encapsulation,
            styles: def.styles.clone(),
            data: def.data.clone(),
        }
    }
}

/// Backend object that produces the component's visual output.
pub trait Renderer: Send + Sync {
    /// Called by the owner of the renderer when the view goes away.
    fn destroy(&self) {}
}

/// Creates renderers for component hosts.
pub trait RendererFactory: Send + Sync {
    fn create_renderer(
        &self,
        host: Option<&HostTarget>,
        renderer_type: Option<&RendererType>,
    ) -> Arc<dyn Renderer>;
}

/// Registrations under [`RENDERER_FACTORY`](crate::di::RENDERER_FACTORY) hold an
/// `Arc<dyn RendererFactory>`.
impl FromService for Arc<dyn RendererFactory> {
    fn from_service(token: &InjectionToken, value: ServiceValue) -> Result<Self> {
        value
            .downcast_ref::<Arc<dyn RendererFactory>>()
            .cloned()
            .ok_or(FactoryError::InvalidServiceShape {
                token: token.desc(),
                expected: "renderer factory",
            })
    }
}

/// Renderer over the host document, used when no injector provides one.
#[derive(Debug, Default)]
pub struct DocumentRenderer;

impl Renderer for DocumentRenderer {}

/// Built-in renderer factory. Every renderer it creates shares one document.
#[derive(Debug, Default)]
pub struct DocumentRendererFactory {
    document: Arc<DocumentRenderer>,
}

impl RendererFactory for DocumentRendererFactory {
    fn create_renderer(
        &self,
        _host: Option<&HostTarget>,
        _renderer_type: Option<&RendererType>,
    ) -> Arc<dyn Renderer> {
        self.document.clone()
    }
}

static DOCUMENT_RENDERER_FACTORY: Lazy<Arc<DocumentRendererFactory>> =
    Lazy::new(|| Arc::new(DocumentRendererFactory::default()));

/// The process-wide default renderer factory.
pub fn default_renderer_factory() -> Arc<dyn RendererFactory> {
    DOCUMENT_RENDERER_FACTORY.clone()
}

/// Checks whether `factory` is the built-in default.
pub fn is_default_renderer_factory(factory: &Arc<dyn RendererFactory>) -> bool {
    Arc::as_ptr(factory) as *const () == Arc::as_ptr(&*DOCUMENT_RENDERER_FACTORY) as *const ()
}

/// Checks whether `renderer` was produced by the built-in default factory.
pub fn is_default_renderer(renderer: &Arc<dyn Renderer>) -> bool {
    Arc::as_ptr(renderer) as *const () == Arc::as_ptr(&DOCUMENT_RENDERER_FACTORY.document) as *const ()
}
