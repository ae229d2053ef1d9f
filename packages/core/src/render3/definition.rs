//! Component Definitions
//!
//! The static description of a component as produced by the template
//! compiler. Only the type, selectors, bindings and factory matter to the
//! factory pipeline; the remaining fields are carried through to the renderer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::core::{R3CssSelectorList, ViewEncapsulation};

/// Identity of a component type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentType(String);

impl ComponentType {
    pub fn new(name: impl Into<String>) -> Self {
        ComponentType(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A declared input, in either of its two accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputDeclaration {
    /// `prop: 'publicName'`
    Name(String),
    /// `prop: ['attributeOrPublicName', 'name']`
    Aliased(String, String),
}

impl InputDeclaration {
    /// Name under which the input is bound in templates.
    pub fn template_name(&self) -> &str {
        match self {
            InputDeclaration::Name(name) => name,
            InputDeclaration::Aliased(public_name, _) => public_name,
        }
    }
}

impl From<&str> for InputDeclaration {
    fn from(name: &str) -> Self {
        InputDeclaration::Name(name.to_string())
    }
}

impl From<(&str, &str)> for InputDeclaration {
    fn from((public_name, name): (&str, &str)) -> Self {
        InputDeclaration::Aliased(public_name.to_string(), name.to_string())
    }
}

/// A constructed component instance.
pub type ComponentInstance = Box<dyn Any + Send + Sync>;

/// No-arg constructor of a component instance.
pub type FactoryFn = Arc<dyn Fn() -> anyhow::Result<ComponentInstance> + Send + Sync>;

/// Template function, opaque to the factory pipeline.
pub type TemplateFn = Arc<dyn Any + Send + Sync>;

/// Runtime definition of a component.
#[derive(Clone)]
pub struct ComponentDef {
    pub type_: ComponentType,
    pub selectors: R3CssSelectorList,
    pub encapsulation: ViewEncapsulation,
    /// Class property name to declared input, in declaration order.
    pub inputs: IndexMap<String, InputDeclaration>,
    /// Class property name to public event name, in declaration order.
    pub outputs: IndexMap<String, String>,
    pub factory: FactoryFn,
    /// Selectors of the content projection slots, if any are declared.
    pub ng_content_selectors: Option<Vec<String>>,
    pub consts: usize,
    pub vars: usize,
    pub template: Option<TemplateFn>,
    pub styles: Vec<String>,
    pub data: IndexMap<String, serde_json::Value>,
}

impl ComponentDef {
    pub fn builder(type_name: impl Into<String>) -> ComponentDefBuilder {
        ComponentDefBuilder::new(type_name)
    }
}

impl fmt::Debug for ComponentDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDef")
            .field("type_", &self.type_)
            .field("selectors", &self.selectors)
            .field("encapsulation", &self.encapsulation)
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .field("ng_content_selectors", &self.ng_content_selectors)
            .field("consts", &self.consts)
            .field("vars", &self.vars)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ComponentDef`]. Bindings keep the order they are declared in.
pub struct ComponentDefBuilder {
    def: ComponentDef,
}

impl ComponentDefBuilder {
    pub fn new(type_name: impl Into<String>) -> Self {
        ComponentDefBuilder {
            def: ComponentDef {
                type_: ComponentType::new(type_name),
                selectors: Vec::new(),
                encapsulation: ViewEncapsulation::default(),
                inputs: IndexMap::new(),
                outputs: IndexMap::new(),
                factory: Arc::new(|| -> anyhow::Result<ComponentInstance> { Ok(Box::new(())) }),
                ng_content_selectors: None,
                consts: 0,
                vars: 0,
                template: None,
                styles: Vec::new(),
                data: IndexMap::new(),
            },
        }
    }

    /// Adds one selector alternative, e.g. `&["test", "foo"]`.
    pub fn selector(mut self, alternative: &[&str]) -> Self {
        self.def
            .selectors
            .push(alternative.iter().map(|token| token.to_string()).collect());
        self
    }

    pub fn encapsulation(mut self, encapsulation: ViewEncapsulation) -> Self {
        self.def.encapsulation = encapsulation;
        self
    }

    pub fn input(mut self, prop_name: &str, declaration: impl Into<InputDeclaration>) -> Self {
        self.def
            .inputs
            .insert(prop_name.to_string(), declaration.into());
        self
    }

    pub fn output(mut self, prop_name: &str, public_name: &str) -> Self {
        self.def
            .outputs
            .insert(prop_name.to_string(), public_name.to_string());
        self
    }

    /// Sets the constructor; the produced value becomes the component instance.
    pub fn factory<T, F>(mut self, factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> anyhow::Result<T> + Send + Sync + 'static,
    {
        self.def.factory = Arc::new(move || -> anyhow::Result<ComponentInstance> {
            Ok(Box::new(factory()?))
        });
        self
    }

    pub fn ng_content_selectors(mut self, selectors: &[&str]) -> Self {
        self.def.ng_content_selectors =
            Some(selectors.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn consts(mut self, consts: usize) -> Self {
        self.def.consts = consts;
        self
    }

    pub fn vars(mut self, vars: usize) -> Self {
        self.def.vars = vars;
        self
    }

    pub fn template(mut self, template: TemplateFn) -> Self {
        self.def.template = Some(template);
        self
    }

    pub fn style(mut self, style: &str) -> Self {
        self.def.styles.push(style.to_string());
        self
    }

    pub fn data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.def.data.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> ComponentDef {
        self.def
    }
}

/// A Rust type that carries its own component definition.
pub trait Component: Any + Send + Sync {
    /// Type name, also the cache key in a resolver.
    const NAME: &'static str;

    /// Fills in the definition started for [`Self::NAME`].
    fn define(def: ComponentDefBuilder) -> ComponentDefBuilder;

    fn definition() -> ComponentDef {
        Self::define(ComponentDef::builder(Self::NAME)).build()
    }
}
