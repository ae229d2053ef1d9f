//! Factory Contract Normalization
//!
//! Turns a [`ComponentDef`] into the public description exposed by its
//! factory: primary selector, content projection selectors and the ordered
//! input/output binding pairs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::definition::{ComponentDef, ComponentType, InputDeclaration};
use crate::error::{FactoryError, Result};

/// A class property paired with the name it is bound under in templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyBinding {
    pub prop_name: String,
    pub template_name: String,
}

impl PropertyBinding {
    pub fn new(prop_name: impl Into<String>, template_name: impl Into<String>) -> Self {
        PropertyBinding {
            prop_name: prop_name.into(),
            template_name: template_name.into(),
        }
    }
}

/// Normalized, immutable public contract of a component type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentFactoryContract {
    pub component_type: ComponentType,
    pub selector: String,
    pub ng_content_selectors: Vec<String>,
    pub inputs: Vec<PropertyBinding>,
    pub outputs: Vec<PropertyBinding>,
}

/// Builds the public contract of `def`.
///
/// Only the first token of the first selector alternative is exposed; the
/// remaining tokens and alternatives stay internal to the definition. The
/// token may be empty: attribute-only selectors such as `[appFoo]` arrive as
/// `['', 'appFoo', '']`.
pub fn normalize(def: &ComponentDef) -> Result<ComponentFactoryContract> {
    if def.type_.name().is_empty() {
        return Err(FactoryError::MissingComponentType);
    }
    let component = def.type_.name().to_string();
    let first = def
        .selectors
        .first()
        .ok_or_else(|| FactoryError::EmptySelectors {
            component: component.clone(),
        })?;
    let selector = match first.first() {
        Some(token) => token.clone(),
        None => return Err(FactoryError::EmptySelectorAlternative { component }),
    };

    Ok(ComponentFactoryContract {
        component_type: def.type_.clone(),
        selector,
        ng_content_selectors: def.ng_content_selectors.clone().unwrap_or_default(),
        inputs: to_ref_array(&def.inputs, InputDeclaration::template_name),
        outputs: to_ref_array(&def.outputs, String::as_str),
    })
}

/// Flattens a binding map into `{propName, templateName}` pairs in map order.
pub fn to_ref_array<V>(map: &IndexMap<String, V>, template_name: fn(&V) -> &str) -> Vec<PropertyBinding> {
    map.iter()
        .map(|(prop_name, value)| PropertyBinding::new(prop_name.as_str(), template_name(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_missing_type() {
        let def = ComponentDef::builder("").selector(&["cmp"]).build();
        assert!(matches!(normalize(&def), Err(FactoryError::MissingComponentType)));
    }

    #[test]
    fn should_reject_empty_selectors() {
        let def = ComponentDef::builder("Cmp").build();
        let err = normalize(&def).unwrap_err();
        assert_eq!(err.to_string(), "component `Cmp` declares no selectors");
    }

    #[test]
    fn should_reject_empty_first_alternative() {
        let def = ComponentDef::builder("Cmp").selector(&[]).selector(&["cmp"]).build();
        assert!(matches!(
            normalize(&def),
            Err(FactoryError::EmptySelectorAlternative { .. })
        ));
    }

    #[test]
    fn should_accept_attribute_only_selector() {
        let def = ComponentDef::builder("AttrCmp")
            .selector(&["", "appFoo", ""])
            .build();
        assert_eq!(normalize(&def).unwrap().selector, "");
    }

    #[test]
    fn should_serialize_contract_in_camel_case() {
        let def = ComponentDef::builder("Cmp")
            .selector(&["cmp"])
            .input("value", "value")
            .build();
        let json = serde_json::to_value(normalize(&def).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "componentType": "Cmp",
                "selector": "cmp",
                "ngContentSelectors": [],
                "inputs": [{"propName": "value", "templateName": "value"}],
                "outputs": [],
            })
        );
    }
}
