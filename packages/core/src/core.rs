//! Core Types
//!
//! Runtime enums shared by component definitions, renderers and sanitizers.

use serde::{Deserialize, Serialize};

/// How a component's styles are scoped to its host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ViewEncapsulation {
    #[default]
    Emulated = 0,
    // Historically the 1 value was for `Native` encapsulation (removed in v11)
    None = 2,
    ShadowDom = 3,
}

/// Kind of content handed to a [`Sanitizer`](crate::render3::Sanitizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Ord, PartialOrd)]
#[repr(u8)]
pub enum SecurityContext {
    NONE = 0,
    HTML = 1,
    STYLE = 2,
    SCRIPT = 3,
    URL = 4,
    ResourceUrl = 5,
}

// R3 CSS Selector types: each alternative is an ordered list of tokens
pub type R3CssSelector = Vec<String>;
pub type R3CssSelectorList = Vec<R3CssSelector>;
