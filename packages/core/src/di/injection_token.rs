//! Injection Tokens

use std::fmt;

/// Identifier used to request a service from an injector scope.
///
/// Tokens compare by name, so two tokens with the same description refer to
/// the same registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InjectionToken {
    desc: &'static str,
}

impl InjectionToken {
    pub const fn new(desc: &'static str) -> Self {
        InjectionToken { desc }
    }

    pub fn desc(&self) -> &'static str {
        self.desc
    }
}

impl fmt::Display for InjectionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InjectionToken {}", self.desc)
    }
}

/// Token under which a [`RendererFactory`](crate::render3::RendererFactory) is provided.
pub const RENDERER_FACTORY: InjectionToken = InjectionToken::new("RendererFactory2");

/// Token under which a [`Sanitizer`](crate::render3::Sanitizer) is provided.
pub const SANITIZER: InjectionToken = InjectionToken::new("Sanitizer");
