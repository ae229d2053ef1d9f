//! Sanitizer Interface

use std::sync::Arc;

use crate::core::SecurityContext;
use crate::di::{FromService, InjectionToken, ServiceValue};
use crate::error::{FactoryError, Result};

/// Filters untrusted values before they reach the renderer.
pub trait Sanitizer: Send + Sync {
    fn sanitize(&self, context: SecurityContext, value: &str) -> Option<String>;
}

/// A registered null means the component renders without a sanitizer.
impl FromService for Option<Arc<dyn Sanitizer>> {
    fn from_service(token: &InjectionToken, value: ServiceValue) -> Result<Self> {
        if value.is_null() {
            return Ok(None);
        }
        value
            .downcast_ref::<Arc<dyn Sanitizer>>()
            .cloned()
            .map(Some)
            .ok_or(FactoryError::InvalidServiceShape {
                token: token.desc(),
                expected: "sanitizer",
            })
    }
}
