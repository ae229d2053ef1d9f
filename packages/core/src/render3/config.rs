//! Render3 Runtime Config
//!
//! Process-wide switches for the component runtime.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::Result;

/// Whether extra development checks and warnings are enabled.
static DEV_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_dev_mode(value: bool) {
    DEV_MODE.store(value, Ordering::SeqCst);
}

pub fn is_dev_mode() -> bool {
    DEV_MODE.load(Ordering::SeqCst)
}

/// Serializable form of the runtime switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub dev_mode: bool,
}

impl RuntimeConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Applies the switches process-wide.
    pub fn install(&self) {
        set_dev_mode(self.dev_mode);
    }
}
