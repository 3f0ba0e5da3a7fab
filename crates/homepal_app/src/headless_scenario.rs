//! Scenario definition for headless splash diagnostics.
//!
//! ```json
//! { "steps": [
//!     { "type": "wait", "ms": 1400 },
//!     { "type": "assert_channel", "channel": "scale", "value": 1.3 },
//!     { "type": "unmount" }
//! ] }
//! ```

use crate::splash::{ShapeKind, SplashChannel};
use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Sequence of headless diagnostic steps.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

fn default_tolerance() -> f32 {
    0.01
}

/// One scenario step.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Advance logical time by `ms`, one tick at a time
    Wait { ms: u64 },
    /// Advance by whole frames
    Tick { frames: u32 },
    /// Report a new window size to the mounted screen
    Resize { width: u32, height: u32 },
    /// Tear the splash down
    Unmount,
    AssertChannel {
        channel: SplashChannel,
        value: f32,
        #[serde(default = "default_tolerance")]
        tolerance: f32,
    },
    AssertShape { kind: ShapeKind },
    AssertCompleted { completed: bool },
}
