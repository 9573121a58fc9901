use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{FolioError, FolioResult};
use crate::page::event::PageEvent;

/// One scripted event.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptStep {
    /// Virtual time at which the event is dispatched.
    pub at_ms: u64,
    pub event: PageEvent,
}

/// Timed event list, kept sorted by time. Steps sharing a time keep their file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    steps: Vec<ScriptStep>,
}

impl Script {
    pub fn new(mut steps: Vec<ScriptStep>) -> Self {
        steps.sort_by_key(|s| s.at_ms);
        Self { steps }
    }

    /// Parse a JSON array of steps.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        let steps: Vec<ScriptStep> = serde_json::from_reader(r)
            .map_err(|e| FolioError::serde(format!("parse script JSON: {e}")))?;
        Ok(Self::new(steps))
    }

    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::validation(format!("open script JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/script.rs"]
mod tests;
