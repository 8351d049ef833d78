//! The persisted override record and its storage boundary.
//!
//! One JSON document holds every admin edit for a kiosk: label overrides,
//! scenario patches, matrix patches, and numeric config overrides. The
//! document format matches the kiosk's import/export files, so a record
//! exported on one machine imports on another unchanged.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::overrides::patch::{MatrixPatch, ScenarioPatch};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideRecord {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub scenarios: HashMap<String, ScenarioPatch>,
    #[serde(default, rename = "signalMappingMatrix", skip_serializing_if = "HashMap::is_empty")]
    pub signal_matrix: HashMap<String, MatrixPatch>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub config: HashMap<String, f64>,
}

impl OverrideRecord {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
            && self.scenarios.is_empty()
            && self.signal_matrix.is_empty()
            && self.config.is_empty()
    }

    /// Total number of leaf edits, shown by the admin surface.
    pub fn change_count(&self) -> usize {
        self.labels.len()
            + self
                .scenarios
                .values()
                .map(ScenarioPatch::change_count)
                .sum::<usize>()
            + self
                .signal_matrix
                .values()
                .map(MatrixPatch::change_count)
                .sum::<usize>()
            + self.config.len()
    }

    pub fn scenario_patch(&self, id: &str) -> Option<&ScenarioPatch> {
        self.scenarios.get(id)
    }
}

/// Storage boundary for the override record.
///
/// The core only ever sees a well-formed record; implementations reject
/// malformed input at load time.
pub trait OverrideStore {
    fn load(&self) -> Result<OverrideRecord>;
    fn save(&self, record: &OverrideRecord) -> Result<()>;
}

/// File-backed store over a single pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl OverrideStore for JsonFileStore {
    /// A missing file is a kiosk with no admin edits yet, not an error.
    fn load(&self) -> Result<OverrideRecord> {
        if !self.path.exists() {
            return Ok(OverrideRecord::default());
        }
        let text = std::fs::read_to_string(&self.path)?;
        let record = serde_json::from_str(&text)?;
        Ok(record)
    }

    fn save(&self, record: &OverrideRecord) -> Result<()> {
        let text = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Date-stamped default filename for override exports.
pub fn default_export_name() -> String {
    format!("navigator-config-{}.json", chrono::Local::now().format("%Y-%m-%d"))
}
