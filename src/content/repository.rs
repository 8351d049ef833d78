//! Content loading and lookup.
//!
//! The crate ships a builtin content set and contextual file compiled in via
//! `include_str!`. Operators can point the shell at replacement files; both
//! paths go through the same serde parse, so a malformed file fails loudly
//! at the boundary instead of surfacing mid-session.

use std::path::Path;

use crate::content::types::{ContentSet, ContextualContentFile, Scenario};
use crate::error::{NavigatorError, Result};
use crate::matrix::SignalMatrix;

const BUILTIN_CONTENT: &str = include_str!("../../data/content.json");
const BUILTIN_CONTEXTUAL: &str = include_str!("../../data/contextual.json");

/// Holds the authored content set and contextual file for one kiosk.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    content: ContentSet,
    contextual: ContextualContentFile,
}

impl ContentRepository {
    /// The content shipped with the crate.
    ///
    /// The builtin documents are validated by tests, so a parse failure here
    /// is a packaging defect and is surfaced as a hard error.
    pub fn builtin() -> Result<Self> {
        let content: ContentSet = serde_json::from_str(BUILTIN_CONTENT)?;
        let contextual: ContextualContentFile = serde_json::from_str(BUILTIN_CONTEXTUAL)?;
        Ok(ContentRepository {
            content,
            contextual,
        })
    }

    /// Loads a content set from a file, with the builtin contextual file.
    pub fn load(content_path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(content_path)?;
        let content: ContentSet = serde_json::from_str(&text)?;
        let contextual: ContextualContentFile = serde_json::from_str(BUILTIN_CONTEXTUAL)?;
        Ok(ContentRepository {
            content,
            contextual,
        })
    }

    /// Loads a contextual file from disk, replacing the current one.
    pub fn with_contextual_file(mut self, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        self.contextual = serde_json::from_str(&text)?;
        Ok(self)
    }

    pub fn from_parts(content: ContentSet, contextual: ContextualContentFile) -> Self {
        ContentRepository {
            content,
            contextual,
        }
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.content.scenarios
    }

    pub fn scenario(&self, id: &str) -> Result<&Scenario> {
        self.content
            .scenarios
            .iter()
            .find(|scenario| scenario.id == id)
            .ok_or_else(|| NavigatorError::UnknownId {
                kind: "scenario",
                id: id.to_string(),
            })
    }

    pub fn content(&self) -> &ContentSet {
        &self.content
    }

    /// Builds the signal matrix index from the authored rows.
    pub fn matrix(&self) -> SignalMatrix {
        SignalMatrix::from_rows(&self.content.signal_mapping_matrix)
    }

    pub fn contextual(&self) -> &ContextualContentFile {
        &self.contextual
    }
}
