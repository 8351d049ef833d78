//! Signal mapping matrix.
//!
//! Maps signal paths to per-offering multipliers. The matrix is authored as a
//! flat list of rows in the content file and indexed by signal path here.
//! Lookups for unknown paths return a zero row so scoring degrades instead of
//! failing.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::overrides::MatrixPatch;

/// The four offerings every sub-scenario is scored against.
///
/// `ALL` fixes the canonical order. Score rankings are built in this order
/// and sorted with a stable sort, so equal scores keep it as the tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfferingName {
    Data,
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "AMM")]
    Amm,
    #[serde(rename = "DPDE")]
    Dpde,
}

impl OfferingName {
    /// Canonical ordering of all offerings.
    pub const ALL: [OfferingName; 4] = [
        OfferingName::Data,
        OfferingName::Ai,
        OfferingName::Amm,
        OfferingName::Dpde,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OfferingName::Data => "Data",
            OfferingName::Ai => "AI",
            OfferingName::Amm => "AMM",
            OfferingName::Dpde => "DPDE",
        }
    }
}

impl fmt::Display for OfferingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One authored matrix row as it appears in the content file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalOfferingMapping {
    pub signal_path: String,
    #[serde(rename = "Data")]
    pub data: u32,
    #[serde(rename = "AI")]
    pub ai: u32,
    #[serde(rename = "AMM")]
    pub amm: u32,
    #[serde(rename = "DPDE")]
    pub dpde: u32,
}

/// Per-offering multipliers for a single signal path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiplierRow {
    pub data: u32,
    pub ai: u32,
    pub amm: u32,
    pub dpde: u32,
}

impl MultiplierRow {
    pub fn get(&self, offering: OfferingName) -> u32 {
        match offering {
            OfferingName::Data => self.data,
            OfferingName::Ai => self.ai,
            OfferingName::Amm => self.amm,
            OfferingName::Dpde => self.dpde,
        }
    }
}

impl From<&SignalOfferingMapping> for MultiplierRow {
    fn from(row: &SignalOfferingMapping) -> Self {
        MultiplierRow {
            data: row.data,
            ai: row.ai,
            amm: row.amm,
            dpde: row.dpde,
        }
    }
}

/// Signal path to multiplier index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalMatrix {
    rows: HashMap<String, MultiplierRow>,
}

impl SignalMatrix {
    /// Builds the index from authored rows. Later duplicates win.
    pub fn from_rows(rows: &[SignalOfferingMapping]) -> Self {
        let rows = rows
            .iter()
            .map(|row| (row.signal_path.clone(), MultiplierRow::from(row)))
            .collect();
        SignalMatrix { rows }
    }

    /// Multipliers for a signal path. Unknown paths yield the zero row,
    /// which contributes nothing to any offering.
    pub fn row(&self, signal_path: &str) -> MultiplierRow {
        self.rows.get(signal_path).copied().unwrap_or_default()
    }

    pub fn contains(&self, signal_path: &str) -> bool {
        self.rows.contains_key(signal_path)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates rows in arbitrary order. Callers that need a stable order
    /// (the matrix command does) sort the result themselves.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MultiplierRow)> {
        self.rows.iter().map(|(path, row)| (path.as_str(), row))
    }

    /// Returns a copy with patches applied per signal path. Patches for
    /// paths the matrix does not contain are logged and skipped.
    pub fn merged(&self, patches: &HashMap<String, MatrixPatch>) -> SignalMatrix {
        let mut merged = self.clone();
        for (path, patch) in patches {
            match merged.rows.get_mut(path) {
                Some(row) => {
                    if let Some(data) = patch.data {
                        row.data = data;
                    }
                    if let Some(ai) = patch.ai {
                        row.ai = ai;
                    }
                    if let Some(amm) = patch.amm {
                        row.amm = amm;
                    }
                    if let Some(dpde) = patch.dpde {
                        row.dpde = dpde;
                    }
                }
                None => {
                    warn!("Matrix patch for unknown signal path: {}", path);
                }
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<SignalOfferingMapping> {
        vec![
            SignalOfferingMapping {
                signal_path: "Data Platform Modernization".to_string(),
                data: 3,
                ai: 1,
                amm: 0,
                dpde: 0,
            },
            SignalOfferingMapping {
                signal_path: "App Modernization".to_string(),
                data: 0,
                ai: 0,
                amm: 3,
                dpde: 0,
            },
        ]
    }

    #[test]
    fn test_row_lookup() {
        let matrix = SignalMatrix::from_rows(&sample_rows());
        let row = matrix.row("Data Platform Modernization");
        assert_eq!(row.get(OfferingName::Data), 3);
        assert_eq!(row.get(OfferingName::Ai), 1);
        assert_eq!(row.get(OfferingName::Amm), 0);
    }

    #[test]
    fn test_unknown_path_yields_zero_row() {
        let matrix = SignalMatrix::from_rows(&sample_rows());
        assert_eq!(matrix.row("No Such Path"), MultiplierRow::default());
        assert!(!matrix.contains("No Such Path"));
    }

    #[test]
    fn test_merged_applies_known_patch() {
        let matrix = SignalMatrix::from_rows(&sample_rows());
        let mut patches = HashMap::new();
        patches.insert(
            "App Modernization".to_string(),
            MatrixPatch {
                amm: Some(2),
                dpde: Some(1),
                ..MatrixPatch::default()
            },
        );
        let merged = matrix.merged(&patches);
        let row = merged.row("App Modernization");
        assert_eq!(row.amm, 2);
        assert_eq!(row.dpde, 1);
        // Untouched fields keep their authored values.
        assert_eq!(row.data, 0);
    }

    #[test]
    fn test_merged_ignores_unknown_path() {
        let matrix = SignalMatrix::from_rows(&sample_rows());
        let mut patches = HashMap::new();
        patches.insert(
            "Ghost Path".to_string(),
            MatrixPatch {
                data: Some(9),
                ..MatrixPatch::default()
            },
        );
        let merged = matrix.merged(&patches);
        assert_eq!(merged.len(), matrix.len());
        assert!(!merged.contains("Ghost Path"));
    }
}
