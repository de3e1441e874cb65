pub use super::value_objects::{Rgb, Strand};
use serde::{Deserialize, Serialize};

/// Domain entity - the displayed sequence, 1-indexed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    residues: Vec<char>,
}

impl Sequence {
    pub fn new(text: &str) -> Self {
        Self { residues: text.chars().collect() }
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Residue at 1-indexed `position`
    pub fn residue(&self, position: usize) -> Option<char> {
        position.checked_sub(1).and_then(|i| self.residues.get(i)).copied()
    }
}

impl From<&str> for Sequence {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Feature record as handed over by the host page (JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub name: String,
    #[serde(rename = "type", default)]
    pub feature_type: String,
    /// HTML hex code; assigned from the type spectrum when absent
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub strand: Option<i64>,
    pub start: usize,
    pub end: usize,
}

impl FeatureRecord {
    pub fn new(name: &str, feature_type: &str, color: &str, strand: i64, start: usize, end: usize) -> Self {
        Self {
            name: name.to_string(),
            feature_type: feature_type.to_string(),
            color: Some(color.to_string()),
            strand: Some(strand),
            start,
            end,
        }
    }
}

/// Domain entity - an annotated range placed on a display row
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: String,
    pub feature_type: String,
    pub color: Rgb,
    pub strand: Strand,
    /// 1-indexed, inclusive
    pub start: usize,
    /// 1-indexed, inclusive; smaller than `start` for origin-spanning features
    pub end: usize,
    pub row: usize,
}

impl Feature {
    pub fn new(name: &str, feature_type: &str, color: Rgb, strand: Strand, start: usize, end: usize) -> Self {
        Self {
            name: name.to_string(),
            feature_type: feature_type.to_string(),
            color,
            strand,
            start,
            end,
            row: 0,
        }
    }

    /// `end - start`, the sort key for row packing
    pub fn span(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn wraps_origin(&self) -> bool {
        self.start > self.end
    }

    /// Inclusive overlap test against a sequence window.
    pub fn intersects(&self, window_start: i64, window_end: i64) -> bool {
        (self.start as i64) <= window_end && (self.end as i64) >= window_start
    }

    pub fn tooltip(&self) -> String {
        format!(
            "{}: {}\n{}\n[{} - {}]",
            self.feature_type,
            self.name,
            self.strand.arrow(),
            self.start,
            self.end
        )
    }
}
