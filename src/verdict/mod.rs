//! Class index → label mapping and the extract → predict → label pipeline.

mod analyzer;
mod label;

pub use analyzer::{AnalyzeError, UrlAnalyzer};
pub use label::{Label, VerdictError, LABELS};

use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};

/// Classification outcome for a single URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub request_id: String,
    pub label: Label,
    pub class_index: i64,
    pub features: FeatureVector,
    pub ts: i64,
}

impl Verdict {
    /// Human-readable line shown on the result page
    pub fn message(&self) -> String {
        format!("The URL is classified as: {}", self.label.upper())
    }
}
