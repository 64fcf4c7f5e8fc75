//! Classifier collaborator: FeatureVector → class index.

mod onnx;

pub use onnx::OnnxClassifier;

use crate::features::FeatureVector;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier model is not loaded")]
    NotLoaded,
    #[error("invalid model input: {0}")]
    Input(String),
    #[error("onnx runtime error: {0}")]
    Runtime(#[from] ort::Error),
    #[error("classifier session lock poisoned")]
    Poisoned,
    #[error("unexpected model output: {0}")]
    UnexpectedOutput(String),
}

/// Opaque pre-trained multi-class model. Loaded once, shared read-only.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ClassifierError>;

    /// Whether a model artifact backs this classifier
    fn is_loaded(&self) -> bool {
        true
    }
}
