//! ONNX Runtime inference for URL class. Input: [1, 21] f32, Output 0: class label tensor.
//! Uses `ort`; if the model file is missing the classifier is inert and every
//! prediction fails with [`ClassifierError::NotLoaded`].

use super::{Classifier, ClassifierError};
use crate::features::{FeatureVector, FEATURE_COUNT};
use ndarray::Array2;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::{DynValue, Tensor};
use std::path::Path;
use std::sync::Mutex;

pub struct OnnxClassifier {
    session: Option<Mutex<Session>>,
}

impl OnnxClassifier {
    /// Load model from path. If the path is missing, the classifier is inert.
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "ONNX model not found; classification disabled");
            return Ok(Self::inert());
        }

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level1)?
            .commit_from_file(path)?;

        tracing::info!(path = %path.display(), "ONNX model loaded");
        Ok(Self {
            session: Some(Mutex::new(session)),
        })
    }

    /// Classifier with no backing model
    pub fn inert() -> Self {
        Self { session: None }
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ClassifierError> {
        let Some(ref session) = self.session else {
            return Err(ClassifierError::NotLoaded);
        };

        let row = Array2::from_shape_vec((1, FEATURE_COUNT), features.to_array().to_vec())
            .map_err(|e| ClassifierError::Input(e.to_string()))?;
        let input = Tensor::from_array(row)?;

        let mut session = session.lock().map_err(|_| ClassifierError::Poisoned)?;
        let outputs = session.run(ort::inputs![input])?;
        if outputs.len() == 0 {
            return Err(ClassifierError::UnexpectedOutput(
                "model produced no outputs".into(),
            ));
        }
        first_label(&outputs[0])
    }

    fn is_loaded(&self) -> bool {
        self.session.is_some()
    }
}

/// Read the first element of a label tensor: int64 labels, or whole-number float labels.
fn first_label(out: &DynValue) -> Result<i64, ClassifierError> {
    if let Ok((_, labels)) = out.try_extract_tensor::<i64>() {
        return labels
            .first()
            .copied()
            .ok_or_else(|| ClassifierError::UnexpectedOutput("empty label tensor".into()));
    }

    let (_, labels) = out.try_extract_tensor::<f32>()?;
    let value = labels
        .first()
        .copied()
        .ok_or_else(|| ClassifierError::UnexpectedOutput("empty label tensor".into()))?;
    if value.fract() != 0.0 || !value.is_finite() {
        return Err(ClassifierError::UnexpectedOutput(format!(
            "non-integral label {value}"
        )));
    }
    Ok(value as i64)
}
