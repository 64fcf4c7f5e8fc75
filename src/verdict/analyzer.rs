//! Runs a URL through extraction and the shared classifier, producing a [`Verdict`].

use super::{Label, Verdict, VerdictError};
use crate::features;
use crate::model::{Classifier, ClassifierError};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
    #[error(transparent)]
    Verdict(#[from] VerdictError),
}

#[derive(Clone)]
pub struct UrlAnalyzer {
    classifier: Arc<dyn Classifier>,
}

impl UrlAnalyzer {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    pub fn model_loaded(&self) -> bool {
        self.classifier.is_loaded()
    }

    /// Single-shot classification; no retries.
    pub fn analyze(&self, url: &str) -> Result<Verdict, AnalyzeError> {
        let request_id = Uuid::new_v4().to_string();
        let features = features::extract(url);

        let class_index = self.classifier.predict(&features).map_err(|e| {
            warn!(request_id = %request_id, error = %e, "classifier failed");
            e
        })?;
        let label = Label::from_index(class_index).map_err(|e| {
            warn!(request_id = %request_id, class_index, "classifier returned unknown class");
            e
        })?;

        info!(
            request_id = %request_id,
            url_length = features.url_length,
            class_index,
            label = %label,
            "url classified"
        );
        Ok(Verdict {
            request_id,
            label,
            class_index,
            features,
            ts: Utc::now().timestamp_millis(),
        })
    }
}
