//! URL Sentinel — lexical URL classification service.
//!
//! Modular structure:
//! - [`features`] — URL parsing and the 21-feature lexical vector
//! - [`model`] — Classifier seam and ONNX inference
//! - [`verdict`] — Class index → label, extract/predict/label pipeline
//! - [`server`] — HTTP form and JSON endpoints
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod features;
pub mod logging;
pub mod model;
pub mod server;
pub mod verdict;

pub use config::AppConfig;
pub use features::{extract, FeatureVector};
pub use logging::StructuredLogger;
pub use model::{Classifier, OnnxClassifier};
pub use verdict::{Label, UrlAnalyzer, Verdict};
