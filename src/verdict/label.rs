use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Labels indexed by classifier output
pub const LABELS: [Label; 4] = [Label::Benign, Label::Defacement, Label::Phishing, Label::Malware];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Benign,
    Defacement,
    Phishing,
    Malware,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerdictError {
    #[error("class index {0} is outside 0..=3")]
    IndexOutOfRange(i64),
}

impl Label {
    pub fn from_index(index: i64) -> Result<Self, VerdictError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| LABELS.get(i).copied())
            .ok_or(VerdictError::IndexOutOfRange(index))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Benign => "Benign",
            Label::Defacement => "Defacement",
            Label::Phishing => "Phishing",
            Label::Malware => "Malware",
        }
    }

    pub fn upper(self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
