//! Lexical/structural URL feature extraction.

mod lexical;
mod parse;

pub use lexical::extract;
pub use parse::ParsedUrl;

use serde::{Deserialize, Serialize};

/// Number of features the classifier expects
pub const FEATURE_COUNT: usize = 21;

/// Feature names in model input order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "has_ip_address",
    "abnormal_url",
    "google_index",
    "dot_count",
    "www_count",
    "at_count",
    "directory_count",
    "embedded_domain_count",
    "suspicious_words",
    "shortener",
    "https_count",
    "http_count",
    "percent_count",
    "question_count",
    "hyphen_count",
    "equals_count",
    "url_length",
    "hostname_length",
    "first_directory_length",
    "tld_length",
    "digit_count",
];

/// Fixed-order feature vector. Field order is the model's input order and must not change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureVector {
    /// IPv4 (dotted or hex) literal followed by `/`, or an 8-group IPv6 literal
    pub has_ip_address: u32,
    /// Hostname non-empty and occurring verbatim in the URL
    pub abnormal_url: u32,
    /// Always 1; no index lookup is performed
    pub google_index: u32,
    /// Count of `.` (subdomain proxy)
    pub dot_count: u32,
    pub www_count: u32,
    pub at_count: u32,
    /// Count of `/`
    pub directory_count: u32,
    /// Count of `//`
    pub embedded_domain_count: u32,
    /// Any of paypal/login/bank/bonus, case-insensitive
    pub suspicious_words: u32,
    /// Known shortener service mentioned
    pub shortener: u32,
    pub https_count: u32,
    /// Includes the `http` inside every `https`
    pub http_count: u32,
    pub percent_count: u32,
    pub question_count: u32,
    pub hyphen_count: u32,
    pub equals_count: u32,
    pub url_length: u32,
    pub hostname_length: u32,
    pub first_directory_length: u32,
    pub tld_length: u32,
    pub digit_count: u32,
}

impl FeatureVector {
    /// Values in model input order
    pub fn values(&self) -> [u32; FEATURE_COUNT] {
        [
            self.has_ip_address,
            self.abnormal_url,
            self.google_index,
            self.dot_count,
            self.www_count,
            self.at_count,
            self.directory_count,
            self.embedded_domain_count,
            self.suspicious_words,
            self.shortener,
            self.https_count,
            self.http_count,
            self.percent_count,
            self.question_count,
            self.hyphen_count,
            self.equals_count,
            self.url_length,
            self.hostname_length,
            self.first_directory_length,
            self.tld_length,
            self.digit_count,
        ]
    }

    /// Model input row as f32
    pub fn to_array(&self) -> [f32; FEATURE_COUNT] {
        self.values().map(|v| v as f32)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> {
        FEATURE_NAMES.into_iter().zip(self.values())
    }
}
