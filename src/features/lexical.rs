//! Lexical feature extraction: raw URL string → fixed 21-slot vector.

use super::parse::ParsedUrl;
use super::FeatureVector;
use once_cell::sync::Lazy;
use regex::Regex;

/// Dotted-quad or hex-octet IPv4 literal followed by `/`, or a full 8-group IPv6 literal.
static IP_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(([01]?\d\d?|2[0-4]\d|25[0-5])\.([01]?\d\d?|2[0-4]\d|25[0-5])\.",
        r"([01]?\d\d?|2[0-4]\d|25[0-5])\.([01]?\d\d?|2[0-4]\d|25[0-5])/)|",
        r"((0x[0-9a-fA-F]{1,2})\.(0x[0-9a-fA-F]{1,2})\.(0x[0-9a-fA-F]{1,2})\.(0x[0-9a-fA-F]{1,2})/)|",
        r"(?:[a-fA-F0-9]{1,4}:){7}[a-fA-F0-9]{1,4}",
    ))
    .expect("ip address pattern")
});

// Dots are unescaped on purpose: `bitxly` matches too.
static SHORTENER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"bit.ly|goo.gl|tinyurl|ow.ly").expect("shortener pattern"));

/// Characters with Unicode Numeric_Type Decimal (`\d`) or Digit: superscripts,
/// subscripts, circled/parenthesized digits and a few historic scripts.
static DIGIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"[\d\x{00B2}\x{00B3}\x{00B9}\x{1369}-\x{1371}\x{19DA}\x{2070}\x{2074}-\x{2079}",
        r"\x{2080}-\x{2089}\x{2460}-\x{2468}\x{2474}-\x{247C}\x{2488}-\x{2490}\x{24EA}",
        r"\x{24F5}-\x{24FD}\x{24FF}\x{2776}-\x{277E}\x{2780}-\x{2788}\x{278A}-\x{2792}",
        r"\x{10A40}-\x{10A43}\x{10E60}-\x{10E68}\x{11052}-\x{1105A}\x{1E8C7}-\x{1E8CF}",
        r"\x{1F100}-\x{1F10A}]",
    ))
    .expect("digit pattern")
});

static SUSPICIOUS_WORDS: &[&str] = &["paypal", "login", "bank", "bonus"];

/// Build the feature vector for `url`. Total over all strings, no I/O.
pub fn extract(url: &str) -> FeatureVector {
    let parsed = ParsedUrl::parse(url);
    let hostname = parsed.hostname.as_str();
    let lower = url.to_lowercase();

    FeatureVector {
        has_ip_address: flag(IP_ADDRESS.is_match(url)),
        // Always true once a hostname was parsed out of `url`; kept as trained.
        abnormal_url: flag(!hostname.is_empty() && url.contains(hostname)),
        google_index: 1,
        dot_count: occurrences(url, "."),
        www_count: occurrences(url, "www"),
        at_count: occurrences(url, "@"),
        directory_count: occurrences(url, "/"),
        embedded_domain_count: occurrences(url, "//"),
        suspicious_words: flag(SUSPICIOUS_WORDS.iter().any(|w| lower.contains(w))),
        shortener: flag(SHORTENER.is_match(url)),
        https_count: occurrences(url, "https"),
        http_count: occurrences(url, "http"),
        percent_count: occurrences(url, "%"),
        question_count: occurrences(url, "?"),
        hyphen_count: occurrences(url, "-"),
        equals_count: occurrences(url, "="),
        url_length: char_len(url),
        hostname_length: char_len(hostname),
        first_directory_length: parsed.first_segment().map_or(0, char_len),
        tld_length: parsed.tld().map_or(0, char_len),
        digit_count: saturate(DIGIT.find_iter(url).count()),
    }
}

fn flag(b: bool) -> u32 {
    u32::from(b)
}

/// Non-overlapping occurrences of `needle`.
fn occurrences(haystack: &str, needle: &str) -> u32 {
    saturate(haystack.matches(needle).count())
}

fn char_len(s: &str) -> u32 {
    saturate(s.chars().count())
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
