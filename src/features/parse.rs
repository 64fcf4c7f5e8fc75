//! Lenient generic-URI split: scheme, authority, path, params, query, fragment.
//!
//! Deliberately not a WHATWG parser: hosts are not punycoded or percent-decoded
//! and scheme-less input like `www.example.com/x` stays a bare path. The
//! classifier was trained on features derived from this split.

use std::net::Ipv6Addr;

/// Schemes whose last path segment may carry `;params`.
const PARAM_SCHEMES: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    /// Raw authority including userinfo and port
    pub netloc: String,
    /// Lower-cased host without userinfo, port or brackets; empty when absent
    pub hostname: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

impl ParsedUrl {
    /// Split `raw` into its components. Never fails: input whose authority is
    /// malformed (unbalanced or invalid brackets) yields an all-empty value.
    pub fn parse(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or_default()
    }

    fn try_parse(raw: &str) -> Option<Self> {
        let cleaned: String = raw
            .trim_start_matches(|c: char| c <= ' ')
            .chars()
            .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
            .collect();

        let mut rest = cleaned.as_str();
        let mut scheme = String::new();
        if let Some(i) = rest.find(':') {
            let candidate = &rest[..i];
            if candidate.starts_with(|c: char| c.is_ascii_alphabetic())
                && candidate.chars().all(is_scheme_char)
            {
                scheme = candidate.to_ascii_lowercase();
                rest = &rest[i + 1..];
            }
        }

        let mut netloc = "";
        if let Some(after) = rest.strip_prefix("//") {
            let end = after.find(&['/', '?', '#'][..]).unwrap_or(after.len());
            netloc = &after[..end];
            rest = &after[end..];
            if netloc.contains('[') != netloc.contains(']') {
                return None;
            }
            if netloc.contains('[') && !is_valid_bracketed_host(bracketed(netloc)) {
                return None;
            }
        }

        let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
        let (rest, query) = rest.split_once('?').unwrap_or((rest, ""));
        let (path, params) = if PARAM_SCHEMES.contains(&scheme.as_str()) {
            split_params(rest)
        } else {
            (rest, "")
        };
        let hostname = hostname(netloc);

        Some(Self {
            scheme,
            netloc: netloc.to_string(),
            hostname,
            path: path.to_string(),
            params: params.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
        })
    }

    /// Second element of `path` split on `/`, i.e. the first directory name.
    pub fn first_segment(&self) -> Option<&str> {
        self.path.split('/').nth(1)
    }

    /// Text after the last `.` of the hostname; `None` without a hostname.
    pub fn tld(&self) -> Option<&str> {
        if self.hostname.is_empty() {
            return None;
        }
        self.hostname.rsplit('.').next()
    }
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Content between the first `[` and the following `]`.
fn bracketed(netloc: &str) -> &str {
    let inner = netloc.split_once('[').map_or("", |(_, b)| b);
    inner.split_once(']').map_or(inner, |(host, _)| host)
}

/// Bracketed hosts must be IPv6 literals (optionally zoned) or IPvFuture (`vX.…`).
fn is_valid_bracketed_host(host: &str) -> bool {
    if let Some(future) = host.strip_prefix('v') {
        return match future.split_once('.') {
            Some((version, rest)) => {
                !version.is_empty()
                    && version.chars().all(|c| c.is_ascii_hexdigit())
                    && !rest.is_empty()
            }
            None => false,
        };
    }
    let addr = host.split_once('%').map_or(host, |(addr, _)| addr);
    addr.parse::<Ipv6Addr>().is_ok()
}

fn split_params(s: &str) -> (&str, &str) {
    let start = s.rfind('/').unwrap_or(0);
    match s[start..].find(';') {
        Some(i) => (&s[..start + i], &s[start + i + 1..]),
        None => (s, ""),
    }
}

fn hostname(netloc: &str) -> String {
    let hostinfo = netloc.rsplit_once('@').map_or(netloc, |(_, h)| h);
    let host = match hostinfo.split_once('[') {
        Some((_, inner)) => inner.split_once(']').map_or(inner, |(host, _)| host),
        None => hostinfo.split_once(':').map_or(hostinfo, |(host, _)| host),
    };

    // Zone ids keep their case
    match host.split_once('%') {
        Some((addr, zone)) => format!("{}%{}", addr.to_lowercase(), zone),
        None => host.to_lowercase(),
    }
}
