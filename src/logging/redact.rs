// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Header redaction for logged copies

use reqwest::header::{HeaderMap, HeaderName};

use crate::error::{Error, Result};

/// Header names hidden from one direction's log output
///
/// Names are normalised by `HeaderName`, so `Authorization` and
/// `authorization` refer to the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderExclusion {
    names: Vec<HeaderName>,
}

impl HeaderExclusion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse header names, failing on the first invalid one
    pub fn parse<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut exclusion = Self::new();
        for name in names {
            let name = name.as_ref();
            let parsed = HeaderName::try_from(name).map_err(|e| {
                Error::invalid_argument("header name", format!("'{}': {}", name, e))
            })?;
            exclusion.insert(parsed);
        }
        Ok(exclusion)
    }

    /// Add a name; duplicates are ignored
    pub fn insert(&mut self, name: HeaderName) {
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    pub fn contains(&self, name: &HeaderName) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderName> {
        self.names.iter()
    }
}

/// Copy `headers` without any value of an excluded name
///
/// `headers` is left untouched. Every occurrence of a multi-valued header is
/// removed, not just the first.
pub fn redact_headers(headers: &HeaderMap, exclusion: &HeaderExclusion) -> HeaderMap {
    let mut redacted = headers.clone();
    for name in exclusion.iter() {
        redacted.remove(name);
    }
    redacted
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn sample() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("secret"));
        headers.insert("accept", HeaderValue::from_static("*/*"));
        headers.append("set-cookie", HeaderValue::from_static("a=1"));
        headers.append("set-cookie", HeaderValue::from_static("b=2"));
        headers.insert("x-trace", HeaderValue::from_static("abc"));
        headers
    }

    #[test]
    fn test_redaction_leaves_input_alone() {
        let headers = sample();
        let exclusion = HeaderExclusion::parse(["Authorization"]).unwrap();

        let redacted = redact_headers(&headers, &exclusion);

        assert!(redacted.get("authorization").is_none());
        assert_eq!(redacted.get("accept").unwrap(), "*/*");
        assert_eq!(headers.get("authorization").unwrap(), "secret");
        assert_eq!(headers.len(), 5);
    }

    #[test]
    fn test_removes_every_value_of_a_name() {
        let exclusion = HeaderExclusion::parse(["set-cookie"]).unwrap();
        let redacted = redact_headers(&sample(), &exclusion);

        assert_eq!(redacted.get_all("set-cookie").iter().count(), 0);
        assert_eq!(redacted.len(), 3);
    }

    #[test]
    fn test_empty_exclusion_is_a_copy() {
        let headers = sample();
        assert_eq!(redact_headers(&headers, &HeaderExclusion::new()), headers);
    }

    #[test]
    fn test_split_redaction_matches_single_pass() {
        let headers = sample();
        let ab = HeaderExclusion::parse(["authorization", "set-cookie"]).unwrap();
        let c = HeaderExclusion::parse(["x-trace"]).unwrap();
        let abc = HeaderExclusion::parse(["x-trace", "set-cookie", "authorization"]).unwrap();

        let stepwise = redact_headers(&redact_headers(&headers, &ab), &c);
        let single = redact_headers(&headers, &abc);
        assert_eq!(stepwise, single);

        // idempotent
        assert_eq!(redact_headers(&single, &abc), single);
    }

    #[test]
    fn test_parse_rejects_invalid_name() {
        let err = HeaderExclusion::parse(["ok", "not valid"]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_parse_dedups_case_variants() {
        let exclusion = HeaderExclusion::parse(["Accept", "accept", "ACCEPT"]).unwrap();
        assert_eq!(exclusion.len(), 1);
        assert!(exclusion.contains(&HeaderName::from_static("accept")));
    }
}
