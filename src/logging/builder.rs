// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Interceptor builder and config file format

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::interceptor::HttpLoggingInterceptor;
use super::level::LogLevel;
use super::logger::{BuiltInLogger, Logger};
use super::redact::HeaderExclusion;
use crate::error::{Error, Result};

/// Fluent builder for [`HttpLoggingInterceptor`]
///
/// Setters that take fallible input check it at once and return the error
/// there instead of at [`Builder::build`].
#[derive(Clone, Default)]
pub struct Builder {
    level: Option<LogLevel>,
    logger: Option<Arc<dyn Logger>>,
    skip_urls: Vec<String>,
    exclude_request_headers: HeaderExclusion,
    exclude_response_headers: HeaderExclusion,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_log_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Replace the URL substrings whose calls are never logged
    pub fn set_skip_urls<I, S>(mut self, urls: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut patterns = Vec::new();
        for url in urls {
            let url = url.into();
            if url.is_empty() {
                return Err(Error::invalid_argument(
                    "skip_urls",
                    "an empty pattern would match every URL",
                ));
            }
            patterns.push(url);
        }
        self.skip_urls = patterns;
        Ok(self)
    }

    /// Replace the header names hidden from request and response logs
    pub fn set_exclusive_headers<I, S, J, T>(mut self, request: I, response: J) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        J: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.exclude_request_headers = HeaderExclusion::parse(request)?;
        self.exclude_response_headers = HeaderExclusion::parse(response)?;
        Ok(self)
    }

    pub fn set_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Level defaults to [`LogLevel::None`], logger to [`BuiltInLogger`]
    pub fn build(self) -> HttpLoggingInterceptor {
        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(BuiltInLogger::new()));

        HttpLoggingInterceptor::new(
            self.level.unwrap_or_default(),
            logger,
            self.skip_urls,
            self.exclude_request_headers,
            self.exclude_response_headers,
        )
    }
}

/// Interceptor settings as loaded from a JSON file
///
/// ```json
/// {
///   "level": "headers",
///   "skip_urls": ["/health"],
///   "exclude_request_headers": ["authorization"],
///   "exclude_response_headers": ["set-cookie"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub skip_urls: Vec<String>,
    pub exclude_request_headers: Vec<String>,
    pub exclude_response_headers: Vec<String>,
}

impl LoggingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Validate every field and load them into a builder
    pub fn to_builder(&self) -> Result<Builder> {
        Builder::new()
            .set_log_level(self.level)
            .set_skip_urls(self.skip_urls.iter().cloned())?
            .set_exclusive_headers(&self.exclude_request_headers, &self.exclude_response_headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_build_defaults() {
        let logging = Builder::new().build();
        assert_eq!(logging.level(), LogLevel::None);
        assert!(logging.skip_urls().is_empty());
    }

    #[test]
    fn test_setters_fail_fast() {
        let err = Builder::new().set_skip_urls(["/ok", ""]).err().unwrap();
        assert!(err.is_invalid_argument());

        let err = Builder::new()
            .set_exclusive_headers(["authorization"], ["bad name"])
            .err()
            .unwrap();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_setters_replace_previous_values() {
        let logging = Builder::new()
            .set_skip_urls(["/a"])
            .unwrap()
            .set_skip_urls(["/b"])
            .unwrap()
            .set_exclusive_headers(["x-one"], Vec::<String>::new())
            .unwrap()
            .build();

        assert_eq!(logging.skip_urls(), ["/b".to_string()]);
        assert_eq!(logging.excluded_request_headers().len(), 1);
        assert!(logging.excluded_response_headers().is_empty());
    }

    #[test]
    fn test_config_from_json() {
        let config = LoggingConfig::from_json_str(
            r#"{"level": "headers", "skip_urls": ["/health"], "exclude_request_headers": ["Authorization"]}"#,
        )
        .unwrap();

        assert_eq!(config.level, LogLevel::Headers);
        assert!(config.exclude_response_headers.is_empty());

        let logging = HttpLoggingInterceptor::from_config(&config, None).unwrap();
        assert_eq!(logging.level(), LogLevel::Headers);
        assert!(logging.is_skipped("https://example.com/health"));
        assert_eq!(logging.excluded_request_headers().len(), 1);
    }

    #[test]
    fn test_config_rejects_unknown_fields_and_bad_values() {
        assert!(LoggingConfig::from_json_str(r#"{"lvl": "body"}"#).is_err());

        let config = LoggingConfig {
            exclude_response_headers: vec!["no spaces allowed".to_string()],
            ..Default::default()
        };
        let err = HttpLoggingInterceptor::from_config(&config, None).err().unwrap();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"level": "body", "skip_urls": ["/static/"]}}"#).unwrap();

        let config = LoggingConfig::from_file(file.path()).unwrap();
        assert_eq!(config.level, LogLevel::Body);
        assert_eq!(config.skip_urls, vec!["/static/".to_string()]);
    }
}
