// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Log verbosity levels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How much of each call gets logged
///
/// Levels are ordered by verbosity, and each level includes everything the
/// level below it logs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging at all
    #[default]
    None,
    /// Request and response summary lines
    Basic,
    /// Summary lines plus every header
    Headers,
    /// Summary, headers and text bodies
    Body,
}

impl LogLevel {
    /// Whether header lines are emitted at this level
    pub fn logs_headers(self) -> bool {
        self >= LogLevel::Headers
    }

    /// Whether body content is emitted at this level
    pub fn logs_body(self) -> bool {
        self == LogLevel::Body
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::None => "none",
            LogLevel::Basic => "basic",
            LogLevel::Headers => "headers",
            LogLevel::Body => "body",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(LogLevel::None),
            "basic" => Ok(LogLevel::Basic),
            "headers" => Ok(LogLevel::Headers),
            "body" => Ok(LogLevel::Body),
            other => Err(Error::invalid_argument(
                "level",
                format!("unknown log level '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(LogLevel::None < LogLevel::Basic);
        assert!(LogLevel::Basic < LogLevel::Headers);
        assert!(LogLevel::Headers < LogLevel::Body);
        assert_eq!(LogLevel::default(), LogLevel::None);
    }

    #[test]
    fn test_detail_flags() {
        assert!(!LogLevel::Basic.logs_headers());
        assert!(!LogLevel::Basic.logs_body());
        assert!(LogLevel::Headers.logs_headers());
        assert!(!LogLevel::Headers.logs_body());
        assert!(LogLevel::Body.logs_headers());
        assert!(LogLevel::Body.logs_body());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("BODY".parse::<LogLevel>().unwrap(), LogLevel::Body);
        assert_eq!(" headers ".parse::<LogLevel>().unwrap(), LogLevel::Headers);
        assert!("verbose".parse::<LogLevel>().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_serde_names() {
        let level: LogLevel = serde_json::from_str("\"basic\"").unwrap();
        assert_eq!(level, LogLevel::Basic);
        assert_eq!(serde_json::to_string(&LogLevel::Body).unwrap(), "\"body\"");
    }
}
