//! Supported coding platforms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A platform we can fetch profiles from or track contests for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Codeforces,
    Leetcode,
    Codechef,
}

/// Raised when a caller names a platform outside the supported set.
#[derive(Debug, Error)]
#[error("unsupported platform: {0}")]
pub struct UnsupportedPlatform(pub String);

impl Platform {
    pub const ALL: [Platform; 3] = [
        Platform::Codeforces,
        Platform::Leetcode,
        Platform::Codechef,
    ];

    /// Capitalized name for user-facing text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Codeforces => "Codeforces",
            Platform::Leetcode => "LeetCode",
            Platform::Codechef => "CodeChef",
        }
    }
}

impl FromStr for Platform {
    type Err = UnsupportedPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "codeforces" => Ok(Platform::Codeforces),
            "leetcode" => Ok(Platform::Leetcode),
            "codechef" => Ok(Platform::Codechef),
            other => Err(UnsupportedPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Codeforces => write!(f, "codeforces"),
            Platform::Leetcode => write!(f, "leetcode"),
            Platform::Codechef => write!(f, "codechef"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Codeforces".parse::<Platform>().unwrap(), Platform::Codeforces);
        assert_eq!("LEETCODE".parse::<Platform>().unwrap(), Platform::Leetcode);
        assert_eq!(" codechef ".parse::<Platform>().unwrap(), Platform::Codechef);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "topcoder".parse::<Platform>().unwrap_err();
        assert_eq!(err.0, "topcoder");
    }

    #[test]
    fn test_display_roundtrip() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
        }
    }
}
