//! Per-platform profile fetchers.
//!
//! All platform API specifics live in this module's children so endpoint
//! changes are easy to fix. Codeforces is fetched live; LeetCode and
//! CodeChef return flagged placeholder numbers because neither exposes a
//! usable public statistics API.

mod codechef;
mod codeforces;
mod leetcode;

use chrono::{DateTime, Utc};

use crate::config::FetchConfig;
use crate::fetch::Fetcher;
use crate::models::{Platform, ProfileFetch};

/// Fetch the profile for one handle, dispatching on platform.
///
/// `as_of` anchors the recent-activity window of the aggregated stats.
pub async fn fetch_profile(
    fetcher: &Fetcher,
    config: &FetchConfig,
    platform: Platform,
    handle: &str,
    as_of: DateTime<Utc>,
) -> ProfileFetch {
    match platform {
        Platform::Codeforces => codeforces::fetch(fetcher, config, handle, as_of).await,
        Platform::Leetcode => leetcode::fetch(handle),
        Platform::Codechef => codechef::fetch(handle),
    }
}

/// Parse a comma-separated "platform:handle" list.
///
/// Entries without a colon, with an empty handle, or naming an unknown
/// platform are skipped.
pub fn parse_handle_list(raw: &str) -> Vec<(Platform, String)> {
    raw.split(',')
        .filter_map(|pair| {
            let (platform, handle) = pair.split_once(':')?;
            let platform: Platform = platform.parse().ok()?;
            let handle = handle.trim();
            if handle.is_empty() {
                return None;
            }
            Some((platform, handle.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_handle_list() {
        let parsed = parse_handle_list("codeforces:tourist, leetcode:john_doe");
        assert_eq!(
            parsed,
            vec![
                (Platform::Codeforces, "tourist".to_string()),
                (Platform::Leetcode, "john_doe".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_handle_list_skips_malformed() {
        let parsed = parse_handle_list("no-colon,topcoder:alice,codechef:,codechef:bob");
        assert_eq!(parsed, vec![(Platform::Codechef, "bob".to_string())]);
    }

    #[test]
    fn test_parse_handle_list_empty() {
        assert!(parse_handle_list("").is_empty());
    }

    #[test]
    fn test_parse_handle_keeps_extra_colons_in_handle() {
        let parsed = parse_handle_list("codeforces:a:b");
        assert_eq!(parsed, vec![(Platform::Codeforces, "a:b".to_string())]);
    }
}
