//! AtCoder contest feed.
//!
//! AtCoder has no official contest API; this uses the kenkoooo resource
//! dump, which lists every contest past and future. Only contests
//! starting after `now` are kept.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use super::ContestSource;
use crate::fetch::{FetchError, Fetcher};
use crate::models::ContestEntry;

pub struct AtcoderContests {
    fetcher: Arc<Fetcher>,
    contests_url: String,
}

impl AtcoderContests {
    pub fn new(fetcher: Arc<Fetcher>, contests_url: String) -> Self {
        Self {
            fetcher,
            contests_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AtcoderContest {
    id: String,
    title: String,
    start_epoch_second: i64,
    duration_second: i64,
}

#[async_trait]
impl ContestSource for AtcoderContests {
    fn name(&self) -> &'static str {
        "atcoder"
    }

    async fn fetch(&self, now: DateTime<Utc>) -> Result<Vec<ContestEntry>, FetchError> {
        let url = Url::parse(&self.contests_url)?;
        let contests: Vec<AtcoderContest> = self.fetcher.get_json(&url).await?;

        let cutoff = now.timestamp();
        let upcoming = contests
            .into_iter()
            .filter(|c| c.start_epoch_second > cutoff)
            .map(|c| ContestEntry {
                platform: "AtCoder".to_string(),
                name: c.title,
                start_time: c.start_epoch_second,
                duration_seconds: c.duration_second,
                url: format!("https://atcoder.jp/contests/{}", c.id),
                contest_type: "AtCoder Contest".to_string(),
            })
            .collect();

        Ok(upcoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contest_dump_deserializes() {
        let body = r#"[
            {
                "id": "abc412",
                "start_epoch_second": 1900000000,
                "duration_second": 6000,
                "title": "AtCoder Beginner Contest 412",
                "rate_change": " ~ 1999"
            }
        ]"#;
        let contests: Vec<AtcoderContest> = serde_json::from_str(body).unwrap();

        assert_eq!(contests.len(), 1);
        assert_eq!(contests[0].id, "abc412");
        assert_eq!(contests[0].duration_second, 6000);
    }
}
