//! Codeforces contest feed.
//!
//! Pulls `contest.list` and keeps contests that have not started yet
//! (phase "BEFORE"). The window filter happens in the merge step.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use super::ContestSource;
use crate::fetch::{FetchError, Fetcher};
use crate::models::ContestEntry;

pub struct CodeforcesContests {
    fetcher: Arc<Fetcher>,
    base_url: String,
}

impl CodeforcesContests {
    pub fn new(fetcher: Arc<Fetcher>, base_url: String) -> Self {
        Self { fetcher, base_url }
    }
}

/// Codeforces API envelope, same shape as the profile endpoints use.
#[derive(Debug, Deserialize)]
struct CfEnvelope<T> {
    status: String,
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CfContest {
    id: i64,
    name: String,
    #[serde(rename = "type", default)]
    contest_type: String,
    phase: String,
    start_time_seconds: Option<i64>,
    #[serde(default)]
    duration_seconds: i64,
}

#[async_trait]
impl ContestSource for CodeforcesContests {
    fn name(&self) -> &'static str {
        "codeforces"
    }

    async fn fetch(&self, _now: DateTime<Utc>) -> Result<Vec<ContestEntry>, FetchError> {
        let url = Url::parse(&format!("{}/contest.list", self.base_url))?;
        let envelope: CfEnvelope<Vec<CfContest>> = self.fetcher.get_json(&url).await?;

        if envelope.status != "OK" {
            return Err(FetchError::HttpStatus {
                status: 502,
                message: "contest.list returned FAILED".to_string(),
            });
        }

        let contests = envelope
            .result
            .unwrap_or_default()
            .into_iter()
            .filter(|c| c.phase == "BEFORE")
            .filter_map(|c| {
                let start_time = c.start_time_seconds?;
                Some(ContestEntry {
                    platform: "Codeforces".to_string(),
                    name: c.name,
                    start_time,
                    duration_seconds: c.duration_seconds,
                    url: format!("https://codeforces.com/contest/{}", c.id),
                    contest_type: if c.contest_type.is_empty() {
                        "Unknown".to_string()
                    } else {
                        c.contest_type
                    },
                })
            })
            .collect();

        Ok(contests)
    }
}
