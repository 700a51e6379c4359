//! Upcoming contest aggregation.
//!
//! Merges live feeds (Codeforces, AtCoder) with estimated schedules for
//! platforms that publish none (CodeChef, LeetCode) into one
//! chronological, windowed list. Each source failure is isolated: a
//! broken feed contributes zero entries and never aborts the merge.

mod atcoder;
mod codeforces;
mod estimated;

pub use atcoder::AtcoderContests;
pub use codeforces::CodeforcesContests;
pub use estimated::{CodechefSchedule, LeetcodeSchedule};

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::fetch::{FetchError, Fetcher};
use crate::models::ContestEntry;

/// How far ahead the merged list looks.
const WINDOW_DAYS: i64 = 30;

/// Most contests kept after merging.
const MAX_CONTESTS: usize = 15;

/// One provider of upcoming contests.
#[async_trait]
pub trait ContestSource: Send + Sync {
    /// Source name for logs.
    fn name(&self) -> &'static str;

    /// Fetch (or compute) this source's upcoming contests.
    ///
    /// Generated schedules derive their timestamps from `now`, so the
    /// same call at a different time yields different placeholders.
    async fn fetch(&self, now: DateTime<Utc>) -> Result<Vec<ContestEntry>, FetchError>;
}

/// The standard source set: two live feeds, two estimated schedules.
pub fn default_sources(fetcher: Arc<Fetcher>, config: &FetchConfig) -> Vec<Box<dyn ContestSource>> {
    vec![
        Box::new(CodeforcesContests::new(
            fetcher.clone(),
            config.codeforces_base_url.clone(),
        )),
        Box::new(AtcoderContests::new(
            fetcher,
            config.atcoder_contests_url.clone(),
        )),
        Box::new(CodechefSchedule),
        Box::new(LeetcodeSchedule),
    ]
}

/// Collect entries from every source, isolating failures.
pub async fn collect_contests(
    sources: &[Box<dyn ContestSource>],
    now: DateTime<Utc>,
) -> Vec<Vec<ContestEntry>> {
    let results = futures::future::join_all(sources.iter().map(|s| s.fetch(now))).await;

    sources
        .iter()
        .zip(results)
        .map(|(source, result)| match result {
            Ok(entries) => {
                debug!("{}: {} upcoming contests", source.name(), entries.len());
                entries
            }
            Err(e) => {
                warn!("contest source {} failed: {}", source.name(), e);
                Vec::new()
            }
        })
        .collect()
}

/// Merge per-source lists into one chronological view.
///
/// Keeps only entries strictly inside (now, now + 30 days), sorted
/// ascending by start time, at most fifteen.
pub fn merge_contests(lists: Vec<Vec<ContestEntry>>, now: DateTime<Utc>) -> Vec<ContestEntry> {
    let window_start = now.timestamp();
    let window_end = (now + Duration::days(WINDOW_DAYS)).timestamp();

    let mut merged: Vec<ContestEntry> = lists
        .into_iter()
        .flatten()
        .filter(|c| c.start_time > window_start && c.start_time < window_end)
        .collect();
    merged.sort_by_key(|c| c.start_time);
    merged.truncate(MAX_CONTESTS);
    merged
}

/// Fetch every source and merge, never failing the overall call.
pub async fn upcoming_contests(
    sources: &[Box<dyn ContestSource>],
    now: DateTime<Utc>,
) -> Vec<ContestEntry> {
    let lists = collect_contests(sources, now).await;
    merge_contests(lists, now)
}
