//! Codeforces API client.
//!
//! Two endpoints per profile: `user.info` for identity and ratings,
//! `user.status` for the submission history, bounded to the most recent
//! 2000 records. The raw history is folded into [`ProfileStats`] by the
//! aggregator.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::aggregate::aggregate_submissions;
use crate::config::FetchConfig;
use crate::fetch::{FetchError, Fetcher};
use crate::models::{
    DataSource, Platform, ProblemRef, ProfileFetch, ProfileStats, Submission,
};

/// Codeforces API envelope: `status` is "OK" or "FAILED".
#[derive(Debug, Deserialize)]
struct CfEnvelope<T> {
    status: String,
    #[serde(default)]
    comment: Option<String>,
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CfUser {
    handle: String,
    #[serde(default)]
    rating: u32,
    #[serde(default)]
    max_rating: u32,
    #[serde(default = "unrated")]
    rank: String,
    #[serde(default = "unrated")]
    max_rank: String,
    #[serde(default)]
    registration_time_seconds: i64,
}

fn unrated() -> String {
    "unrated".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CfSubmission {
    #[serde(default)]
    verdict: Option<String>,
    problem: Option<CfProblem>,
    creation_time_seconds: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CfProblem {
    contest_id: Option<i64>,
    #[serde(default)]
    index: String,
    rating: Option<u32>,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<CfSubmission> for Submission {
    fn from(s: CfSubmission) -> Self {
        Submission {
            verdict: s.verdict.unwrap_or_default(),
            problem: s.problem.map(|p| ProblemRef {
                contest_id: p.contest_id,
                index: p.index,
                rating: p.rating,
                tags: p.tags,
            }),
            created_at: s.creation_time_seconds,
        }
    }
}

/// Fetch and aggregate one Codeforces profile.
pub(super) async fn fetch(
    fetcher: &Fetcher,
    config: &FetchConfig,
    handle: &str,
    as_of: DateTime<Utc>,
) -> ProfileFetch {
    match fetch_inner(fetcher, config, handle, as_of).await {
        Ok(outcome) => outcome,
        Err(e) => ProfileFetch::TransportError(e.to_string()),
    }
}

async fn fetch_inner(
    fetcher: &Fetcher,
    config: &FetchConfig,
    handle: &str,
    as_of: DateTime<Utc>,
) -> Result<ProfileFetch, FetchError> {
    let user_url = Url::parse_with_params(
        &format!("{}/user.info", config.codeforces_base_url),
        &[("handles", handle)],
    )?;
    let user_resp: CfEnvelope<Vec<CfUser>> = fetcher.get_json(&user_url).await?;

    if user_resp.status != "OK" {
        return Ok(ProfileFetch::NotFound);
    }
    let Some(user) = user_resp.result.and_then(|users| users.into_iter().next()) else {
        return Ok(ProfileFetch::NotFound);
    };

    let status_url = Url::parse_with_params(
        &format!("{}/user.status", config.codeforces_base_url),
        &[
            ("handle", handle),
            ("from", "1"),
            ("count", &config.submission_count.to_string()),
        ],
    )?;
    // A rejected history payload degrades to an empty one; the profile
    // still succeeds with zeroed tallies.
    let submissions = match fetcher
        .get_json::<CfEnvelope<Vec<CfSubmission>>>(&status_url)
        .await?
    {
        resp if resp.status == "OK" => resp.result.unwrap_or_default(),
        resp => {
            warn!(
                "user.status failed for {}: {}",
                handle,
                resp.comment.as_deref().unwrap_or("no comment")
            );
            Vec::new()
        }
    };

    let records: Vec<Submission> = submissions.into_iter().map(Submission::from).collect();
    let stats = aggregate_submissions(&records, as_of);

    Ok(ProfileFetch::Success(ProfileStats {
        platform: Platform::Codeforces,
        handle: user.handle,
        rating: user.rating,
        max_rating: user.max_rating,
        rank: user.rank,
        max_rank: user.max_rank,
        solved_count: stats.solved_count,
        registration_time: user.registration_time_seconds,
        avg_difficulty: stats.avg_difficulty,
        top_tags: stats.top_tags,
        verdicts: stats.verdicts,
        recent_activity: stats.recent_activity,
        accuracy_rate: stats.accuracy_rate,
        data_source: DataSource::Live,
    }))
}
