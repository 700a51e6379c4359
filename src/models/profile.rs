//! Profile statistics models.

use serde::{Deserialize, Serialize};

use super::Platform;

/// Where the numbers in a profile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Fetched live from the platform's public API.
    Live,
    /// Fixed stand-in numbers for platforms without a usable public API.
    Placeholder,
}

/// Verdict counts across one submission history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictTally {
    pub total: u32,
    pub accepted: u32,
    pub wrong_answer: u32,
    pub time_limit: u32,
    pub runtime_error: u32,
    pub compile_error: u32,
}

/// Aggregated statistics for one handle on one platform.
///
/// Built fresh on every fetch; never persisted or merged across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStats {
    pub platform: Platform,
    pub handle: String,

    /// Current platform rating (0 when unrated).
    pub rating: u32,

    /// Highest rating ever reached.
    pub max_rating: u32,

    /// Current rank title (e.g. "expert", or "unrated").
    pub rank: String,

    /// Best rank title ever reached.
    pub max_rank: String,

    /// Unique problems solved; a problem accepted twice counts once.
    pub solved_count: u32,

    /// Platform registration time, epoch seconds (0 when unknown).
    pub registration_time: i64,

    /// Rounded mean rating of solved problems, 0 when none carried one.
    pub avg_difficulty: u32,

    /// Up to five (tag, count) pairs, most frequent first.
    pub top_tags: Vec<(String, u32)>,

    pub verdicts: VerdictTally,

    /// Accepted submissions inside the trailing 30-day window.
    pub recent_activity: u32,

    /// accepted / total as a percentage, one decimal place.
    pub accuracy_rate: f64,

    pub data_source: DataSource,
}

impl ProfileStats {
    /// Fixed stand-in stats for a platform without a usable public API.
    pub fn placeholder(platform: Platform, handle: &str, rating: u32, solved_count: u32) -> Self {
        Self {
            platform,
            handle: handle.to_string(),
            rating,
            max_rating: rating,
            rank: "unrated".to_string(),
            max_rank: "unrated".to_string(),
            solved_count,
            registration_time: 0,
            avg_difficulty: 0,
            top_tags: Vec::new(),
            verdicts: VerdictTally::default(),
            recent_activity: 0,
            accuracy_rate: 0.0,
            data_source: DataSource::Placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.data_source == DataSource::Placeholder
    }
}

/// Outcome of fetching one profile.
///
/// Both failure variants are dropped from aggregation by the tool layer,
/// but they are distinguishable so logs can tell a missing handle from a
/// broken network.
#[derive(Debug, Clone)]
pub enum ProfileFetch {
    Success(ProfileStats),

    /// The platform reports no such handle.
    NotFound,

    /// Network or malformed-response failure talking to the platform.
    TransportError(String),
}

impl ProfileFetch {
    /// Consume the outcome, keeping only a successful profile.
    pub fn into_success(self) -> Option<ProfileStats> {
        match self {
            ProfileFetch::Success(stats) => Some(stats),
            _ => None,
        }
    }
}
