//! Upcoming contest model.

use serde::{Deserialize, Serialize};

/// One upcoming contest, from any source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestEntry {
    /// Hosting platform display name (e.g. "Codeforces").
    pub platform: String,

    /// Contest title.
    pub name: String,

    /// Scheduled start, epoch seconds.
    pub start_time: i64,

    pub duration_seconds: i64,

    /// Registration / listing page.
    pub url: String,

    /// Platform-specific contest type label (e.g. "CF", "Weekly Contest").
    pub contest_type: String,
}
