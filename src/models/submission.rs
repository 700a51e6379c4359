//! Platform-neutral submission records consumed by the aggregator.

use serde::{Deserialize, Serialize};

/// Identity and metadata of the problem a submission was judged against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProblemRef {
    /// Contest the problem belongs to, when the platform assigns one.
    pub contest_id: Option<i64>,

    /// Position within the contest (e.g. "A", "B1").
    pub index: String,

    /// Difficulty rating, when the platform has assigned one.
    pub rating: Option<u32>,

    /// Topic labels attached to the problem.
    pub tags: Vec<String>,
}

/// One judged submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
    /// Judge outcome label (e.g. "OK", "WRONG_ANSWER").
    pub verdict: String,

    /// Problem descriptor, absent for malformed upstream records.
    pub problem: Option<ProblemRef>,

    /// When the submission was created, epoch seconds.
    pub created_at: Option<i64>,
}
