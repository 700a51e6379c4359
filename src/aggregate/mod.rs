//! Submission history aggregation.
//!
//! Computes derived metrics from a raw submission list in a single pass:
//! - Unique solved count and verdict tally
//! - Average solved-problem difficulty
//! - Tag frequency (top five)
//! - Recent activity and accuracy rate

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};

use crate::models::{Submission, VerdictTally};

/// Trailing window that counts as "recent" activity.
const RECENT_WINDOW_DAYS: i64 = 30;

/// How many top tags to keep.
const TOP_TAG_COUNT: usize = 5;

/// Verdict string the judge uses for an accepted submission.
const ACCEPTED_VERDICT: &str = "OK";

/// Derived metrics over one submission history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionStats {
    pub solved_count: u32,
    pub avg_difficulty: u32,
    pub top_tags: Vec<(String, u32)>,
    pub verdicts: VerdictTally,
    pub recent_activity: u32,
    pub accuracy_rate: f64,
}

/// Aggregate a submission history.
///
/// `as_of` anchors the recent-activity window, so results are
/// reproducible for a fixed input. Verdicts outside the known families
/// count toward the total only.
pub fn aggregate_submissions(submissions: &[Submission], as_of: DateTime<Utc>) -> SubmissionStats {
    let mut verdicts = VerdictTally::default();
    let mut solved: HashSet<(Option<i64>, String)> = HashSet::new();
    let mut difficulties: Vec<u32> = Vec::new();
    let mut tag_counts: HashMap<String, u32> = HashMap::new();
    // Tags in first-encountered order; ties in the top-five sort keep it.
    let mut tag_order: Vec<String> = Vec::new();
    let mut recent_activity = 0u32;

    let recent_cutoff = (as_of - Duration::days(RECENT_WINDOW_DAYS)).timestamp();

    for submission in submissions {
        verdicts.total += 1;
        let verdict = submission.verdict.as_str();

        if verdict == ACCEPTED_VERDICT {
            verdicts.accepted += 1;

            if let Some(problem) = &submission.problem {
                solved.insert((problem.contest_id, problem.index.clone()));

                if let Some(rating) = problem.rating {
                    difficulties.push(rating);
                }
                for tag in &problem.tags {
                    let count = tag_counts.entry(tag.clone()).or_insert(0);
                    if *count == 0 {
                        tag_order.push(tag.clone());
                    }
                    *count += 1;
                }
            }

            if submission.created_at.is_some_and(|t| t > recent_cutoff) {
                recent_activity += 1;
            }
        } else if verdict.contains("WRONG_ANSWER") {
            verdicts.wrong_answer += 1;
        } else if verdict.contains("TIME_LIMIT") {
            verdicts.time_limit += 1;
        } else if verdict.contains("RUNTIME_ERROR") {
            verdicts.runtime_error += 1;
        } else if verdict.contains("COMPILATION_ERROR") {
            verdicts.compile_error += 1;
        }
    }

    SubmissionStats {
        solved_count: solved.len() as u32,
        avg_difficulty: average_difficulty(&difficulties),
        top_tags: top_tags(&tag_counts, &tag_order),
        accuracy_rate: accuracy_rate(verdicts.accepted, verdicts.total),
        verdicts,
        recent_activity,
    }
}

/// Rounded mean of solved-problem ratings, 0 (not NaN) when empty.
fn average_difficulty(difficulties: &[u32]) -> u32 {
    if difficulties.is_empty() {
        return 0;
    }
    let sum: u64 = difficulties.iter().map(|&r| u64::from(r)).sum();
    (sum as f64 / difficulties.len() as f64).round() as u32
}

/// Top five tags by frequency descending.
///
/// Built in first-encountered order, then stably sorted by count, so
/// equal-count tags keep their original order.
fn top_tags(counts: &HashMap<String, u32>, order: &[String]) -> Vec<(String, u32)> {
    let mut tags: Vec<(String, u32)> = order
        .iter()
        .filter_map(|tag| counts.get(tag).map(|&count| (tag.clone(), count)))
        .collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1));
    tags.truncate(TOP_TAG_COUNT);
    tags
}

/// accepted / total as a percentage, one decimal, 0 when total is 0.
fn accuracy_rate(accepted: u32, total: u32) -> f64 {
    let rate = f64::from(accepted) / f64::from(total.max(1)) * 100.0;
    (rate * 10.0).round() / 10.0
}
