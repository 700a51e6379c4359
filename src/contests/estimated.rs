//! Estimated contest schedules.
//!
//! CodeChef and LeetCode publish no usable contest API, so their entries
//! are computed from the calendar: "next occurrence of weekday W" around
//! the supplied `now`. These are approximations, not live data; the
//! timestamps move with `now` by construction.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};

use super::ContestSource;
use crate::fetch::FetchError;
use crate::models::ContestEntry;

const HOUR_SECS: i64 = 3600;

/// Next occurrence of `target` on or after `now`'s date (today counts).
fn next_weekday(now: DateTime<Utc>, target: Weekday) -> NaiveDate {
    let days_ahead = (i64::from(target.num_days_from_monday())
        - i64::from(now.weekday().num_days_from_monday()))
    .rem_euclid(7);
    now.date_naive() + Duration::days(days_ahead)
}

/// First day of the month after `now`'s.
fn first_of_next_month(now: DateTime<Utc>) -> NaiveDate {
    let (year, month) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("day one of a month is a valid date")
}

fn at(date: NaiveDate, time: NaiveTime) -> i64 {
    date.and_time(time).and_utc().timestamp()
}

/// Estimated CodeChef schedule: weekly Starters plus the monthly
/// Cook-Off.
pub struct CodechefSchedule;

#[async_trait]
impl ContestSource for CodechefSchedule {
    fn name(&self) -> &'static str {
        "codechef"
    }

    async fn fetch(&self, now: DateTime<Utc>) -> Result<Vec<ContestEntry>, FetchError> {
        let listing_url = "https://www.codechef.com/contests".to_string();

        Ok(vec![
            ContestEntry {
                platform: "CodeChef".to_string(),
                name: "CodeChef Starters (Weekly)".to_string(),
                start_time: at(next_weekday(now, Weekday::Wed), now.time()),
                duration_seconds: 3 * HOUR_SECS,
                url: listing_url.clone(),
                contest_type: "Weekly Contest".to_string(),
            },
            ContestEntry {
                platform: "CodeChef".to_string(),
                name: "CodeChef Cook-Off (Monthly)".to_string(),
                start_time: at(first_of_next_month(now), now.time()),
                duration_seconds: 5 * HOUR_SECS / 2,
                url: listing_url,
                contest_type: "Monthly Contest".to_string(),
            },
        ])
    }
}

/// Estimated LeetCode schedule: Sunday weekly and Saturday biweekly
/// contests.
pub struct LeetcodeSchedule;

#[async_trait]
impl ContestSource for LeetcodeSchedule {
    fn name(&self) -> &'static str {
        "leetcode"
    }

    async fn fetch(&self, now: DateTime<Utc>) -> Result<Vec<ContestEntry>, FetchError> {
        let weekly_start = NaiveTime::from_hms_opt(8, 0, 0).expect("valid time");
        let biweekly_start = NaiveTime::from_hms_opt(20, 30, 0).expect("valid time");
        let listing_url = "https://leetcode.com/contest/".to_string();

        Ok(vec![
            ContestEntry {
                platform: "LeetCode".to_string(),
                name: "LeetCode Weekly Contest".to_string(),
                start_time: at(next_weekday(now, Weekday::Sun), weekly_start),
                duration_seconds: 3 * HOUR_SECS / 2,
                url: listing_url.clone(),
                contest_type: "Weekly Contest".to_string(),
            },
            ContestEntry {
                platform: "LeetCode".to_string(),
                name: "LeetCode Biweekly Contest".to_string(),
                start_time: at(next_weekday(now, Weekday::Sat), biweekly_start),
                duration_seconds: 3 * HOUR_SECS / 2,
                url: listing_url,
                contest_type: "Biweekly Contest".to_string(),
            },
        ])
    }
}
