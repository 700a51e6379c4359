//! Contest list rendering.

use chrono::{DateTime, Utc};

use crate::models::ContestEntry;

/// Empty-state message for the contest tool.
pub const NO_CONTESTS_MESSAGE: &str = "🏆 **No Upcoming Contests Found**\n\n\
    Either all platforms are quiet right now, or there might be an issue \
    fetching contest data. Try again in a few minutes!";

fn platform_marker(platform: &str) -> &'static str {
    match platform {
        "Codeforces" => "🔴",
        "AtCoder" => "🟠",
        "LeetCode" => "🟡",
        "CodeChef" => "🟤",
        "TopCoder" => "🔵",
        _ => "⚪",
    }
}

fn urgency(days: i64, hours: i64) -> &'static str {
    if days == 0 && hours < 2 {
        "🚨 STARTING SOON"
    } else if days == 0 {
        "⏰ TODAY"
    } else if days == 1 {
        "📅 TOMORROW"
    } else {
        "📆 UPCOMING"
    }
}

fn time_until(days: i64, hours: i64, minutes: i64) -> String {
    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Render the merged contest list, relative to `now`.
pub fn render_contest_list(contests: &[ContestEntry], now: DateTime<Utc>) -> String {
    if contests.is_empty() {
        return NO_CONTESTS_MESSAGE.to_string();
    }

    let mut text = String::from("🏆 **Upcoming Competitive Programming Contests**\n\n");

    for (i, contest) in contests.iter().enumerate() {
        let diff = contest.start_time - now.timestamp();
        let days = diff / 86400;
        let hours = (diff % 86400) / 3600;
        let minutes = (diff % 3600) / 60;

        let start = DateTime::<Utc>::from_timestamp(contest.start_time, 0).unwrap_or(now);

        text.push_str(&format!(
            "{} {} **{}**\n",
            urgency(days, hours),
            platform_marker(&contest.platform),
            contest.platform
        ));
        text.push_str(&format!("🏁 **{}**\n", contest.name));
        text.push_str(&format!(
            "⏰ **Starts:** {}\n",
            start.format("%B %d, %Y at %I:%M %p UTC")
        ));
        text.push_str(&format!(
            "⏱️ **Duration:** {:.1} hours\n",
            contest.duration_seconds as f64 / 3600.0
        ));
        text.push_str(&format!(
            "⏳ **Time Until:** {}\n",
            time_until(days, hours, minutes)
        ));
        text.push_str(&format!("🔗 **Link:** {}\n\n", contest.url));

        if i + 1 < contests.len() {
            text.push_str(&"─".repeat(40));
            text.push_str("\n\n");
        }
    }

    text.push_str(
        "💡 **Pro Tips:**\n\
         • Set reminders for contests you want to participate in\n\
         • Practice similar problems before the contest\n\
         • Check your timezone - times shown are UTC\n\
         • Register early to avoid last-minute issues\n\n",
    );
    text.push_str(
        "🎯 **Good luck in your contests!** May your solutions be bug-free and \
         your ratings climb high! 🚀",
    );

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 7, 12, 0, 0).unwrap()
    }

    fn entry(name: &str, offset_secs: i64) -> ContestEntry {
        ContestEntry {
            platform: "Codeforces".to_string(),
            name: name.to_string(),
            start_time: now().timestamp() + offset_secs,
            duration_seconds: 7200,
            url: "https://codeforces.com/contest/1999".to_string(),
            contest_type: "CF".to_string(),
        }
    }

    #[test]
    fn test_empty_list_returns_canned_message() {
        assert_eq!(render_contest_list(&[], now()), NO_CONTESTS_MESSAGE);
    }

    #[test]
    fn test_urgency_bands() {
        let soon = render_contest_list(&[entry("Round", 3600)], now());
        assert!(soon.contains("STARTING SOON"));

        let today = render_contest_list(&[entry("Round", 5 * 3600)], now());
        assert!(today.contains("TODAY"));

        let tomorrow = render_contest_list(&[entry("Round", 30 * 3600)], now());
        assert!(tomorrow.contains("TOMORROW"));

        let upcoming = render_contest_list(&[entry("Round", 5 * 86400)], now());
        assert!(upcoming.contains("UPCOMING"));
    }

    #[test]
    fn test_time_until_formats() {
        let text = render_contest_list(&[entry("Round", 2 * 86400 + 3 * 3600 + 600)], now());
        assert!(text.contains("**Time Until:** 2d 3h 10m"));

        let text = render_contest_list(&[entry("Round", 45 * 60)], now());
        assert!(text.contains("**Time Until:** 45m"));
    }

    #[test]
    fn test_duration_in_hours() {
        let mut c = entry("Round", 3600);
        c.duration_seconds = 9000;
        let text = render_contest_list(&[c], now());

        assert!(text.contains("**Duration:** 2.5 hours"));
    }

    #[test]
    fn test_separator_between_entries_only() {
        let text = render_contest_list(&[entry("A", 3600), entry("B", 7200)], now());
        assert_eq!(text.matches(&"─".repeat(40)).count(), 1);
    }

    #[test]
    fn test_contains_names_and_links() {
        let text = render_contest_list(&[entry("Codeforces Round 999", 3600)], now());
        assert!(text.contains("Codeforces Round 999"));
        assert!(text.contains("https://codeforces.com/contest/1999"));
    }
}
