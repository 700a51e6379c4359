//! Profile confirmation text for the add tool.

use crate::models::ProfileStats;

/// Render the "profile added" confirmation, echoing the session's full
/// stored-handle list.
pub fn render_profile_summary(stats: &ProfileStats, stored: &[String]) -> String {
    let mut text = String::from("✅ **Profile Verified & Remembered!**\n\n");
    text.push_str(&format!(
        "🏆 **{}**: {}\n",
        stats.platform.display_name(),
        stats.handle
    ));
    text.push_str(&format!("📊 **Current Rating**: {}\n", stats.rating));
    text.push_str(&format!("📈 **Max Rating**: {}\n", stats.max_rating));
    text.push_str(&format!("✅ **Problems Solved**: {}\n", stats.solved_count));
    text.push_str(&format!("🎖️ **Rank**: {}\n", stats.rank));

    if stats.avg_difficulty > 0 {
        text.push_str(&format!(
            "🎯 **Avg Problem Difficulty**: {}\n",
            stats.avg_difficulty
        ));
    }

    if stats.is_placeholder() {
        text.push_str("\nℹ️ This platform publishes no public stats API; the numbers above are rough stand-ins.\n");
    } else {
        text.push_str(&format!("🎲 **Accuracy Rate**: {}%\n", stats.accuracy_rate));
    }

    text.push_str(
        "\n💾 **Handle Saved!** Now you can simply use:\n\
         🔥 `roast_my_coding` (no handles needed!)\n\
         🎯 `recommend_problems interview` (no handles needed!)\n\n",
    );
    text.push_str(&format!("📝 **Stored Handles**: {}", stored.join(", ")));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DataSource, Platform, ProfileStats};

    #[test]
    fn test_summary_echoes_registry() {
        let stats = ProfileStats::placeholder(Platform::Codechef, "chef", 1400, 80);
        let stored = vec!["codeforces:alice".to_string(), "codechef:chef".to_string()];

        let text = render_profile_summary(&stats, &stored);
        assert!(text.contains("**CodeChef**: chef"));
        assert!(text.contains("codeforces:alice, codechef:chef"));
        assert!(text.contains("rough stand-ins"));
    }

    #[test]
    fn test_summary_live_profile_shows_accuracy() {
        let mut stats = ProfileStats::placeholder(Platform::Codeforces, "alice", 1500, 300);
        stats.data_source = DataSource::Live;
        stats.accuracy_rate = 48.5;
        stats.avg_difficulty = 1350;

        let text = render_profile_summary(&stats, &["codeforces:alice".to_string()]);
        assert!(text.contains("**Accuracy Rate**: 48.5%"));
        assert!(text.contains("**Avg Problem Difficulty**: 1350"));
        assert!(!text.contains("stand-ins"));
    }

    #[test]
    fn test_summary_hides_zero_difficulty() {
        let mut stats = ProfileStats::placeholder(Platform::Codeforces, "alice", 1500, 300);
        stats.data_source = DataSource::Live;

        let text = render_profile_summary(&stats, &[]);
        assert!(!text.contains("Avg Problem Difficulty"));
    }
}
