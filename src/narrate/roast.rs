//! Roast rendering.
//!
//! An ordered rule list maps profile statistics onto pre-written
//! fragments. Rules fire independently; up to three hits are stitched
//! into one paragraph per profile, closed by a solved-count line.

use crate::models::ProfileStats;

/// Renderer-level canned message for an empty profile set.
pub const NO_PROFILES_TO_ROAST: &str = "🔥 **No profiles to roast!** \
    Add your coding handles first, then come back for a proper intellectual destruction! 🧠💀";

/// One threshold rule: fires when the predicate holds, then renders its
/// fragment from the same stats.
struct RoastRule {
    applies: fn(&ProfileStats) -> bool,
    fragment: fn(&ProfileStats) -> String,
}

/// Evaluated top to bottom; order decides which fragments make the cut
/// when more than three fire.
const RULES: &[RoastRule] = &[
    RoastRule {
        applies: |p| p.max_rating > 0 && p.rating + 200 < p.max_rating,
        fragment: |p| {
            format!(
                "peaked at {} but dropped to {}? That's a {} point nosedive! 📉",
                p.max_rating,
                p.rating,
                p.max_rating - p.rating
            )
        },
    },
    RoastRule {
        applies: |p| p.avg_difficulty > 0 && p.rating > 0 && p.avg_difficulty + 300 < p.rating,
        fragment: |p| {
            format!(
                "solving {}-rated problems with a {} rating? Playing it safe much? 😴",
                p.avg_difficulty, p.rating
            )
        },
    },
    RoastRule {
        applies: |p| p.avg_difficulty > 0 && p.rating > 0 && p.avg_difficulty > p.rating + 200,
        fragment: |p| {
            format!(
                "attempting {}-rated problems with {} rating? Ambitious but clearly not working! 🎯❌",
                p.avg_difficulty, p.rating
            )
        },
    },
    RoastRule {
        applies: |p| p.accuracy_rate < 20.0,
        fragment: |p| {
            format!(
                "{}% accuracy? You submit code like you're playing the lottery! 🎰",
                p.accuracy_rate
            )
        },
    },
    RoastRule {
        applies: |p| (20.0..40.0).contains(&p.accuracy_rate),
        fragment: |p| {
            format!(
                "{}% accuracy - more wrong answers than a broken GPS! 🗺️💀",
                p.accuracy_rate
            )
        },
    },
    RoastRule {
        applies: |p| top_tag_is(p, "implementation"),
        fragment: |_| {
            "loves 'implementation' problems - basically the 'easy mode' of competitive programming! 🎮"
                .to_string()
        },
    },
    RoastRule {
        applies: |p| top_tag_is(p, "math"),
        fragment: |_| {
            "math problems enthusiast but still can't calculate a path to higher rating! 🧮".to_string()
        },
    },
    RoastRule {
        applies: |p| top_tag_is(p, "greedy"),
        fragment: |_| {
            "greedy algorithm lover - greedy for easy problems, stingy with effort! 💰".to_string()
        },
    },
    RoastRule {
        applies: |p| top_tag_is(p, "dp"),
        fragment: |_| {
            "DP specialist but can't dynamically program your way to success! 📊".to_string()
        },
    },
    RoastRule {
        applies: |p| !p.top_tags.is_empty() && p.top_tags.len() < 3,
        fragment: |p| {
            format!(
                "only comfortable with {} topic types? Variety is the spice of life! 🌶️",
                p.top_tags.len()
            )
        },
    },
    RoastRule {
        applies: |p| p.recent_activity == 0,
        fragment: |_| {
            "zero activity in the last 30 days - did you give up or just forget your password? 😴"
                .to_string()
        },
    },
    RoastRule {
        applies: |p| (1..5).contains(&p.recent_activity),
        fragment: |p| {
            format!(
                "only {} submissions this month? My grandmother codes more actively! 👵",
                p.recent_activity
            )
        },
    },
    RoastRule {
        applies: |p| {
            p.verdicts.total > 0
                && f64::from(p.verdicts.wrong_answer) > f64::from(p.verdicts.total) * 0.4
        },
        fragment: |_| {
            "specializes in Wrong Answer verdicts - at least you're consistent! ❌".to_string()
        },
    },
    RoastRule {
        applies: |p| {
            p.verdicts.total > 0
                && f64::from(p.verdicts.time_limit) > f64::from(p.verdicts.total) * 0.2
        },
        fragment: |_| {
            "Time Limit Exceeded expert - writes code slower than internet explorer! ⏰💀".to_string()
        },
    },
];

fn top_tag_is(profile: &ProfileStats, tag: &str) -> bool {
    profile
        .top_tags
        .first()
        .is_some_and(|(name, _)| name == tag)
}

fn shallow_data_line(profile: &ProfileStats) -> String {
    format!(
        "🔥 **{}** ({} on {}): {} problems solved - not enough data to properly \
         roast you, but I'm sure there's plenty to work with! 😈",
        profile.handle,
        profile.rating,
        profile.platform.display_name(),
        profile.solved_count
    )
}

fn closing_line(profile: &ProfileStats) -> String {
    if profile.solved_count < 100 {
        format!(
            " With only {} problems solved, you're still in tutorial mode! 🎮",
            profile.solved_count
        )
    } else if profile.rating > 0 && profile.rating < 1200 {
        format!(
            " {} problems solved but still can't break the newbie barrier! 🚧",
            profile.solved_count
        )
    } else if profile.rating >= 1200 {
        format!(
            " Despite {} problems solved, you're stuck in mediocrity! 📊",
            profile.solved_count
        )
    } else {
        String::new()
    }
}

fn roast_profile(profile: &ProfileStats) -> String {
    // Placeholder numbers would only produce nonsense jabs
    if profile.is_placeholder() {
        return shallow_data_line(profile);
    }

    let fragments: Vec<String> = RULES
        .iter()
        .filter(|rule| (rule.applies)(profile))
        .map(|rule| (rule.fragment)(profile))
        .collect();

    if fragments.is_empty() {
        return shallow_data_line(profile);
    }

    let mut roast = format!(
        "🔥 **{}** ({} on {}): ",
        profile.handle,
        profile.rating,
        profile.platform.display_name()
    );
    match fragments.len() {
        1 => roast.push_str(&format!("You've {}!", fragments[0])),
        2 => roast.push_str(&format!("You've {} and {}!", fragments[0], fragments[1])),
        _ => roast.push_str(&format!(
            "Where do I even start? You've {}, {}, and {}!",
            fragments[0], fragments[1], fragments[2]
        )),
    }
    roast.push_str(&closing_line(profile));
    roast
}

/// Render the full roast for a set of profiles.
pub fn render_roast(profiles: &[ProfileStats]) -> String {
    if profiles.is_empty() {
        return NO_PROFILES_TO_ROAST.to_string();
    }

    let roasts: Vec<String> = profiles.iter().map(roast_profile).collect();

    let mut text = String::from("🔥 **INTELLIGENT ROAST ANALYSIS** 🔥\n\n");
    text.push_str(&roasts.join("\n\n"));
    text.push_str(
        "\n\n💀 **Analysis complete!** These roasts are based on your actual \
         coding patterns - the data doesn't lie! 📊💪",
    );
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DataSource, Platform, ProfileStats, VerdictTally};

    fn live_profile() -> ProfileStats {
        ProfileStats {
            platform: Platform::Codeforces,
            handle: "test_user".to_string(),
            rating: 1400,
            max_rating: 1450,
            rank: "specialist".to_string(),
            max_rank: "specialist".to_string(),
            solved_count: 250,
            registration_time: 1500000000,
            avg_difficulty: 1300,
            top_tags: vec![
                ("graphs".to_string(), 40),
                ("dp".to_string(), 30),
                ("math".to_string(), 20),
            ],
            verdicts: VerdictTally {
                total: 500,
                accepted: 275,
                wrong_answer: 150,
                time_limit: 50,
                runtime_error: 15,
                compile_error: 10,
            },
            recent_activity: 20,
            accuracy_rate: 55.0,
            data_source: DataSource::Live,
        }
    }

    #[test]
    fn test_low_accuracy_triggers_lottery_fragment() {
        let mut profile = live_profile();
        profile.accuracy_rate = 15.0;

        let roast = render_roast(&[profile]);
        assert!(roast.contains("playing the lottery"));
    }

    #[test]
    fn test_mid_accuracy_triggers_gps_fragment() {
        let mut profile = live_profile();
        profile.accuracy_rate = 25.0;

        let roast = render_roast(&[profile]);
        assert!(roast.contains("broken GPS"));
        assert!(!roast.contains("lottery"));
    }

    #[test]
    fn test_decent_accuracy_triggers_neither() {
        let roast = render_roast(&[live_profile()]);
        assert!(!roast.contains("lottery"));
        assert!(!roast.contains("broken GPS"));
    }

    #[test]
    fn test_rating_nosedive() {
        let mut profile = live_profile();
        profile.rating = 1400;
        profile.max_rating = 1700;

        let roast = render_roast(&[profile]);
        assert!(roast.contains("300 point nosedive"));
    }

    #[test]
    fn test_comfort_zone_jab() {
        let mut profile = live_profile();
        profile.rating = 1800;
        profile.max_rating = 1800;
        profile.avg_difficulty = 1400;

        let roast = render_roast(&[profile]);
        assert!(roast.contains("Playing it safe"));
    }

    #[test]
    fn test_empty_set_returns_canned_message() {
        assert_eq!(render_roast(&[]), NO_PROFILES_TO_ROAST);
    }

    #[test]
    fn test_placeholder_gets_shallow_data_line() {
        let profile = ProfileStats::placeholder(Platform::Leetcode, "john", 1500, 150);

        let roast = render_roast(&[profile]);
        assert!(roast.contains("not enough data to properly roast you"));
        // None of the numeric jabs should fire on stand-in numbers
        assert!(!roast.contains("lottery"));
        assert!(!roast.contains("zero activity"));
    }

    #[test]
    fn test_three_fragments_get_long_leadin() {
        let mut profile = live_profile();
        profile.accuracy_rate = 15.0; // lottery
        profile.recent_activity = 0; // zero activity
        profile.top_tags = vec![("implementation".to_string(), 50)]; // easy mode + narrow spread

        let roast = render_roast(&[profile]);
        assert!(roast.contains("Where do I even start?"));
    }

    #[test]
    fn test_closing_line_by_solved_count() {
        let mut profile = live_profile();
        profile.accuracy_rate = 15.0; // keep at least one rule firing
        profile.solved_count = 50;
        let roast = render_roast(&[profile.clone()]);
        assert!(roast.contains("tutorial mode"));

        profile.solved_count = 300;
        profile.rating = 1100;
        let roast = render_roast(&[profile.clone()]);
        assert!(roast.contains("newbie barrier"));

        profile.rating = 1500;
        let roast = render_roast(&[profile]);
        assert!(roast.contains("stuck in mediocrity"));
    }

    #[test]
    fn test_deterministic() {
        let profiles = vec![live_profile()];
        assert_eq!(render_roast(&profiles), render_roast(&profiles));
    }

    #[test]
    fn test_multiple_profiles_each_get_a_paragraph() {
        let mut second = live_profile();
        second.handle = "other_user".to_string();

        let roast = render_roast(&[live_profile(), second]);
        assert!(roast.contains("test_user"));
        assert!(roast.contains("other_user"));
    }
}
