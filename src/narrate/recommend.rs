//! Recommendation rendering.
//!
//! Splits the free-form goal text into a category and an optional known
//! company, classifies skill from the best rating across profiles, and
//! assembles fixed text blocks. Company blocks appear only for companies
//! on the known list.

use crate::models::ProfileStats;

use super::NO_VALID_PROFILES_MESSAGE;

/// Companies that get a dedicated interview-prep block.
const KNOWN_COMPANIES: &[&str] = &[
    "google",
    "amazon",
    "meta",
    "facebook",
    "microsoft",
    "apple",
    "netflix",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalCategory {
    Interview,
    Contest,
    #[default]
    General,
}

/// Parsed goal text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Goal {
    pub category: GoalCategory,
    pub company: Option<String>,
}

/// Split free-form goal text into a category and an optional company.
///
/// Words are matched whole, case-insensitively, with punctuation
/// stripped; the first known company wins.
pub fn parse_goal(raw: &str) -> Goal {
    let mut goal = Goal::default();

    for word in raw.split_whitespace() {
        let word: String = word
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match word.as_str() {
            "interview" | "job" | "faang" => goal.category = GoalCategory::Interview,
            "contest" | "competitive" | "cp" => goal.category = GoalCategory::Contest,
            w if KNOWN_COMPANIES.contains(&w) => {
                if goal.company.is_none() {
                    goal.company = Some(w.to_string());
                }
            }
            _ => {}
        }
    }

    goal
}

/// Skill level label and recommended difficulty band for a best rating.
fn skill_level(max_rating: u32) -> (&'static str, &'static str) {
    match max_rating {
        0 => ("Beginner", "800-1000"),
        1..=1199 => ("Newbie", "800-1200"),
        1200..=1599 => ("Pupil/Specialist", "1000-1400"),
        1600..=1899 => ("Expert", "1200-1600"),
        _ => ("Master+", "1400-2000+"),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn category_block(category: GoalCategory) -> &'static str {
    match category {
        GoalCategory::Interview => {
            "💼 **Interview Prep Focus:**\n\
             1. **Arrays & Strings** - Two Sum, Valid Parentheses, Longest Substring\n\
             2. **Linked Lists** - Reverse Linked List, Merge Two Lists\n\
             3. **Trees & Graphs** - Binary Tree Traversal, BFS/DFS\n\
             4. **Dynamic Programming** - Climbing Stairs, Coin Change\n\
             5. **System Design** - Start with basic concepts\n"
        }
        GoalCategory::Contest => {
            "🏆 **Contest Performance Focus:**\n\
             1. **Math & Number Theory** - GCD, Prime Numbers, Modular Arithmetic\n\
             2. **Data Structures** - Segment Trees, Fenwick Trees\n\
             3. **Graph Algorithms** - Dijkstra, Floyd-Warshall, MST\n\
             4. **Dynamic Programming** - Classic DP patterns\n\
             5. **Greedy Algorithms** - Activity Selection, Huffman Coding\n"
        }
        GoalCategory::General => {
            "📚 **General Skill Building:**\n\
             1. **Start with Easy Problems** - Build confidence first\n\
             2. **Focus on One Topic** - Master before moving on\n\
             3. **Practice Daily** - Consistency beats intensity\n\
             4. **Read Editorials** - Learn from solutions\n\
             5. **Join Contests** - Real-time problem solving\n"
        }
    }
}

fn company_block(company: &str, difficulty_range: &str) -> String {
    let name = capitalize(company);
    format!(
        "\n🏢 **{name} Interview Focus:**\n\
         - Grind the {name}-tagged problem set on LeetCode\n\
         - Practice timed mocks in your {difficulty_range} band\n\
         - Review recent {name} interview experiences before the loop\n"
    )
}

/// Render recommendations for a set of profiles and a parsed goal.
pub fn render_recommendations(profiles: &[ProfileStats], goal: &Goal) -> String {
    if profiles.is_empty() {
        return NO_VALID_PROFILES_MESSAGE.to_string();
    }

    let best_rating = profiles.iter().map(|p| p.max_rating).max().unwrap_or(0);
    let (level, difficulty_range) = skill_level(best_rating);

    let mut text = format!("🎯 **Problem Recommendations for {} Level**\n\n", level);
    text.push_str("📊 **Your Stats Summary:**\n");
    for profile in profiles {
        text.push_str(&format!(
            "- **{}**: {} (Rating: {}, Solved: {})",
            profile.platform.display_name(),
            profile.handle,
            profile.rating,
            profile.solved_count
        ));
        if profile.is_placeholder() {
            text.push_str(" — placeholder data");
        }
        text.push('\n');
    }

    text.push_str(&format!(
        "\n🎲 **Recommended Difficulty Range:** {}\n\n",
        difficulty_range
    ));

    text.push_str(category_block(goal.category));

    if let Some(company) = &goal.company {
        text.push_str(&company_block(company, difficulty_range));
    }

    text.push_str(&format!(
        "\n🔗 **Recommended Platforms:**\n\
         - **Codeforces**: Div 2 problems ({})\n\
         - **LeetCode**: Medium problems for interviews\n\
         - **AtCoder**: Beginner Contest problems\n\
         - **CodeChef**: Long Challenge problems\n",
        difficulty_range
    ));

    text.push_str(
        "\n💡 **Pro Tips:**\n\
         - Solve 2-3 problems daily consistently\n\
         - Time yourself during practice\n\
         - Implement solutions from scratch\n\
         - Join coding communities for motivation\n",
    );

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Platform, ProfileStats};
    use pretty_assertions::assert_eq;

    fn profile(rating: u32) -> ProfileStats {
        let mut stats = ProfileStats::placeholder(Platform::Codeforces, "alice", rating, 200);
        stats.data_source = crate::models::DataSource::Live;
        stats
    }

    #[test]
    fn test_parse_goal_interview_with_company() {
        let goal = parse_goal("interview google");

        assert_eq!(goal.category, GoalCategory::Interview);
        assert_eq!(goal.company.as_deref(), Some("google"));
    }

    #[test]
    fn test_parse_goal_strips_punctuation_and_case() {
        let goal = parse_goal("FAANG prep: Amazon!");

        assert_eq!(goal.category, GoalCategory::Interview);
        assert_eq!(goal.company.as_deref(), Some("amazon"));
    }

    #[test]
    fn test_parse_goal_unknown_company_ignored() {
        let goal = parse_goal("interview initech");

        assert_eq!(goal.category, GoalCategory::Interview);
        assert_eq!(goal.company, None);
    }

    #[test]
    fn test_parse_goal_contest_and_default() {
        assert_eq!(parse_goal("contest").category, GoalCategory::Contest);
        assert_eq!(parse_goal("get better").category, GoalCategory::General);
        assert_eq!(parse_goal("").category, GoalCategory::General);
    }

    #[test]
    fn test_parse_goal_first_company_wins() {
        let goal = parse_goal("google or meta interview");
        assert_eq!(goal.company.as_deref(), Some("google"));
    }

    #[test]
    fn test_skill_level_bands() {
        assert_eq!(skill_level(0).0, "Beginner");
        assert_eq!(skill_level(1100).0, "Newbie");
        assert_eq!(skill_level(1400), ("Pupil/Specialist", "1000-1400"));
        assert_eq!(skill_level(1750).0, "Expert");
        assert_eq!(skill_level(2400).0, "Master+");
    }

    #[test]
    fn test_company_block_only_for_known_company() {
        let profiles = vec![profile(1400)];

        let with = render_recommendations(&profiles, &parse_goal("interview google"));
        assert!(with.contains("Google Interview Focus"));

        let without = render_recommendations(&profiles, &parse_goal("interview"));
        assert!(!without.contains("Interview Focus:**\n- Grind"));
        assert!(without.contains("Interview Prep Focus"));
    }

    #[test]
    fn test_level_from_best_max_rating() {
        let profiles = vec![profile(900), profile(1700)];
        let text = render_recommendations(&profiles, &Goal::default());

        assert!(text.contains("Expert Level"));
        assert!(text.contains("1200-1600"));
    }

    #[test]
    fn test_placeholder_profiles_are_marked() {
        let profiles = vec![ProfileStats::placeholder(Platform::Leetcode, "bob", 1500, 150)];
        let text = render_recommendations(&profiles, &Goal::default());

        assert!(text.contains("placeholder data"));
    }

    #[test]
    fn test_empty_profiles_yield_canned_message() {
        assert_eq!(
            render_recommendations(&[], &Goal::default()),
            NO_VALID_PROFILES_MESSAGE
        );
    }

    #[test]
    fn test_contest_goal_gets_contest_block() {
        let text = render_recommendations(&[profile(1300)], &parse_goal("contest"));

        assert!(text.contains("Contest Performance Focus"));
        assert!(text.contains("Segment Trees"));
    }
}
