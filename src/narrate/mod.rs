//! User-facing text rendering.
//!
//! Everything here is pure string assembly over already-fetched data:
//! deterministic for identical input, no I/O, always non-empty output.
//! Threshold logic lives in ordered rule lists so it stays unit-testable
//! without network access.

mod contests;
mod recommend;
mod roast;
mod summary;

pub use contests::{render_contest_list, NO_CONTESTS_MESSAGE};
pub use recommend::{parse_goal, render_recommendations, Goal, GoalCategory};
pub use roast::{render_roast, NO_PROFILES_TO_ROAST};
pub use summary::render_profile_summary;

use crate::models::Platform;

/// Returned when a tool is invoked with no explicit handles and the
/// session has stored none.
pub const NO_HANDLES_MESSAGE: &str = "❌ **No Handles Found!**\n\n\
    First add your profile:\n`add_coding_profile codeforces your_handle`\n\n\
    Or provide handles directly:\n`codeforces:tourist,leetcode:john_doe`";

/// Returned when every supplied handle failed to resolve.
pub const NO_VALID_PROFILES_MESSAGE: &str = "❌ **No Valid Profiles Found!**\n\n\
    Make sure your handles are correct:\n\
    - Format: `platform:handle`\n\
    - Supported: codeforces, leetcode, codechef\n\
    - Example: `codeforces:tourist,leetcode:john_doe`\n\n\
    Try again with valid handles! 🎯";

/// Returned when add_coding_profile is called with an empty handle.
pub const HANDLE_REQUIRED_MESSAGE: &str = "❌ **Handle Required!**\n\n\
    Please provide your username/handle.\n\n\
    Example: `add_coding_profile codeforces tourist`";

/// Returned when the caller names a platform outside the supported set.
pub const UNSUPPORTED_PLATFORM_MESSAGE: &str = "❌ **Unsupported Platform!**\n\n\
    Supported platforms: codeforces, leetcode, codechef";

/// Not-found text for one handle on one platform.
pub fn not_found_message(platform: Platform, handle: &str) -> String {
    format!(
        "❌ **Profile Not Found!**\n\nCouldn't find handle '{}' on {}.\n\n\
         Double-check your username and try again!",
        handle, platform
    )
}
