//! LeetCode profile stub.
//!
//! LeetCode publishes no public statistics API, so this returns fixed
//! stand-in numbers tagged as placeholder data. Renderers surface the
//! limited-data note instead of roasting the fake stats.

use crate::models::{Platform, ProfileFetch, ProfileStats};

const PLACEHOLDER_RATING: u32 = 1500;
const PLACEHOLDER_SOLVED: u32 = 150;

pub(super) fn fetch(handle: &str) -> ProfileFetch {
    ProfileFetch::Success(ProfileStats::placeholder(
        Platform::Leetcode,
        handle,
        PLACEHOLDER_RATING,
        PLACEHOLDER_SOLVED,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_profile() {
        let profile = fetch("john_doe").into_success().unwrap();

        assert_eq!(profile.platform, Platform::Leetcode);
        assert_eq!(profile.handle, "john_doe");
        assert_eq!(profile.rating, 1500);
        assert!(profile.is_placeholder());
    }
}
