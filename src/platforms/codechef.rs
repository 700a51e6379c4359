//! CodeChef profile stub.
//!
//! The CodeChef API requires authenticated access, so this returns fixed
//! stand-in numbers tagged as placeholder data.

use crate::models::{Platform, ProfileFetch, ProfileStats};

const PLACEHOLDER_RATING: u32 = 1400;
const PLACEHOLDER_SOLVED: u32 = 80;

pub(super) fn fetch(handle: &str) -> ProfileFetch {
    ProfileFetch::Success(ProfileStats::placeholder(
        Platform::Codechef,
        handle,
        PLACEHOLDER_RATING,
        PLACEHOLDER_SOLVED,
    ))
}
