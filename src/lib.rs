//! # CP Coach
//!
//! A competitive programming coach service: fetches public profile
//! statistics, roasts them, recommends problems, and tracks upcoming
//! contests across platforms.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (profiles, submissions, contests)
//! - **platforms**: Per-platform profile fetchers (Codeforces live,
//!   LeetCode/CodeChef placeholder stubs)
//! - **aggregate**: Submission history aggregation into derived metrics
//! - **contests**: Contest feed merging (live + estimated schedules)
//! - **narrate**: Roast / recommendation / contest text rendering
//! - **registry**: Per-session stored handles
//! - **api**: HTTP tool endpoints
//! - **config**: Configuration loading and validation

pub mod aggregate;
pub mod api;
pub mod config;
pub mod contests;
pub mod fetch;
pub mod models;
pub mod narrate;
pub mod platforms;
pub mod registry;

pub use models::*;
