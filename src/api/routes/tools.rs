//! Tool endpoint handlers.
//!
//! Each tool is stateless request/response: resolve handles, fan out the
//! fetches, drop failures softly, render text. Per-profile fetch
//! failures never fail a call; only orchestration bugs do.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use futures::future::join_all;
use serde::Deserialize;
use tracing::{info, warn};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::contests;
use crate::models::{Platform, ProfileFetch, ProfileStats};
use crate::narrate;
use crate::platforms::{self, parse_handle_list};
use crate::registry::DEFAULT_SESSION;

/// Fixed identity string used by the chat frontend to verify the server.
pub async fn validate(State(state): State<AppState>) -> String {
    state.config.auth.identity.clone()
}

#[derive(Debug, Deserialize)]
pub struct AddProfileParams {
    #[serde(default = "default_platform")]
    pub platform: String,

    #[serde(default)]
    pub handle: String,
}

fn default_platform() -> String {
    "codeforces".to_string()
}

pub async fn add_coding_profile(
    State(state): State<AppState>,
    Json(params): Json<AddProfileParams>,
) -> Result<String, ApiError> {
    let handle = params.handle.trim();
    if handle.is_empty() {
        return Ok(narrate::HANDLE_REQUIRED_MESSAGE.to_string());
    }

    // Reject unknown platforms before any network call
    let platform: Platform = match params.platform.parse() {
        Ok(platform) => platform,
        Err(_) => return Ok(narrate::UNSUPPORTED_PLATFORM_MESSAGE.to_string()),
    };

    let outcome = platforms::fetch_profile(
        &state.fetcher,
        &state.config.fetch,
        platform,
        handle,
        Utc::now(),
    )
    .await;

    match outcome {
        ProfileFetch::Success(stats) => {
            let entry = format!("{}:{}", platform, handle);
            let stored = state.registry.add(DEFAULT_SESSION, &entry).await;
            Ok(narrate::render_profile_summary(&stats, &stored))
        }
        ProfileFetch::NotFound => {
            info!("profile {}:{} not found", platform, handle);
            Ok(narrate::not_found_message(platform, handle))
        }
        ProfileFetch::TransportError(detail) => {
            warn!("profile {}:{} fetch failed: {}", platform, handle, detail);
            Ok(narrate::not_found_message(platform, handle))
        }
    }
}

/// Resolve explicit handles, or fall back to the session registry.
/// `None` means there is nothing to work with at all.
async fn resolve_handles(state: &AppState, raw: &str) -> Option<Vec<(Platform, String)>> {
    let raw = raw.trim();
    if !raw.is_empty() {
        return Some(parse_handle_list(raw));
    }

    let stored = state.registry.get(DEFAULT_SESSION).await;
    if stored.is_empty() {
        return None;
    }
    Some(parse_handle_list(&stored.join(",")))
}

/// Fetch every requested profile concurrently, dropping failures softly.
async fn fetch_profiles(state: &AppState, pairs: &[(Platform, String)]) -> Vec<ProfileStats> {
    let as_of = Utc::now();
    let fetches = pairs.iter().map(|(platform, handle)| {
        platforms::fetch_profile(&state.fetcher, &state.config.fetch, *platform, handle, as_of)
    });

    join_all(fetches)
        .await
        .into_iter()
        .zip(pairs)
        .filter_map(|(outcome, (platform, handle))| match outcome {
            ProfileFetch::Success(stats) => Some(stats),
            ProfileFetch::NotFound => {
                info!("profile {}:{} not found, dropping", platform, handle);
                None
            }
            ProfileFetch::TransportError(detail) => {
                warn!("profile {}:{} fetch failed, dropping: {}", platform, handle, detail);
                None
            }
        })
        .collect()
}

#[derive(Debug, Default, Deserialize)]
pub struct RoastParams {
    /// Comma-separated "platform:handle" list; empty uses stored handles.
    #[serde(default)]
    pub handles: String,
}

pub async fn roast_my_coding(
    State(state): State<AppState>,
    Json(params): Json<RoastParams>,
) -> Result<String, ApiError> {
    let Some(pairs) = resolve_handles(&state, &params.handles).await else {
        return Ok(narrate::NO_HANDLES_MESSAGE.to_string());
    };

    let profiles = fetch_profiles(&state, &pairs).await;
    if profiles.is_empty() {
        return Ok(narrate::NO_VALID_PROFILES_MESSAGE.to_string());
    }

    Ok(narrate::render_roast(&profiles))
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendParams {
    /// Free text; may name a goal ("interview", "contest") and a company.
    #[serde(default)]
    pub goal: String,

    #[serde(default)]
    pub handles: String,
}

pub async fn recommend_problems(
    State(state): State<AppState>,
    Json(params): Json<RecommendParams>,
) -> Result<String, ApiError> {
    let Some(pairs) = resolve_handles(&state, &params.handles).await else {
        return Ok(narrate::NO_HANDLES_MESSAGE.to_string());
    };

    let profiles = fetch_profiles(&state, &pairs).await;
    if profiles.is_empty() {
        return Ok(narrate::NO_VALID_PROFILES_MESSAGE.to_string());
    }

    let goal = narrate::parse_goal(&params.goal);
    Ok(narrate::render_recommendations(&profiles, &goal))
}

pub async fn get_upcoming_contests(State(state): State<AppState>) -> Result<String, ApiError> {
    let now = Utc::now();
    let sources = contests::default_sources(state.fetcher.clone(), &state.config.fetch);
    let merged = contests::upcoming_contests(&sources, now).await;

    Ok(narrate::render_contest_list(&merged, now))
}
