//! Video rotation selection

use crate::domain::video::normalize_video_url;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rotation memory carried between picks.
///
/// The picker itself is stateless; callers hold this value and thread it
/// through each call, persisting it however suits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_part: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_url: Option<String>,
}

/// Pick a video for the given body part.
///
/// Draws a fresh uniform choice when the part changed since the previous call
/// or when `reroll` is set; otherwise returns the previously stored URL
/// unchanged. An empty video list yields no selection and leaves the state
/// untouched. A reroll is an independent draw and may land on the same URL
/// again.
pub fn pick<R: Rng + ?Sized>(
    part: &str,
    videos: &[String],
    state: &RotationState,
    reroll: bool,
    rng: &mut R,
) -> (Option<String>, RotationState) {
    if videos.is_empty() {
        return (None, state.clone());
    }

    let part_changed = state.last_part.as_deref() != Some(part);

    if part_changed || reroll {
        let url = videos.choose(rng).map(|raw| normalize_video_url(raw));
        let new_state = RotationState {
            last_part: Some(part.to_string()),
            last_url: url.clone(),
        };
        (url, new_state)
    } else {
        (state.last_url.clone(), state.clone())
    }
}
