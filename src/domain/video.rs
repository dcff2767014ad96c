//! Video URL normalization

use regex::Regex;
use std::sync::OnceLock;

/// Regex for recognizing YouTube Shorts links and capturing the video id
fn shorts_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"youtube\.com/shorts/([^?&]+)").unwrap())
}

/// Rewrite a YouTube Shorts link into a regular watch link.
///
/// Any other input is returned unchanged, including shorts links whose id
/// cannot be extracted. Never fails, and is idempotent: a watch link produced
/// by this function passes through untouched on a second call.
pub fn normalize_video_url(url: &str) -> String {
    let url = url.trim();

    if let Some(captures) = shorts_regex().captures(url) {
        let video_id = captures[1].trim_end_matches('/');
        if !video_id.is_empty() {
            return format!("https://www.youtube.com/watch?v={}", video_id);
        }
    }

    url.to_string()
}
