use std::sync::LazyLock;

use regex::Regex;

static URL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:https?://)?(?:www\.)?youtube\.com/watch\?v=([^&\s]+)",
        r"(?:https?://)?(?:www\.)?youtu\.be/([^?\s]+)",
        r"(?:https?://)?(?:www\.)?youtube\.com/embed/([^?\s]+)",
        r"(?:https?://)?(?:www\.)?youtube\.com/v/([^?\s]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());

/// Extracts the YouTube video ID from the recognized URL shapes
/// (`watch?v=`, `youtu.be/`, `embed/`, `v/`).
///
/// Returns `None` when the URL matches none of them.
pub fn extract_video_id(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }

    URL_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Whether `id` looks like a well-formed 11-character YouTube video ID.
pub fn is_valid_video_id(id: &str) -> bool {
    VIDEO_ID_RE.is_match(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?feature=shared"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_v_url() {
        assert_eq!(
            extract_video_id("youtube.com/v/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_no_scheme_no_www() {
        assert_eq!(
            extract_video_id("youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_unrecognized_url() {
        assert_eq!(extract_video_id("https://vimeo.com/123456"), None);
        assert_eq!(extract_video_id("not a url at all"), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn test_video_id_validation() {
        assert!(is_valid_video_id("dQw4w9WgXcQ"));
        assert!(is_valid_video_id("a-b_c123XYZ"));
        assert!(!is_valid_video_id("too-short"));
        assert!(!is_valid_video_id("way-too-long-to-be-an-id"));
        assert!(!is_valid_video_id("bad/chars!!"));
    }
}
