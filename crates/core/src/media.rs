//! Media format detection for exercise demonstrations.

const VIDEO_EXTENSIONS: &[&str] = &[".webm", ".mp4", ".mov", ".avi", ".mkv"];
const ANIMATED_EXTENSIONS: &[&str] = &[".gif", ".webm", ".mp4", ".mov", ".avi", ".mkv"];

/// Whether the URL points at a video container.
///
/// Matching is case-insensitive and looks for the extension anywhere in the
/// URL, so query strings after the extension are tolerated.
pub fn is_video_format(url: &str) -> bool {
    contains_any(url, VIDEO_EXTENSIONS)
}

/// Whether the URL points at animated media (video or gif).
pub fn is_animated_format(url: &str) -> bool {
    contains_any(url, ANIMATED_EXTENSIONS)
}

fn contains_any(url: &str, extensions: &[&str]) -> bool {
    let url = url.to_lowercase();
    extensions.iter().any(|ext| url.contains(ext))
}
