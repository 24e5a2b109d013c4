use url::Url;

const WATCH_HOST: &str = "youtube.com";
const SHORT_HOST: &str = "youtu.be";

/// Extracts the video identifier from a YouTube page URL.
///
/// Supports:
/// - watch pages like `https://www.youtube.com/watch?v=ID&t=42`
/// - short links like `https://youtu.be/ID?si=...`
///
/// Returns `None` for anything else, including watch pages without a `v`
/// parameter.
#[must_use]
pub fn extract_video_id(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host = url.host_str()?.to_ascii_lowercase();

    let id = if host == SHORT_HOST {
        url.path_segments()?.next().map(str::to_string)
    } else if host == WATCH_HOST || host.ends_with(".youtube.com") {
        if url.path() != "/watch" {
            return None;
        }
        url.query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned())
    } else {
        None
    }?;

    let id = id.trim().to_string();
    if id.is_empty() { None } else { Some(id) }
}

/// Accepts either a page URL or a bare identifier.
#[must_use]
pub fn resolve_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if input.contains("://") {
        extract_video_id(input)
    } else {
        Some(input.to_string())
    }
}
