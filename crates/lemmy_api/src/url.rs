/// Default instance the browser reads from.
pub const DEFAULT_LEMMY_BASE_URL: &str = "https://lemmy.ml";

const API_PATH: &str = "/api/v3";

/// Normalize an instance URL to its v3 API base.
///
/// Normalization rules:
/// 1) keep `/api/v3` unchanged
/// 2) append `/v3` when the path ends in `/api`
/// 3) append `/api/v3` otherwise
pub fn normalize_api_base(input: &str) -> String {
    let base = if input.trim().is_empty() {
        DEFAULT_LEMMY_BASE_URL
    } else {
        input.trim()
    };

    let trimmed = base.trim_end_matches('/');
    if trimmed.ends_with(API_PATH) {
        return trimmed.to_string();
    }
    if trimmed.ends_with("/api") {
        return format!("{trimmed}/v3");
    }
    format!("{trimmed}{API_PATH}")
}

/// Join an endpoint path such as `post/list` onto a normalized API base.
pub fn endpoint(api_base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        api_base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
