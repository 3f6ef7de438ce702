//! Label normalisation shared by the resolver and the query paths.

/// Lowercase and keep only alphanumerics, so `"Korea, South"`, `"korea south"`
/// and `"KOREA-SOUTH"` compare equal.
pub fn words_standardize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split a multi-value path parameter on `,` or `|`, trimming each part and
/// dropping empty ones.
pub fn split_query(s: &str) -> Vec<String> {
    s.split([',', '|'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
