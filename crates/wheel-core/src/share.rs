//! URL fragment codec so a shared link reopens the same palette.

use crate::error::WheelError;

pub const SHARE_KEY: &str = "wheel";

pub fn share_fragment(index: i64) -> String {
    format!("#{}={}", SHARE_KEY, index)
}

/// Accepts `#wheel=N` or `wheel=N`, optionally among other `&`-separated pairs.
pub fn parse_share_fragment(fragment: &str) -> Result<i64, WheelError> {
    let body = fragment.strip_prefix('#').unwrap_or(fragment);
    let value = body
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == SHARE_KEY)
        .map(|(_, v)| v)
        .ok_or_else(|| WheelError::MissingShareKey(fragment.to_string()))?;
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| WheelError::InvalidShareIndex(value.to_string()))
}

/// `href` with its fragment replaced by the one for `index`.
pub fn share_url(href: &str, index: i64) -> String {
    let base = href.split_once('#').map(|(b, _)| b).unwrap_or(href);
    format!("{}{}", base, share_fragment(index))
}
