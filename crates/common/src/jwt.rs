//! Read-only helpers for JWT expiry claims.
//!
//! Signatures are not verified; these helpers only inspect the `exp` claim so
//! callers can decide whether a token is worth sending.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Expiry of `token` in epoch milliseconds, if the payload carries `exp`.
pub fn expiration_ms(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    let exp = claims.get("exp")?;

    #[allow(clippy::cast_possible_truncation)]
    let seconds = exp.as_i64().or_else(|| exp.as_f64().map(|f| f as i64))?;
    seconds.checked_mul(1000)
}

/// Whether `token` is expired at `now_ms`.
///
/// Undecodable tokens count as expired.
pub fn is_expired(token: &str, now_ms: i64) -> bool {
    expiration_ms(token).map_or(true, |exp| exp < now_ms)
}

/// Milliseconds until `token` expires, floored at zero.
pub fn time_remaining_ms(token: &str, now_ms: i64) -> i64 {
    expiration_ms(token).map_or(0, |exp| (exp - now_ms).max(0))
}
