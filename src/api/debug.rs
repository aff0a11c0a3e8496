//! Diagnostics for the CSRF handshake. Output is meant for an operator's
//! terminal; callers must not ship decoded payloads to logs.

use base64ct::{Base64, Base64Unpadded, Base64UrlUnpadded, Encoding};
use serde_json::Value;

/// Decodes a token for display.
///
/// JWT-shaped tokens (`header.payload.signature`) yield their payload claims.
/// Other tokens are tried as a base64 JSON envelope, which is how Laravel
/// encrypts its `XSRF-TOKEN` cookie (`{"iv", "value", "mac", "tag"}`).
/// Returns `None` when neither shape decodes to JSON.
#[must_use]
pub fn inspect_token(token: &str) -> Option<Value> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() == 3 {
        if let Some(payload) = decode_json(segments[1]) {
            return Some(payload);
        }
    }

    decode_json(token)
}

fn decode_json(segment: &str) -> Option<Value> {
    let bytes = Base64UrlUnpadded::decode_vec(segment.trim_end_matches('='))
        .or_else(|_| Base64::decode_vec(segment))
        .or_else(|_| Base64Unpadded::decode_vec(segment.trim_end_matches('=')))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}
