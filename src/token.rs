//! Display-only decoding of JWT-shaped tokens.
//!
//! Nothing here validates a signature or trusts a claim; the decoded parts
//! exist to be shown to a human.

use base64::Engine;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Serialize;
use serde_json::Value;

// Tokens in the wild come both with and without `=` padding.
const B64URL: GeneralPurpose = GeneralPurpose::new(
    &base64::alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JwtParts {
    pub header: Value,
    pub payload: Value,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Inspection {
    Decoded(JwtParts),
    Malformed,
}

impl Inspection {
    pub fn into_payload(self) -> Option<Value> {
        match self {
            Inspection::Decoded(parts) => Some(parts.payload),
            Inspection::Malformed => None,
        }
    }
}

pub fn inspect(token: &str) -> Inspection {
    let mut segments = token.trim().split('.');
    let (Some(header), Some(payload)) = (segments.next(), segments.next()) else {
        return Inspection::Malformed;
    };
    if header.is_empty() || payload.is_empty() {
        return Inspection::Malformed;
    }

    match (decode_segment(header), decode_segment(payload)) {
        (Some(header), Some(payload)) => Inspection::Decoded(JwtParts { header, payload }),
        _ => Inspection::Malformed,
    }
}

/// Decoded payload, or `None` for anything that is not a well-formed token.
pub fn claims(token: &str) -> Option<Value> {
    inspect(token).into_payload()
}

/// The `exp` claim in epoch seconds. Zero counts as absent.
pub fn expiry(claims: &Value) -> Option<i64> {
    let exp = claims.get("exp")?;
    let secs = exp.as_i64().or_else(|| exp.as_f64().map(|f| f as i64))?;
    (secs != 0).then_some(secs)
}

pub fn pretty_json(value: Option<&Value>) -> String {
    match value {
        Some(v) => serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()),
        None => "null".to_string(),
    }
}

// Only the URL-safe alphabet is accepted, and non-UTF-8 payloads count as
// malformed rather than being decoded lossily.
fn decode_segment(segment: &str) -> Option<Value> {
    let bytes = B64URL.decode(segment).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    serde_json::from_str(&text).ok()
}

#[cfg(test)]
#[path = "tests/token_tests.rs"]
mod tests;
