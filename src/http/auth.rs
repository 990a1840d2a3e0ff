//! Signed admin session tokens.
//!
//! A successful login sets `admin_session=<expiry>.<tag>` where `expiry` is a
//! unix timestamp and `tag` is the hex HMAC-SHA256 of `admin:<expiry>` under
//! the configured secret. Verification re-derives the tag and compares it in
//! constant time, so the server keeps no session state at all.

use crate::errors::{Error, Result};
use axum::http::{HeaderMap, header};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Name of the cookie carrying the admin session token.
pub const SESSION_COOKIE: &str = "admin_session";

/// Session lifetime in seconds (one day).
pub const SESSION_TTL_SECS: i64 = 86_400;

fn compute_tag(secret: &str, expiry: i64) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| Error::Config {
        message: format!("invalid session secret: {e}"),
    })?;
    mac.update(format!("admin:{expiry}").as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Mints a token valid for [`SESSION_TTL_SECS`] starting at `now`.
///
/// # Errors
/// Returns an error if the secret cannot be used as an HMAC key.
pub fn mint_token(secret: &str, now: i64) -> Result<String> {
    let expiry = now + SESSION_TTL_SECS;
    let tag = compute_tag(secret, expiry)?;
    Ok(format!("{expiry}.{tag}"))
}

/// Checks a presented token: well-formed, unexpired, and correctly signed.
#[must_use]
pub fn verify_token(secret: &str, token: &str, now: i64) -> bool {
    let Some((expiry_text, tag)) = token.split_once('.') else {
        return false;
    };
    let Ok(expiry) = expiry_text.parse::<i64>() else {
        return false;
    };
    if expiry <= now {
        return false;
    }
    let Ok(expected) = compute_tag(secret, expiry) else {
        return false;
    };
    let Ok(expected_raw) = hex::decode(expected) else {
        return false;
    };
    let Ok(presented_raw) = hex::decode(tag) else {
        return false;
    };
    if expected_raw.len() != presented_raw.len() {
        return false;
    }
    expected_raw.ct_eq(presented_raw.as_slice()).into()
}

/// `Set-Cookie` value carrying a fresh session token.
#[must_use]
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Max-Age={SESSION_TTL_SECS}; Path=/; HttpOnly")
}

/// Pulls the session token out of the request's `Cookie` header, if present.
#[must_use]
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    for pair in cookies.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=') {
            if name == SESSION_COOKIE {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Whether the request carries a currently-valid admin session.
#[must_use]
pub fn has_valid_session(headers: &HeaderMap, secret: &str, now: i64) -> bool {
    extract_session_token(headers)
        .is_some_and(|token| verify_token(secret, &token, now))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_fresh_token_verifies() {
        let now = 1_700_000_000;
        let token = mint_token(SECRET, now).unwrap();
        assert!(verify_token(SECRET, &token, now));
        assert!(verify_token(SECRET, &token, now + SESSION_TTL_SECS - 1));
    }

    #[test]
    fn test_expired_token_rejected() {
        let now = 1_700_000_000;
        let token = mint_token(SECRET, now).unwrap();
        assert!(!verify_token(SECRET, &token, now + SESSION_TTL_SECS));
        assert!(!verify_token(SECRET, &token, now + SESSION_TTL_SECS + 3600));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let now = 1_700_000_000;
        let token = mint_token(SECRET, now).unwrap();

        // Flip the last hex digit of the tag
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == '0' { '1' } else { '0' });
        assert!(!verify_token(SECRET, &tampered, now));

        // Extend the claimed expiry without re-signing
        let (_, tag) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", now + 10 * SESSION_TTL_SECS, tag);
        assert!(!verify_token(SECRET, &forged, now));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let now = 1_700_000_000;
        let token = mint_token(SECRET, now).unwrap();
        assert!(!verify_token("other-secret", &token, now));
    }

    #[test]
    fn test_garbage_tokens_rejected() {
        let now = 1_700_000_000;
        for garbage in ["", "abc", "123", "12.zz", ".", "999999999999999999999.aa"] {
            assert!(!verify_token(SECRET, garbage, now), "accepted {garbage:?}");
        }
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("tok");
        assert_eq!(cookie, "admin_session=tok; Max-Age=86400; Path=/; HttpOnly");
    }

    #[test]
    fn test_extract_session_token_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            "theme=dark; admin_session=tok123; lang=zh".parse().unwrap(),
        );
        assert_eq!(extract_session_token(&headers), Some("tok123".to_string()));

        let mut other = HeaderMap::new();
        other.insert(header::COOKIE, "theme=dark".parse().unwrap());
        assert_eq!(extract_session_token(&other), None);

        assert_eq!(extract_session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_has_valid_session_end_to_end() {
        let now = 1_700_000_000;
        let token = mint_token(SECRET, now).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            format!("admin_session={token}").parse().unwrap(),
        );
        assert!(has_valid_session(&headers, SECRET, now));
        assert!(!has_valid_session(&headers, SECRET, now + SESSION_TTL_SECS));
        assert!(!has_valid_session(&HeaderMap::new(), SECRET, now));
    }
}
