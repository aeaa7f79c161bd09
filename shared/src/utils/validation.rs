//! Email validation and normalization utilities
//!
//! Every path that touches an email address (registration, login, OAuth
//! linking, lookups) must run it through [`normalize_email`] first so the
//! store-level uniqueness constraint compares like with like.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pragmatic email shape check; the real arbiter of deliverability is the
/// verification code sent to the address.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Normalize an email address for storage and comparison.
///
/// Trims surrounding whitespace and lowercases the whole address.
/// Uniqueness is case-insensitive, so only normalized addresses may be
/// stored or compared.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check whether a string looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    email.len() <= 254 && EMAIL_RE.is_match(email)
}
