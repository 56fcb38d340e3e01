//! Passcode gate for the pipeline.
//!
//! A successful check issues an [`AccessToken`] scoped to the current run.
//! The token has no public constructor, so a profile search cannot be
//! reached without passing through [`authorize`] first. Nothing is persisted.

/// Proof that the caller supplied the correct passcode.
#[derive(Debug)]
pub struct AccessToken {
    _private: (),
}

/// Compares the supplied passcode against the configured one and mints a
/// token on a match.
pub fn authorize(input: &str, expected: &str) -> Option<AccessToken> {
    if input == expected {
        Some(AccessToken { _private: () })
    } else {
        None
    }
}
