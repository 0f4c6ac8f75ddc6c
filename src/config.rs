//! Site-wide configuration.

/// Address the feedback mail draft is composed for.
pub const FEEDBACK_EMAIL: &str = "hello@fixgaurd.online";

/// localStorage key holding the backup copy of feedback submissions.
pub const FEEDBACK_STORAGE_KEY: &str = "fixguard-feedback";

/// Endpoint feedback submissions are POSTed to, when one exists.
///
/// No backend is configured yet, so delivery always takes the mail draft +
/// local backup fallback. Wire a real endpoint here once the contract for it
/// lands.
pub fn feedback_endpoint() -> Option<&'static str> {
    None
}
