use thiserror::Error;

/// Substrings that mark an unstructured provider message as quota exhaustion.
/// Matching is literal and case-sensitive: Gemini reports quota failures as an
/// HTTP 429, a "quota exceeded" message, or a RESOURCE_EXHAUSTED status string.
/// If the provider ever rewords its errors this table is the place to extend.
pub const RATE_LIMIT_MARKERS: &[&str] = &["429", "quota", "RESOURCE_EXHAUSTED"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// Request quota exhausted; recoverable with a locally built demo plan.
    RateLimited,
    /// Network or TLS level failure before a response arrived.
    Transport,
    /// Anything else the provider sent back.
    Unknown,
}

/// Failure of one outbound generation call. The kind is classified here, at
/// the provider boundary, so callers never re-derive it from message text.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::RateLimited,
            message: message.into(),
        }
    }

    /// Build an error from free-form provider text, upgrading the kind to
    /// `RateLimited` when the marker table matches.
    pub fn classified(message: impl Into<String>, fallback_kind: ProviderErrorKind) -> Self {
        let message = message.into();
        let kind = if is_rate_limited(&message) {
            ProviderErrorKind::RateLimited
        } else {
            fallback_kind
        };
        Self { kind, message }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.kind == ProviderErrorKind::RateLimited
    }
}

/// True iff the message contains any rate-limit marker anywhere in the text.
pub fn is_rate_limited(message: &str) -> bool {
    RATE_LIMIT_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}
