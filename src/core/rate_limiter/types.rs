//! Rate limiter types

/// Outcome of one admission check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the request is admitted
    pub allowed: bool,
    /// Requests in the window before this check
    pub current_count: u32,
    /// Maximum requests per window
    pub limit: u32,
    /// Remaining admissions in the window after this check
    pub remaining: u32,
    /// Seconds until a slot frees up (only set when not allowed)
    pub retry_after_secs: Option<u64>,
}

impl RateLimitDecision {
    pub(super) fn unlimited(limit: u32) -> Self {
        Self {
            allowed: true,
            current_count: 0,
            limit,
            remaining: limit,
            retry_after_secs: None,
        }
    }
}
