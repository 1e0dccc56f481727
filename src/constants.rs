//! Fixed policy constants for association retry and liveness signaling.
//!
//! These mirror the driver vendor's recommended values for station bring-up
//! and watchdog handling.

/// Association retry limits.
pub mod retries {
    /// Maximum association attempts before `connect` gives up.
    pub const MAX_CONNECT_ATTEMPTS: u32 = 15;
}

/// Delay constants for the association path.
pub mod timeouts {
    use std::time::Duration;

    /// Fixed wait between two association attempts (500 ms).
    ///
    /// Applied strictly between attempts: never before the first one and
    /// never after the last failure is reported.
    const CONNECT_RETRY_DELAY_MS: u64 = 500;

    /// Returns the inter-attempt association delay.
    pub fn connect_retry_delay() -> Duration {
        Duration::from_millis(CONNECT_RETRY_DELAY_MS)
    }
}

/// Liveness-deadline signaling.
pub mod liveness {
    use std::time::Duration;

    /// Period of the deadline-extension timer (4 seconds).
    const EXTEND_PERIOD_MS: u64 = 4000;

    /// Units by which each tick pushes the hardware deadline forward.
    pub const EXTEND_MARGIN: u32 = 5;

    /// Returns the deadline-extension period.
    pub fn extend_period() -> Duration {
        Duration::from_millis(EXTEND_PERIOD_MS)
    }
}
