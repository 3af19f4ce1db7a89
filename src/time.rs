//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
///
/// Durations are exchanged in microseconds so that debounce intervals
/// shorter than a millisecond stay representable.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to microseconds.
    fn as_micros(&self) -> u64;

    /// Creates duration from microseconds.
    fn from_micros(micros: u64) -> Self;

    /// Converts duration to milliseconds (truncating).
    fn as_millis(&self) -> u64 {
        self.as_micros() / 1_000
    }

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self {
        Self::from_micros(millis.saturating_mul(1_000))
    }

    /// Subtracts `other`, saturating to `ZERO` instead of underflowing.
    fn saturating_sub(self, other: Self) -> Self {
        Self::from_micros(self.as_micros().saturating_sub(other.as_micros()))
    }
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Should saturate to `ZERO` if `earlier` is actually later.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, returns None on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;
}
