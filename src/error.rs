//! Configuration errors.

/// Errors reported while validating startup configuration.
///
/// Ticking and sampling never fail; every check happens when a config is
/// built or applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Animation config has no modes.
    NoModes,

    /// Animation period is zero.
    ZeroPeriod,

    /// Debouncer requires at least one consistent sample to change state.
    ZeroConsistentSamples,

    /// Scheduler tick step is zero.
    ZeroTickStep,

    /// Mode list capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NoModes => {
                write!(f, "animation must have at least one mode")
            }
            ConfigError::ZeroPeriod => {
                write!(f, "animation period must be non-zero")
            }
            ConfigError::ZeroConsistentSamples => {
                write!(f, "debounce requires at least one consistent sample")
            }
            ConfigError::ZeroTickStep => {
                write!(f, "scheduler tick step must be non-zero")
            }
            ConfigError::CapacityExceeded => {
                write!(f, "mode capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
