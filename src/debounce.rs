//! Digital input debouncing.
//!
//! [`Debouncer`] turns a noisy stream of raw pin readings into a stable
//! logical state using a leaky hysteresis counter: each sample that
//! disagrees with the stable state adds one count, each sample that agrees
//! removes one, and the state flips once the count reaches the configured
//! threshold. An isolated noise spike therefore only delays a transition
//! instead of resetting the evidence collected so far.
//!
//! [`PressLatch`] and [`Button`] layer press-edge detection on top, so
//! holding a button down yields exactly one press event.

use crate::error::ConfigError;
use crate::fmt;
use crate::time::{TimeDuration, TimeInstant};

/// Input collaborator: a polled digital input.
pub trait RawInput {
    /// Reads the electrical level of the input (`true` = high).
    fn read_raw(&mut self) -> bool;
}

impl<P: RawInput + ?Sized> RawInput for &mut P {
    fn read_raw(&mut self) -> bool {
        (**self).read_raw()
    }
}

/// Electrical level that means "active".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// High level is active.
    #[default]
    ActiveHigh,

    /// Low level is active (e.g. a button to ground with a pull-up).
    ActiveLow,
}

impl Polarity {
    /// Normalizes a raw level so that `true` means logically active.
    #[inline]
    pub fn is_active(self, raw: bool) -> bool {
        raw != (self == Polarity::ActiveLow)
    }
}

/// Debounce parameters. Immutable once applied to a [`Debouncer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig<D: TimeDuration> {
    /// Minimum time between two samples.
    pub sample_interval: D,

    /// Net disagreeing samples needed to flip the stable state.
    pub required_consistent_samples: u16,

    /// Which electrical level counts as active.
    pub polarity: Polarity,
}

impl<D: TimeDuration> DebounceConfig<D> {
    /// Sample count used when none is given.
    pub const DEFAULT_REQUIRED_SAMPLES: u16 = 8;

    /// Sample interval used when none is given, in microseconds.
    pub const DEFAULT_INTERVAL_MICROS: u64 = 2_000;

    /// Creates a config.
    pub fn new(sample_interval: D, required_consistent_samples: u16, polarity: Polarity) -> Self {
        Self {
            sample_interval,
            required_consistent_samples,
            polarity,
        }
    }

    /// Checks the config.
    ///
    /// # Errors
    /// * `ZeroConsistentSamples` - `required_consistent_samples` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.required_consistent_samples == 0 {
            return Err(ConfigError::ZeroConsistentSamples);
        }
        Ok(())
    }

    /// Shortest time an input must stay changed before the stable state
    /// can follow it.
    pub fn settle_time(&self) -> D {
        D::from_micros(
            self.sample_interval
                .as_micros()
                .saturating_mul(u64::from(self.required_consistent_samples)),
        )
    }
}

impl<D: TimeDuration> Default for DebounceConfig<D> {
    fn default() -> Self {
        Self::new(
            D::from_micros(Self::DEFAULT_INTERVAL_MICROS),
            Self::DEFAULT_REQUIRED_SAMPLES,
            Polarity::ActiveHigh,
        )
    }
}

/// Leaky hysteresis debouncer for one digital input.
///
/// # Type Parameters
/// * `I` - Time instant type
#[derive(Debug, Clone)]
pub struct Debouncer<I: TimeInstant> {
    config: DebounceConfig<I::Duration>,
    stable: bool,
    count: u16,
    last_sample: Option<I>,
}

impl<I: TimeInstant> Debouncer<I> {
    /// Creates a debouncer in the inactive state.
    ///
    /// # Errors
    /// * `ZeroConsistentSamples` - see [`DebounceConfig::validate`]
    pub fn new(config: DebounceConfig<I::Duration>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            stable: false,
            count: 0,
            last_sample: None,
        })
    }

    /// Replaces the parameters and resets to the inactive state.
    ///
    /// On error the debouncer keeps its previous config and state.
    pub fn configure(&mut self, config: DebounceConfig<I::Duration>) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.reset(false);
        Ok(())
    }

    /// Forces the stable state and clears accumulated evidence.
    ///
    /// The next call to [`sample`](Self::sample) always takes a measurement.
    pub fn reset(&mut self, active: bool) {
        self.stable = active;
        self.count = 0;
        self.last_sample = None;
    }

    /// Feeds one raw reading and returns the stable logical state.
    ///
    /// If less than `sample_interval` has passed since the last measurement,
    /// the reading is ignored and the previous state is returned unchanged.
    pub fn sample(&mut self, raw: bool, now: I) -> bool {
        if let Some(last) = self.last_sample {
            if now.duration_since(last).as_micros() < self.config.sample_interval.as_micros() {
                return self.stable;
            }
        }
        self.last_sample = Some(now);

        let measured = self.config.polarity.is_active(raw);
        if measured == self.stable {
            self.count = self.count.saturating_sub(1);
        } else {
            self.count += 1;
            if self.count >= self.config.required_consistent_samples {
                self.stable = measured;
                self.count = 0;
                fmt::debug!("debounced input -> {}", measured);
            }
        }

        self.stable
    }

    /// Returns the stable logical state without sampling.
    pub fn is_active(&self) -> bool {
        self.stable
    }

    /// Returns the accumulated disagreement count.
    pub fn pending_count(&self) -> u16 {
        self.count
    }

    pub fn config(&self) -> &DebounceConfig<I::Duration> {
        &self.config
    }
}

/// Detects press edges on a debounced signal.
///
/// Reports `true` once when the signal becomes active and re-arms only
/// after it has been seen inactive again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressLatch {
    held: bool,
}

impl PressLatch {
    /// Creates a released latch.
    pub const fn new() -> Self {
        Self { held: false }
    }

    /// Feeds the current debounced state; returns true on a press edge.
    #[inline]
    pub fn update(&mut self, active: bool) -> bool {
        let edge = active && !self.held;
        self.held = active;
        edge
    }

    /// Returns true while the press that produced the last edge is held.
    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// A debounced button with press-edge detection.
///
/// [`poll`](Self::poll) may run as often as the main loop spins; a press
/// seen there stays pending until [`take_press`](Self::take_press) consumes
/// it, so a slower consumer still gets exactly one event per press.
pub struct Button<I: TimeInstant, P: RawInput> {
    input: P,
    debouncer: Debouncer<I>,
    latch: PressLatch,
    pending: bool,
}

impl<I: TimeInstant, P: RawInput> Button<I, P> {
    /// Creates a button over `input`.
    ///
    /// # Errors
    /// * `ZeroConsistentSamples` - see [`DebounceConfig::validate`]
    pub fn new(input: P, config: DebounceConfig<I::Duration>) -> Result<Self, ConfigError> {
        Ok(Self {
            input,
            debouncer: Debouncer::new(config)?,
            latch: PressLatch::new(),
            pending: false,
        })
    }

    /// Reads the input, updates the debouncer and returns the stable state.
    pub fn poll(&mut self, now: I) -> bool {
        let raw = self.input.read_raw();
        let active = self.debouncer.sample(raw, now);
        if self.latch.update(active) {
            fmt::trace!("press edge");
            self.pending = true;
        }
        active
    }

    /// Consumes a pending press, returning whether there was one.
    pub fn take_press(&mut self) -> bool {
        core::mem::take(&mut self.pending)
    }

    /// Returns the stable state from the last poll.
    pub fn is_pressed(&self) -> bool {
        self.debouncer.is_active()
    }

    pub fn debouncer(&self) -> &Debouncer<I> {
        &self.debouncer
    }

    pub fn input_mut(&mut self) -> &mut P {
        &mut self.input
    }
}
