//! Mode selection and breathing color animation.
//!
//! [`ModeController`] owns the badge outputs and a fixed, ordered list of
//! [`AnimationMode`]s. Every tick advances a periodic phase clock, samples
//! the breathing [`Waveform`] and blends the base color toward the current
//! mode's color. A press edge advances to the next mode (wrapping), swapping
//! the lit zones and the target color without restarting the phase.

use crate::badge::Badge;
use crate::color::{self, BLACK, Rgb8};
use crate::error::ConfigError;
use crate::fmt;
use crate::time::TimeDuration;
use crate::waveform::Waveform;
use crate::zone::ZoneSet;
use heapless::Vec;

/// One display mode: which zones are lit and what color they breathe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationMode {
    /// Short label, used in logs.
    pub name: &'static str,

    /// Color reached at peak brightness.
    pub color: Rgb8,

    /// Zones lit while this mode is active.
    pub zones: ZoneSet,
}

impl AnimationMode {
    /// Creates a mode.
    pub const fn new(name: &'static str, color: Rgb8, zones: ZoneSet) -> Self {
        Self { name, color, zones }
    }
}

/// Validated animation parameters.
///
/// # Type Parameters
/// * `D` - The duration type
/// * `M` - Maximum number of modes
#[derive(Debug, Clone)]
pub struct AnimationConfig<D: TimeDuration, const M: usize> {
    modes: Vec<AnimationMode, M>,
    period: D,
    base_color: Rgb8,
    waveform: Waveform,
}

impl<D: TimeDuration, const M: usize> AnimationConfig<D, M> {
    /// Creates a new config builder.
    pub fn builder() -> AnimationBuilder<D, M> {
        AnimationBuilder::new()
    }

    /// Returns the modes in cycling order.
    pub fn modes(&self) -> &[AnimationMode] {
        &self.modes
    }

    /// Returns the number of modes (always at least one).
    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }

    /// Returns the breathing period.
    pub fn period(&self) -> D {
        self.period
    }

    /// Returns the color shown at minimum brightness.
    pub fn base_color(&self) -> Rgb8 {
        self.base_color
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Union of the zones of every mode.
    pub fn all_zones(&self) -> ZoneSet {
        self.modes
            .iter()
            .fold(ZoneSet::empty(), |acc, mode| acc.union(mode.zones))
    }
}

/// Builder for [`AnimationConfig`].
///
/// Defaults: 1000 ms period, black base color, [`Waveform::Quadratic`].
#[derive(Debug)]
pub struct AnimationBuilder<D: TimeDuration, const M: usize> {
    modes: Vec<AnimationMode, M>,
    period: D,
    base_color: Rgb8,
    waveform: Waveform,
}

impl<D: TimeDuration, const M: usize> AnimationBuilder<D, M> {
    /// Breathing period used when none is set.
    pub const DEFAULT_PERIOD_MS: u64 = 1_000;

    pub fn new() -> Self {
        Self {
            modes: Vec::new(),
            period: D::from_millis(Self::DEFAULT_PERIOD_MS),
            base_color: BLACK,
            waveform: Waveform::default(),
        }
    }

    /// Appends a mode to the cycle.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than `M` modes
    pub fn mode(mut self, mode: AnimationMode) -> Result<Self, ConfigError> {
        self.modes
            .push(mode)
            .map_err(|_| ConfigError::CapacityExceeded)?;
        Ok(self)
    }

    /// Sets the length of one fade in/out cycle.
    pub fn period(mut self, period: D) -> Self {
        self.period = period;
        self
    }

    /// Sets the color shown at minimum brightness.
    pub fn base_color(mut self, color: Rgb8) -> Self {
        self.base_color = color;
        self
    }

    pub fn waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    /// Builds and validates the config.
    ///
    /// # Errors
    /// * `NoModes` - No modes were added
    /// * `ZeroPeriod` - The period is zero
    pub fn build(self) -> Result<AnimationConfig<D, M>, ConfigError> {
        if self.modes.is_empty() {
            return Err(ConfigError::NoModes);
        }
        if self.period.as_micros() == 0 {
            return Err(ConfigError::ZeroPeriod);
        }

        Ok(AnimationConfig {
            modes: self.modes,
            period: self.period,
            base_color: self.base_color,
            waveform: self.waveform,
        })
    }
}

impl<D: TimeDuration, const M: usize> Default for AnimationBuilder<D, M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives the badge through its modes with a breathing color animation.
///
/// # Type Parameters
/// * `B` - Badge output implementation
/// * `D` - Duration type
/// * `M` - Maximum number of modes
pub struct ModeController<B: Badge, D: TimeDuration, const M: usize> {
    badge: B,
    config: AnimationConfig<D, M>,
    mode_index: usize,
    // Microseconds, always in [0, period).
    phase: u64,
    brightness: u8,
    current_color: Rgb8,
}

impl<B: Badge, D: TimeDuration, const M: usize> ModeController<B, D, M> {
    /// Creates a controller in mode 0 at phase 0.
    ///
    /// Zones used by any other mode are switched off, the first mode's zones
    /// are switched on and the phase-0 color is written to the badge.
    pub fn new(config: AnimationConfig<D, M>, mut badge: B) -> Self {
        let first = config.modes[0];
        badge.set_zones_enabled(config.all_zones(), false);
        badge.set_zones_enabled(first.zones, true);

        let brightness = config.waveform.at_phase(0, config.period.as_micros());
        let current_color = color::blend(config.base_color, first.color, brightness);
        badge.set_color(current_color);

        fmt::debug!("starting in mode {}", first.name);

        Self {
            badge,
            config,
            mode_index: 0,
            phase: 0,
            brightness,
            current_color,
        }
    }

    /// Advances the animation by `elapsed` and returns the color to show.
    ///
    /// With `press_edge` set, first switches to the next mode. The badge
    /// color is only rewritten when it changes.
    pub fn tick(&mut self, elapsed: D, press_edge: bool) -> Rgb8 {
        if press_edge {
            self.advance_mode();
        }

        let period = self.config.period.as_micros();
        self.phase = (self.phase + elapsed.as_micros() % period) % period;

        self.brightness = self.config.waveform.at_phase(self.phase, period);
        let new_color = color::blend(self.config.base_color, self.target_color(), self.brightness);

        if new_color != self.current_color {
            self.badge.set_color(new_color);
            self.current_color = new_color;
        }

        self.current_color
    }

    fn advance_mode(&mut self) {
        let previous = self.config.modes[self.mode_index];
        self.mode_index = (self.mode_index + 1) % self.config.modes.len();
        let next = self.config.modes[self.mode_index];

        // Off before on, so zones shared by both modes stay lit.
        self.badge.set_zones_enabled(previous.zones, false);
        self.badge.set_zones_enabled(next.zones, true);

        fmt::debug!("mode {} -> {}", previous.name, next.name);
    }

    /// Index of the active mode.
    pub fn mode_index(&self) -> usize {
        self.mode_index
    }

    /// The active mode.
    pub fn mode(&self) -> &AnimationMode {
        &self.config.modes[self.mode_index]
    }

    /// Position within the breathing period.
    pub fn phase(&self) -> D {
        D::from_micros(self.phase)
    }

    /// Brightness weight applied on the last update.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Color the animation fades toward.
    pub fn target_color(&self) -> Rgb8 {
        self.mode().color
    }

    /// Color last written to the badge.
    pub fn current_color(&self) -> Rgb8 {
        self.current_color
    }

    pub fn config(&self) -> &AnimationConfig<D, M> {
        &self.config
    }

    pub fn badge(&self) -> &B {
        &self.badge
    }

    pub fn badge_mut(&mut self) -> &mut B {
        &mut self.badge
    }

    /// Releases the badge.
    pub fn into_badge(self) -> B {
        self.badge
    }
}
