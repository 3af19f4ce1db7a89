//! Fixed-period scheduling and top-level wiring.
//!
//! [`BadgeApp`] is the polling main loop body: call
//! [`service`](BadgeApp::service) as often as you like and it samples the
//! button every time, but only advances the animation once per tick step.

use crate::animation::ModeController;
use crate::badge::Badge;
use crate::color::Rgb8;
use crate::debounce::{Button, RawInput};
use crate::error::ConfigError;
use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Gate that opens once per fixed step.
///
/// The reference point advances by exactly one step per opening, so a late
/// poll is followed by catch-up ticks and the long-run cadence stays exact.
#[derive(Debug, Clone, Copy)]
pub struct FixedTicker<I: TimeInstant> {
    step: I::Duration,
    last: I,
}

impl<I: TimeInstant> FixedTicker<I> {
    /// Creates a ticker whose first tick is due one `step` after `start`.
    ///
    /// # Errors
    /// * `ZeroTickStep` - `step` is zero
    pub fn new(step: I::Duration, start: I) -> Result<Self, ConfigError> {
        if step.as_micros() == 0 {
            return Err(ConfigError::ZeroTickStep);
        }
        Ok(Self { step, last: start })
    }

    /// Returns true if a tick is due at `now`, consuming it.
    pub fn poll(&mut self, now: I) -> bool {
        if now.duration_since(self.last).as_micros() < self.step.as_micros() {
            return false;
        }
        self.last = self.last.checked_add(self.step).unwrap_or(now);
        true
    }

    pub fn step(&self) -> I::Duration {
        self.step
    }
}

/// Button, animation and scheduler bundled into one polling loop.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `P` - Button input implementation type
/// * `B` - Badge output implementation type
/// * `M` - Maximum number of modes
pub struct BadgeApp<'t, I, T, P, B, const M: usize>
where
    I: TimeInstant,
    T: TimeSource<I>,
    P: RawInput,
    B: Badge,
{
    time_source: &'t T,
    button: Button<I, P>,
    controller: ModeController<B, I::Duration, M>,
    ticker: FixedTicker<I>,
}

impl<'t, I, T, P, B, const M: usize> BadgeApp<'t, I, T, P, B, M>
where
    I: TimeInstant,
    T: TimeSource<I>,
    P: RawInput,
    B: Badge,
{
    /// Creates the app. The first tick is due one `step` from now.
    ///
    /// # Errors
    /// * `ZeroTickStep` - `step` is zero
    pub fn new(
        time_source: &'t T,
        button: Button<I, P>,
        controller: ModeController<B, I::Duration, M>,
        step: I::Duration,
    ) -> Result<Self, ConfigError> {
        let ticker = FixedTicker::new(step, time_source.now())?;
        Ok(Self {
            time_source,
            button,
            controller,
            ticker,
        })
    }

    /// Runs one pass of the main loop.
    ///
    /// # Returns
    /// * `Some(color)` - A tick ran; the color now shown
    /// * `None` - No tick was due; only the button was sampled
    pub fn service(&mut self) -> Option<Rgb8> {
        let now = self.time_source.now();
        self.button.poll(now);

        if !self.ticker.poll(now) {
            return None;
        }
        let press = self.button.take_press();
        Some(self.controller.tick(self.ticker.step(), press))
    }

    pub fn button(&self) -> &Button<I, P> {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut Button<I, P> {
        &mut self.button
    }

    pub fn controller(&self) -> &ModeController<B, I::Duration, M> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ModeController<B, I::Duration, M> {
        &mut self.controller
    }
}
