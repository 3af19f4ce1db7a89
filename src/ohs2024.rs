//! Profile for the Open Hardware Summit 2024 badge.
//!
//! Eight single-color anodes in three zones (two eyes, three body LEDs,
//! three head-ring LEDs) share one common-anode RGB cathode set, and a
//! single mode button pulls its pin low when pressed. The RGB channels must
//! be driven inverted, wrap the board's [`Badge`](crate::Badge) in
//! [`CommonAnode`](crate::CommonAnode).

use crate::animation::{AnimationConfig, AnimationMode};
use crate::color::{BLACK, Rgb8};
use crate::debounce::{DebounceConfig, Polarity};
use crate::error::ConfigError;
use crate::time::TimeDuration;
use crate::zone::{ZoneId, ZoneSet};
use palette::Srgb;

/// Both eye LEDs.
pub const EYES: ZoneId = ZoneId(0);
/// Right, center and left body LEDs.
pub const BODY: ZoneId = ZoneId(1);
/// Right, top and left head-ring LEDs.
pub const HEAD: ZoneId = ZoneId(2);

pub const EYES_COLOR: Rgb8 = Srgb::new(0, 200, 100);
pub const BODY_COLOR: Rgb8 = Srgb::new(200, 100, 0);
pub const HEAD_COLOR: Rgb8 = Srgb::new(100, 0, 200);

/// Number of display modes.
pub const MODE_COUNT: usize = 3;

/// Modes in button cycling order.
pub const MODES: [AnimationMode; MODE_COUNT] = [
    AnimationMode::new("eyes", EYES_COLOR, ZoneSet::of(&[EYES])),
    AnimationMode::new("body", BODY_COLOR, ZoneSet::of(&[BODY])),
    AnimationMode::new("head", HEAD_COLOR, ZoneSet::of(&[HEAD])),
];

/// One full breath.
pub const PERIOD_MS: u64 = 1_000;

/// Main loop tick (50 Hz).
pub const TICK_STEP_MS: u64 = 20;

pub const DEBOUNCE_INTERVAL_MICROS: u64 = 5_000;
pub const DEBOUNCE_SAMPLES: u16 = 20;

/// Debounce settings for the mode button (active low, 100 ms settle).
pub fn debounce_config<D: TimeDuration>() -> DebounceConfig<D> {
    DebounceConfig::new(
        D::from_micros(DEBOUNCE_INTERVAL_MICROS),
        DEBOUNCE_SAMPLES,
        Polarity::ActiveLow,
    )
}

/// Eyes, body, head; breathing up from black once per second.
pub fn animation_config<D: TimeDuration>() -> Result<AnimationConfig<D, MODE_COUNT>, ConfigError> {
    let mut builder = AnimationConfig::builder()
        .period(D::from_millis(PERIOD_MS))
        .base_color(BLACK);
    for mode in MODES {
        builder = builder.mode(mode)?;
    }
    builder.build()
}

/// Scheduler tick step.
pub fn tick_step<D: TimeDuration>() -> D {
    D::from_millis(TICK_STEP_MS)
}
