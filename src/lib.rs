#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Debouncer`**: Leaky hysteresis filter turning noisy pin readings into a stable state
//! - **`PressLatch`** / **`Button`**: One press event per physical press, however long it is held
//! - **`ModeController`**: Round-robin mode selection plus the breathing color animation
//! - **`AnimationMode`**: A target color and the LED zones lit while the mode is active
//! - **`Waveform`**: 8-bit breathing curves (`Triangle`, `Quadratic`, `Cubic`)
//! - **`Badge`**: Trait to implement for your LED zone and RGB hardware
//! - **`RawInput`**: Trait to implement for your button pin
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`BadgeApp`**: Fixed-period main loop tying the pieces together
//!
//! Colors are `Srgb<u8>` and all blending is integer arithmetic, matching
//! what 8-bit PWM hardware can show.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

mod fmt;

pub mod animation;
pub mod app;
pub mod badge;
pub mod color;
pub mod debounce;
pub mod error;
pub mod ohs2024;
pub mod time;
pub mod waveform;
pub mod zone;

pub use animation::{AnimationBuilder, AnimationConfig, AnimationMode, ModeController};
pub use app::{BadgeApp, FixedTicker};
pub use badge::{Badge, CommonAnode};
pub use color::{BLACK, Rgb8, WHITE};
pub use debounce::{Button, DebounceConfig, Debouncer, Polarity, PressLatch, RawInput};
pub use error::ConfigError;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use waveform::Waveform;
pub use zone::{ZoneId, ZoneSet};
