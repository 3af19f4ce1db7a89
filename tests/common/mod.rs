//! Shared test infrastructure for breathing-badge integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use breathing_badge::{Badge, RawInput, Rgb8, TimeDuration, TimeInstant, TimeSource, ZoneId};
use core::cell::Cell;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps microseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TestDuration {
    pub fn ms(millis: u64) -> Self {
        TestDuration(millis * 1_000)
    }
}

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_micros(&self) -> u64 {
        self.0
    }

    fn from_micros(micros: u64) -> Self {
        TestDuration(micros)
    }
}

/// Mock instant type for testing (microseconds since boot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Badge
// ============================================================================

/// Mock badge that records zone switching and color writes
pub struct MockBadge {
    zones: [bool; 8],
    zone_writes: usize,
    current_color: Rgb8,
    color_history: heapless::Vec<Rgb8, 64>,
}

impl MockBadge {
    pub fn new() -> Self {
        Self {
            zones: [false; 8],
            zone_writes: 0,
            current_color: Rgb8::new(0, 0, 0),
            color_history: heapless::Vec::new(),
        }
    }

    pub fn is_enabled(&self, zone: ZoneId) -> bool {
        self.zones[usize::from(zone.0)]
    }

    /// Ids of all enabled zones, ascending
    pub fn enabled_zones(&self) -> heapless::Vec<u8, 8> {
        (0..8u8).filter(|id| self.zones[usize::from(*id)]).collect()
    }

    pub fn zone_writes(&self) -> usize {
        self.zone_writes
    }

    pub fn get_last_color(&self) -> Rgb8 {
        self.current_color
    }

    pub fn color_history(&self) -> &[Rgb8] {
        &self.color_history
    }

    pub fn clear_history(&mut self) {
        self.color_history.clear();
    }
}

impl Badge for MockBadge {
    fn set_zone_enabled(&mut self, zone: ZoneId, enabled: bool) {
        self.zones[usize::from(zone.0)] = enabled;
        self.zone_writes += 1;
    }

    fn set_color(&mut self, color: Rgb8) {
        self.current_color = color;
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Mock Input
// ============================================================================

/// Mock button pin whose level can be changed through a shared reference
pub struct MockInput<'a> {
    level: &'a Cell<bool>,
    reads: usize,
}

impl<'a> MockInput<'a> {
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self { level, reads: 0 }
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl RawInput for MockInput<'_> {
    fn read_raw(&mut self) -> bool {
        self.reads += 1;
        self.level.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn rgb(red: u8, green: u8, blue: u8) -> Rgb8 {
    Rgb8::new(red, green, blue)
}

/// Deterministic pseudo-random bit stream (xorshift32)
pub struct NoiseSource(u32);

impl NoiseSource {
    pub fn new(seed: u32) -> Self {
        NoiseSource(seed.max(1))
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    pub fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }
}
