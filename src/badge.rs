//! Hardware abstraction for the badge's LED outputs.

use crate::color::{self, Rgb8};
use crate::zone::{ZoneId, ZoneSet};

/// Trait for abstracting the badge's LED hardware.
///
/// Implement this for your board (GPIO anodes, PWM cathodes, shift
/// registers, etc.) to let the animation controller drive it.
pub trait Badge {
    /// Enables or disables every LED in `zone`.
    fn set_zone_enabled(&mut self, zone: ZoneId, enabled: bool);

    /// Applies a color to all color-capable zones.
    ///
    /// `color` is the logical color (0 = off, 255 = full). Any electrical
    /// inversion belongs in the implementation, see [`CommonAnode`].
    /// Handle hardware errors internally - this method cannot fail.
    fn set_color(&mut self, color: Rgb8);

    /// Enables or disables every zone in `zones`.
    fn set_zones_enabled(&mut self, zones: ZoneSet, enabled: bool) {
        for zone in zones.iter() {
            self.set_zone_enabled(zone, enabled);
        }
    }
}

/// Adapter for common-anode wiring.
///
/// The wrapped badge receives `255 - value` for each channel, since a
/// common-anode LED is lit while its cathode PWM output is low.
#[derive(Debug)]
pub struct CommonAnode<B: Badge> {
    inner: B,
}

impl<B: Badge> CommonAnode<B> {
    /// Wraps a badge whose LEDs are wired common-anode.
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut B {
        &mut self.inner
    }

    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: Badge> Badge for CommonAnode<B> {
    fn set_zone_enabled(&mut self, zone: ZoneId, enabled: bool) {
        self.inner.set_zone_enabled(zone, enabled);
    }

    fn set_color(&mut self, color: Rgb8) {
        self.inner.set_color(color::invert(color));
    }
}

impl<B: Badge + ?Sized> Badge for &mut B {
    fn set_zone_enabled(&mut self, zone: ZoneId, enabled: bool) {
        (**self).set_zone_enabled(zone, enabled);
    }

    fn set_color(&mut self, color: Rgb8) {
        (**self).set_color(color);
    }
}
