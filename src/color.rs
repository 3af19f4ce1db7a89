//! 8-bit color helpers.
//!
//! The badge drives its LEDs with 8-bit PWM, so all colors here are
//! `Srgb<u8>` and every operation is integer only. Results reproduce the
//! hardware arithmetic exactly (truncating division by 255).

use palette::Srgb;

/// An 8-bit per channel RGB color.
pub type Rgb8 = Srgb<u8>;

/// All channels off.
pub const BLACK: Rgb8 = Srgb::new(0, 0, 0);

/// All channels at full scale.
pub const WHITE: Rgb8 = Srgb::new(255, 255, 255);

/// Blends `base` toward `target` by `amount` (0 = base, 255 = target).
///
/// Each channel is `base + (amount * (target - base)) / 255`, with signed
/// integer division truncating toward zero.
#[inline]
pub fn blend(base: Rgb8, target: Rgb8, amount: u8) -> Rgb8 {
    Srgb::new(
        blend_channel(base.red, target.red, amount),
        blend_channel(base.green, target.green, amount),
        blend_channel(base.blue, target.blue, amount),
    )
}

#[inline]
fn blend_channel(base: u8, target: u8, amount: u8) -> u8 {
    let base = i32::from(base);
    let delta = i32::from(target) - base;
    let value = base + (i32::from(amount) * delta) / 255;
    value.clamp(0, 255) as u8
}

/// Scales every channel by `brightness / 255`.
#[inline]
pub fn scale(color: Rgb8, brightness: u8) -> Rgb8 {
    let apply = |channel: u8| ((u16::from(channel) * u16::from(brightness)) / 255) as u8;
    Srgb::new(apply(color.red), apply(color.green), apply(color.blue))
}

/// Inverts every channel (`255 - value`).
///
/// Common-anode LEDs are lit by pulling the cathode low, so their PWM duty
/// is the complement of the logical channel value.
#[inline]
pub fn invert(color: Rgb8) -> Rgb8 {
    Srgb::new(255 - color.red, 255 - color.green, 255 - color.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let base = Srgb::new(10, 20, 30);
        let target = Srgb::new(200, 100, 0);
        assert_eq!(blend(base, target, 0), base);
        assert_eq!(blend(base, target, 255), target);
    }

    #[test]
    fn blend_truncates_toward_zero() {
        // 128 * 200 / 255 = 100.39 -> 100
        assert_eq!(blend(BLACK, Srgb::new(200, 0, 0), 128).red, 100);
        // Decreasing channel: 200 + (128 * -200) / 255 = 200 - 100 = 100
        assert_eq!(blend(Srgb::new(200, 0, 0), BLACK, 128).red, 100);
        // 1 * 100 / 255 = 0
        assert_eq!(blend(BLACK, Srgb::new(100, 0, 0), 1).red, 0);
    }

    #[test]
    fn blend_stays_between_endpoints() {
        let pairs = [(0u8, 255u8), (255, 0), (37, 201), (201, 37), (90, 90)];
        for (b, t) in pairs {
            let lo = b.min(t);
            let hi = b.max(t);
            for amount in 0..=255u8 {
                let value = blend(Srgb::new(b, b, b), Srgb::new(t, t, t), amount).red;
                assert!(value >= lo && value <= hi, "{} out of [{}, {}]", value, lo, hi);
            }
        }
    }

    #[test]
    fn scale_by_brightness() {
        assert_eq!(scale(WHITE, 255), WHITE);
        assert_eq!(scale(WHITE, 0), BLACK);
        assert_eq!(scale(Srgb::new(200, 100, 50), 128), Srgb::new(100, 50, 25));
    }

    #[test]
    fn invert_complements_channels() {
        assert_eq!(invert(BLACK), WHITE);
        assert_eq!(invert(Srgb::new(0, 200, 100)), Srgb::new(255, 55, 155));
    }
}
