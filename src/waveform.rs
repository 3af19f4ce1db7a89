//! Periodic brightness curves for breathing animations.
//!
//! All curves take an 8-bit phase (`0..=255` covers one full period) and
//! return an 8-bit brightness weight. They start and end at 0, peak at the
//! phase midpoint, and are mirror symmetric: `w(x) == w(255 - x)`.

/// Breathing curve shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Waveform {
    /// Linear rise and fall.
    Triangle,

    /// Triangle passed through a quadratic ease-in-out. Lingers at the
    /// extremes, which reads as a natural breath.
    #[default]
    Quadratic,

    /// Triangle passed through a cubic ease-in-out.
    Cubic,
}

impl Waveform {
    /// Samples the curve at an 8-bit phase.
    #[inline]
    pub fn sample(self, phase: u8) -> u8 {
        match self {
            Waveform::Triangle => triwave8(phase),
            Waveform::Quadratic => quadwave8(phase),
            Waveform::Cubic => cubicwave8(phase),
        }
    }

    /// Samples the curve at `phase` within a `period` of the same unit.
    #[inline]
    pub fn at_phase(self, phase: u64, period: u64) -> u8 {
        self.sample(phase_to_wave_input(phase, period))
    }
}

/// Maps a phase within `[0, period)` onto the 8-bit curve input,
/// `phase * 255 / period`.
///
/// Returns 0 for a zero period.
#[inline]
pub fn phase_to_wave_input(phase: u64, period: u64) -> u8 {
    if period == 0 {
        return 0;
    }
    let phase = phase % period;
    ((u128::from(phase) * 255) / u128::from(period)) as u8
}

/// Scales `i` by `scale / 256`, mapping `scale == 255` to identity.
#[inline]
pub fn scale8(i: u8, scale: u8) -> u8 {
    ((u16::from(i) * (1 + u16::from(scale))) >> 8) as u8
}

/// Triangle wave: `0 -> 254` over the first half, back to `0` over the second.
#[inline]
pub fn triwave8(x: u8) -> u8 {
    let x = if x & 0x80 != 0 { 255 - x } else { x };
    x << 1
}

/// Quadratic ease-in-out over the full 8-bit range.
#[inline]
pub fn ease8_in_out_quad(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj2 = scale8(j, j) << 1;
    if i & 0x80 != 0 { 255 - jj2 } else { jj2 }
}

/// Cubic ease-in-out over the full 8-bit range (`3x^2 - 2x^3`).
#[inline]
pub fn ease8_in_out_cubic(i: u8) -> u8 {
    let ii = scale8(i, i);
    let iii = scale8(ii, i);
    let r = 3 * u16::from(ii) - 2 * u16::from(iii);
    // 256 saturates
    if r & 0x100 != 0 { 255 } else { r as u8 }
}

/// Quadratic breathing wave.
#[inline]
pub fn quadwave8(x: u8) -> u8 {
    ease8_in_out_quad(triwave8(x))
}

/// Cubic breathing wave.
#[inline]
pub fn cubicwave8(x: u8) -> u8 {
    ease8_in_out_cubic(triwave8(x))
}
