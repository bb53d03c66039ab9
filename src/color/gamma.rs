//! Perceptual gamma correction
//!
//! LEDs respond linearly to duty cycle while the eye does not, so mid-range
//! values look far too bright without correction. Correction goes through
//! `smart_leds::gamma`.

use core::iter;

use smart_leds::gamma;

use crate::color::Rgb;

/// Gamma-correct every channel of a color
pub fn apply_gamma(color: Rgb) -> Rgb {
    gamma(iter::once(color)).next().unwrap_or(color)
}

/// Gamma-correct a single channel
pub fn gamma8(value: u8) -> u8 {
    apply_gamma(Rgb {
        r: value,
        g: value,
        b: value,
    })
    .r
}
