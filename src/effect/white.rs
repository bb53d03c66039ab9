//! White light with warmth control
//!
//! The hue knob slides along a calibrated gradient from candlelight to
//! daylight instead of selecting a hue.

use core::fmt;

use embassy_time::Duration;
use rand::RngCore;

use super::{Effect, EffectInput, EffectOutput};
use crate::color::{BLACK, Rgb, WARMTH_MAX, apply_gamma, warmth_to_rgb};

const WHITE_DELAY: Duration = Duration::from_millis(10);

/// Uniform white at the warmth selected by the hue knob
#[derive(Debug, Clone)]
pub struct WhiteLightEffect {
    /// Warmth of the last frame (0-1023)
    warmth: u16,
    /// Color of the last frame before gamma correction
    color: Rgb,
}

impl Default for WhiteLightEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl WhiteLightEffect {
    pub const fn new() -> Self {
        Self {
            warmth: 0,
            color: BLACK,
        }
    }

    /// Warmth (0-1023) for a hue knob position
    #[allow(clippy::cast_possible_truncation)]
    pub const fn warmth_for_hue(hue: u16) -> u16 {
        (hue as u32 * WARMTH_MAX as u32 / u16::MAX as u32) as u16
    }

    /// Color of the last frame before gamma correction
    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl Effect for WhiteLightEffect {
    fn render<R: RngCore>(
        &mut self,
        input: &EffectInput,
        _rng: &mut R,
        leds: &mut [Rgb],
    ) -> EffectOutput {
        self.warmth = Self::warmth_for_hue(input.hue);
        self.color = warmth_to_rgb(self.warmth);
        leds.fill(apply_gamma(self.color));

        EffectOutput {
            brightness: input.brightness,
            delay: WHITE_DELAY,
        }
    }

    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(
            out,
            " | warmth {} -> RGB({},{},{})",
            self.warmth, self.color.r, self.color.g, self.color.b
        )
    }
}
