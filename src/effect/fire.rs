//! Fire simulation
//!
//! A vertical gradient through one of the fire palettes, base at pixel 0,
//! with independent random flicker on every pixel.

use core::fmt;

use embassy_time::Duration;
use rand::{Rng, RngCore};

use super::{Effect, EffectInput, EffectOutput};
use crate::color::{FIRE_PALETTES, FirePalette, Rgb, apply_gamma, hsv_to_rgb};

/// Lowest flicker value, 60% of full
pub const FLICKER_FLOOR: u8 = 153;
/// Chance of a pixel dropping to half its flicker value
pub const DIM_CHANCE: f64 = 0.3;

/// Fire gradient from the palette under the hue knob
#[derive(Debug, Clone, Default)]
pub struct FireEffect {
    /// Palette used by the last frame
    palette: usize,
}

impl FireEffect {
    pub const fn new() -> Self {
        Self { palette: 0 }
    }

    /// Palette used by the last frame
    pub const fn palette(&self) -> FirePalette {
        FIRE_PALETTES[self.palette]
    }
}

impl Effect for FireEffect {
    #[allow(clippy::cast_precision_loss)]
    fn render<R: RngCore>(
        &mut self,
        input: &EffectInput,
        rng: &mut R,
        leds: &mut [Rgb],
    ) -> EffectOutput {
        self.palette = FirePalette::index_for_hue(input.hue);
        let palette = FIRE_PALETTES[self.palette];
        let top = leds.len().saturating_sub(1);

        for (i, led) in leds.iter_mut().enumerate() {
            let position = if top == 0 {
                0.0
            } else {
                i as f32 / top as f32
            };
            let (hue, sat) = palette.sample(position);

            let mut val = rng.gen_range(FLICKER_FLOOR..=u8::MAX);
            if rng.gen_bool(DIM_CHANCE) {
                val /= 2;
            }

            *led = apply_gamma(hsv_to_rgb(hue, sat, val));
        }

        // Fire runs at twice the pace of the speed knob
        let delay = Duration::from_ticks(input.speed.as_ticks() / 2);
        EffectOutput {
            brightness: input.brightness,
            delay,
        }
    }

    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, " | palette {}: {}", self.palette, self.palette().name)
    }
}
