//! Sparse white flashes

use rand::{Rng, RngCore};

use super::{Effect, EffectInput, EffectOutput};
use crate::color::{BLACK, Rgb, WHITE, apply_gamma};

/// Pixels lit per frame (the same pixel may be picked twice)
pub const FLICKER_PIXELS: usize = 3;

/// A few random pixels in full white on a dark strip
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteFlickerEffect;

impl Effect for WhiteFlickerEffect {
    fn render<R: RngCore>(
        &mut self,
        input: &EffectInput,
        rng: &mut R,
        leds: &mut [Rgb],
    ) -> EffectOutput {
        leds.fill(BLACK);
        if !leds.is_empty() {
            for _ in 0..FLICKER_PIXELS {
                let index = rng.gen_range(0..leds.len());
                leds[index] = apply_gamma(WHITE);
            }
        }

        EffectOutput {
            brightness: u8::MAX,
            delay: input.speed,
        }
    }
}
