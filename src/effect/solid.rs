//! Solid hue fill
//!
//! Fills all LEDs with the fully saturated color under the hue knob.

use rand::RngCore;

use super::{Effect, EffectInput, EffectOutput, hue_color};
use crate::color::Rgb;

/// Single color from the hue knob, uniform across the strip
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidHueEffect;

impl Effect for SolidHueEffect {
    fn render<R: RngCore>(
        &mut self,
        input: &EffectInput,
        _rng: &mut R,
        leds: &mut [Rgb],
    ) -> EffectOutput {
        leds.fill(hue_color(input.hue));
        EffectOutput {
            brightness: input.brightness,
            delay: input.speed,
        }
    }
}
