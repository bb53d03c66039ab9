//! Breathing single color

use core::fmt;

use rand::RngCore;

use super::{Effect, EffectInput, EffectOutput, TriangleEnvelope, hue_color};
use crate::color::Rgb;

/// Hue knob color fading between black and the brightness knob ceiling
#[derive(Debug, Clone, Default)]
pub struct PulseHueEffect {
    envelope: TriangleEnvelope,
}

impl PulseHueEffect {
    pub const fn new() -> Self {
        Self {
            envelope: TriangleEnvelope::new(),
        }
    }

    /// Brightness level the next frame will be shown at
    pub const fn level(&self) -> u8 {
        self.envelope.level()
    }
}

impl Effect for PulseHueEffect {
    fn render<R: RngCore>(
        &mut self,
        input: &EffectInput,
        _rng: &mut R,
        leds: &mut [Rgb],
    ) -> EffectOutput {
        let ceiling = input.brightness;
        leds.fill(self.envelope.apply(hue_color(input.hue), ceiling));
        self.envelope.advance(ceiling);

        EffectOutput {
            brightness: ceiling,
            delay: input.speed,
        }
    }

    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, " | level {}", self.envelope.level())
    }
}
