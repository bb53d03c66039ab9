//! Single pixel running along the strip

use core::fmt;

use rand::RngCore;

use super::{Effect, EffectInput, EffectOutput, hue_color};
use crate::color::{BLACK, Rgb};

/// One lit pixel in the hue knob color, advancing one LED per frame
#[derive(Debug, Clone, Default)]
pub struct ChaseHueEffect {
    position: usize,
}

impl ChaseHueEffect {
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    /// Pixel lit by the next frame
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl Effect for ChaseHueEffect {
    fn render<R: RngCore>(
        &mut self,
        input: &EffectInput,
        _rng: &mut R,
        leds: &mut [Rgb],
    ) -> EffectOutput {
        let output = EffectOutput {
            brightness: input.brightness,
            delay: input.speed,
        };
        if leds.is_empty() {
            return output;
        }

        self.position %= leds.len();
        leds.fill(BLACK);
        leds[self.position] = hue_color(input.hue);
        self.position = (self.position + 1) % leds.len();

        output
    }

    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, " | position {}", self.position)
    }
}
