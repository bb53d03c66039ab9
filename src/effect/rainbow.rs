//! Rainbow with a breathing envelope
//!
//! The whole hue circle is spread across the strip and slowly rotated while
//! the brightness fades in and out like `PulseHueEffect`.

use core::fmt;

use rand::RngCore;

use super::{Effect, EffectInput, EffectOutput, TriangleEnvelope, hue_color};
use crate::color::Rgb;

/// Phase advance per frame, in 16-bit hue units
pub const RAINBOW_PHASE_STEP: u16 = 127;

/// Full-strip rotating rainbow with triangle wave brightness
#[derive(Debug, Clone, Default)]
pub struct RainbowFadeEffect {
    /// Hue of the first pixel
    phase: u16,
    envelope: TriangleEnvelope,
}

impl RainbowFadeEffect {
    pub const fn new() -> Self {
        Self {
            phase: 0,
            envelope: TriangleEnvelope::new(),
        }
    }

    pub const fn phase(&self) -> u16 {
        self.phase
    }

    pub const fn level(&self) -> u8 {
        self.envelope.level()
    }
}

impl Effect for RainbowFadeEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render<R: RngCore>(
        &mut self,
        input: &EffectInput,
        _rng: &mut R,
        leds: &mut [Rgb],
    ) -> EffectOutput {
        let ceiling = input.brightness;
        let count = leds.len().max(1) as u32;

        for (i, led) in leds.iter_mut().enumerate() {
            let offset = ((i as u32) << 16) / count;
            let hue = self.phase.wrapping_add(offset as u16);
            *led = self.envelope.apply(hue_color(hue), ceiling);
        }

        self.envelope.advance(ceiling);
        self.phase = self.phase.wrapping_add(RAINBOW_PHASE_STEP);

        EffectOutput {
            brightness: ceiling,
            delay: input.speed,
        }
    }

    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, " | level {} | phase {}", self.envelope.level(), self.phase)
    }
}
