//! Strip switched off

use embassy_time::Duration;
use rand::RngCore;

use super::{Effect, EffectInput, EffectOutput};
use crate::color::{BLACK, Rgb};

const OFF_DELAY: Duration = Duration::from_millis(100);

/// All pixels black at zero brightness
#[derive(Debug, Clone, Copy, Default)]
pub struct OffEffect;

impl Effect for OffEffect {
    fn render<R: RngCore>(
        &mut self,
        _input: &EffectInput,
        _rng: &mut R,
        leds: &mut [Rgb],
    ) -> EffectOutput {
        leds.fill(BLACK);
        EffectOutput {
            brightness: 0,
            delay: OFF_DELAY,
        }
    }
}
