//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod chase;
mod envelope;
mod fire;
mod flicker;
mod off;
mod pulse;
mod rainbow;
mod solid;
mod white;

use core::fmt;

use embassy_time::Duration;
use rand::RngCore;

pub use chase::ChaseHueEffect;
pub use envelope::{ENVELOPE_STEP, TriangleEnvelope};
pub use fire::{DIM_CHANCE, FLICKER_FLOOR, FireEffect};
pub use flicker::{FLICKER_PIXELS, WhiteFlickerEffect};
pub use off::OffEffect;
pub use pulse::PulseHueEffect;
pub use rainbow::{RAINBOW_PHASE_STEP, RainbowFadeEffect};
pub use solid::SolidHueEffect;
pub use white::WhiteLightEffect;

use crate::color::{Rgb, apply_gamma, hsv_to_rgb};

/// Number of effects in the catalogue
pub const EFFECT_COUNT: u8 = 8;

const EFFECT_NAME_OFF: &str = "Off";
const EFFECT_NAME_WHITE_LIGHT: &str = "White Light";
const EFFECT_NAME_SOLID_HUE: &str = "Solid Hue";
const EFFECT_NAME_PULSE_HUE: &str = "Pulse Hue";
const EFFECT_NAME_CHASE_HUE: &str = "Chase Hue";
const EFFECT_NAME_RAINBOW_FADE: &str = "Rainbow Fade";
const EFFECT_NAME_FIRE: &str = "Fire Effect";
const EFFECT_NAME_WHITE_FLICKER: &str = "White Flicker";

const EFFECT_ID_OFF: u8 = 0;
const EFFECT_ID_WHITE_LIGHT: u8 = 1;
const EFFECT_ID_SOLID_HUE: u8 = 2;
const EFFECT_ID_PULSE_HUE: u8 = 3;
const EFFECT_ID_CHASE_HUE: u8 = 4;
const EFFECT_ID_RAINBOW_FADE: u8 = 5;
const EFFECT_ID_FIRE: u8 = 6;
const EFFECT_ID_WHITE_FLICKER: u8 = 7;

/// Conditioned control values available to an effect for one frame
#[derive(Debug, Clone, Copy)]
pub struct EffectInput {
    /// Brightness knob (0-255), the ceiling for the frame
    pub brightness: u8,
    /// Hue knob (0-65535)
    pub hue: u16,
    /// Inter-frame delay selected by the speed knob
    pub speed: Duration,
}

/// What an effect asks of the render service after drawing a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectOutput {
    /// Global brightness scalar for the frame
    pub brightness: u8,
    /// Time to wait before the next frame
    pub delay: Duration,
}

pub trait Effect {
    /// Render a single frame into `leds`
    ///
    /// Pixels are not cleared beforehand.
    fn render<R: RngCore>(
        &mut self,
        input: &EffectInput,
        rng: &mut R,
        leds: &mut [Rgb],
    ) -> EffectOutput;

    /// Write effect specific state for the status log
    fn describe(&self, _out: &mut dyn fmt::Write) -> fmt::Result {
        Ok(())
    }
}

/// Fully saturated, gamma-corrected color for a hue knob position
pub(crate) fn hue_color(hue: u16) -> Rgb {
    apply_gamma(hsv_to_rgb(hue, 255, 255))
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    Off(OffEffect),
    WhiteLight(WhiteLightEffect),
    SolidHue(SolidHueEffect),
    PulseHue(PulseHueEffect),
    ChaseHue(ChaseHueEffect),
    RainbowFade(RainbowFadeEffect),
    Fire(FireEffect),
    WhiteFlicker(WhiteFlickerEffect),
}

/// Known effect ids, in button cycling order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    #[default]
    Off = EFFECT_ID_OFF,
    WhiteLight = EFFECT_ID_WHITE_LIGHT,
    SolidHue = EFFECT_ID_SOLID_HUE,
    PulseHue = EFFECT_ID_PULSE_HUE,
    ChaseHue = EFFECT_ID_CHASE_HUE,
    RainbowFade = EFFECT_ID_RAINBOW_FADE,
    Fire = EFFECT_ID_FIRE,
    WhiteFlicker = EFFECT_ID_WHITE_FLICKER,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Off(OffEffect)
    }
}

impl EffectId {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_OFF => Self::Off,
            EFFECT_ID_WHITE_LIGHT => Self::WhiteLight,
            EFFECT_ID_SOLID_HUE => Self::SolidHue,
            EFFECT_ID_PULSE_HUE => Self::PulseHue,
            EFFECT_ID_CHASE_HUE => Self::ChaseHue,
            EFFECT_ID_RAINBOW_FADE => Self::RainbowFade,
            EFFECT_ID_FIRE => Self::Fire,
            EFFECT_ID_WHITE_FLICKER => Self::WhiteFlicker,
            _ => return None,
        })
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The effect after this one, wrapping back to `Off` after the last
    pub const fn next(self) -> Self {
        match Self::from_raw((self as u8 + 1) % EFFECT_COUNT) {
            Some(id) => id,
            None => Self::Off,
        }
    }

    /// Fresh effect with its initial state
    pub fn to_slot(self) -> EffectSlot {
        match self {
            Self::Off => EffectSlot::Off(OffEffect),
            Self::WhiteLight => EffectSlot::WhiteLight(WhiteLightEffect::new()),
            Self::SolidHue => EffectSlot::SolidHue(SolidHueEffect),
            Self::PulseHue => EffectSlot::PulseHue(PulseHueEffect::new()),
            Self::ChaseHue => EffectSlot::ChaseHue(ChaseHueEffect::new()),
            Self::RainbowFade => EffectSlot::RainbowFade(RainbowFadeEffect::new()),
            Self::Fire => EffectSlot::Fire(FireEffect::new()),
            Self::WhiteFlicker => EffectSlot::WhiteFlicker(WhiteFlickerEffect),
        }
    }

    /// Human readable name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => EFFECT_NAME_OFF,
            Self::WhiteLight => EFFECT_NAME_WHITE_LIGHT,
            Self::SolidHue => EFFECT_NAME_SOLID_HUE,
            Self::PulseHue => EFFECT_NAME_PULSE_HUE,
            Self::ChaseHue => EFFECT_NAME_CHASE_HUE,
            Self::RainbowFade => EFFECT_NAME_RAINBOW_FADE,
            Self::Fire => EFFECT_NAME_FIRE,
            Self::WhiteFlicker => EFFECT_NAME_WHITE_FLICKER,
        }
    }
}

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EffectSlot {
    /// Render the current effect
    pub fn render<R: RngCore>(
        &mut self,
        input: &EffectInput,
        rng: &mut R,
        leds: &mut [Rgb],
    ) -> EffectOutput {
        match self {
            Self::Off(effect) => effect.render(input, rng, leds),
            Self::WhiteLight(effect) => effect.render(input, rng, leds),
            Self::SolidHue(effect) => effect.render(input, rng, leds),
            Self::PulseHue(effect) => effect.render(input, rng, leds),
            Self::ChaseHue(effect) => effect.render(input, rng, leds),
            Self::RainbowFade(effect) => effect.render(input, rng, leds),
            Self::Fire(effect) => effect.render(input, rng, leds),
            Self::WhiteFlicker(effect) => effect.render(input, rng, leds),
        }
    }

    /// Write effect specific state for the status log
    pub fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Self::Off(effect) => effect.describe(out),
            Self::WhiteLight(effect) => effect.describe(out),
            Self::SolidHue(effect) => effect.describe(out),
            Self::PulseHue(effect) => effect.describe(out),
            Self::ChaseHue(effect) => effect.describe(out),
            Self::RainbowFade(effect) => effect.describe(out),
            Self::Fire(effect) => effect.describe(out),
            Self::WhiteFlicker(effect) => effect.describe(out),
        }
    }

    /// Get the effect ID for external observation
    pub const fn id(&self) -> EffectId {
        match self {
            Self::Off(_) => EffectId::Off,
            Self::WhiteLight(_) => EffectId::WhiteLight,
            Self::SolidHue(_) => EffectId::SolidHue,
            Self::PulseHue(_) => EffectId::PulseHue,
            Self::ChaseHue(_) => EffectId::ChaseHue,
            Self::RainbowFade(_) => EffectId::RainbowFade,
            Self::Fire(_) => EffectId::Fire,
            Self::WhiteFlicker(_) => EffectId::WhiteFlicker,
        }
    }
}
