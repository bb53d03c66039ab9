//! Triangle wave brightness envelope shared by the fading effects

use crate::{color::Rgb, math8::scale_ratio};

/// Level change per frame
pub const ENVELOPE_STEP: u8 = 5;

/// Brightness level bouncing between 0 and a moving ceiling
///
/// The ceiling is passed on every step, so turning the brightness knob
/// takes effect immediately. The level never leaves `0..=ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleEnvelope {
    level: u8,
    rising: bool,
}

impl Default for TriangleEnvelope {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangleEnvelope {
    /// Start at 0, rising
    pub const fn new() -> Self {
        Self {
            level: 0,
            rising: true,
        }
    }

    /// Current level
    pub const fn level(&self) -> u8 {
        self.level
    }

    pub const fn is_rising(&self) -> bool {
        self.rising
    }

    /// Move one step towards the current bound, reversing on reaching it
    pub fn advance(&mut self, ceiling: u8) {
        if self.level > ceiling {
            self.level = ceiling;
            self.rising = false;
            return;
        }

        if self.rising {
            self.level = self.level.saturating_add(ENVELOPE_STEP).min(ceiling);
            if self.level == ceiling {
                self.rising = false;
            }
        } else {
            self.level = self.level.saturating_sub(ENVELOPE_STEP);
            if self.level == 0 {
                self.rising = true;
            }
        }
    }

    /// Scale a color so that, shown at `ceiling` global brightness, it
    /// appears at the current level
    pub const fn apply(&self, color: Rgb, ceiling: u8) -> Rgb {
        Rgb {
            r: scale_ratio(color.r, self.level, ceiling),
            g: scale_ratio(color.g, self.level, ceiling),
            b: scale_ratio(color.b, self.level, ceiling),
        }
    }
}
