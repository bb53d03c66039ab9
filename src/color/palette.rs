//! Fire palettes and hue interpolation

/// Hue triple used by the fire gradient, from the base of the flame to the tip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirePalette {
    pub name: &'static str,
    /// Hue at the base (bottom third)
    pub inner: u16,
    /// Hue in the body of the flame
    pub middle: u16,
    /// Hue at the tip
    pub outer: u16,
}

/// Saturation reached at the very tip of the flame
const TIP_SATURATION: u8 = 170;

const ONE_THIRD: f32 = 1.0 / 3.0;
const TWO_THIRDS: f32 = 2.0 / 3.0;

pub const FIRE_PALETTES: [FirePalette; 6] = [
    FirePalette {
        name: "Classic Fire",
        inner: 0,
        middle: 5461,
        outer: 10923,
    },
    FirePalette {
        name: "Hot Fire",
        inner: 5461,
        middle: 10923,
        outer: 16384,
    },
    FirePalette {
        name: "Toxic Fire",
        inner: 21845,
        middle: 32768,
        outer: 43691,
    },
    FirePalette {
        name: "Purple Fire",
        inner: 49152,
        middle: 54613,
        outer: 60075,
    },
    FirePalette {
        name: "Ice Fire",
        inner: 43691,
        middle: 32768,
        outer: 16384,
    },
    FirePalette {
        name: "Inferno",
        inner: 60000,
        middle: 0,
        outer: 5461,
    },
];

impl FirePalette {
    /// Index of the palette selected by a hue knob position
    ///
    /// The hue circle is split into equal buckets, one per palette.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn index_for_hue(hue: u16) -> usize {
        ((hue as u32 * FIRE_PALETTES.len() as u32) >> 16) as usize
    }

    /// Palette selected by a hue knob position
    pub fn for_hue(hue: u16) -> Self {
        FIRE_PALETTES[Self::index_for_hue(hue)]
    }

    /// Hue and saturation at a vertical position (0.0 = base, 1.0 = tip)
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample(&self, position: f32) -> (u16, u8) {
        let position = position.clamp(0.0, 1.0);
        if position < ONE_THIRD {
            (self.inner, 255)
        } else if position < TWO_THIRDS {
            let t = (position - ONE_THIRD) * 3.0;
            (blend_hue(self.inner, self.middle, t), 255)
        } else {
            let t = ((position - TWO_THIRDS) * 3.0).min(1.0);
            let fade = f32::from(255 - TIP_SATURATION) * t;
            let sat = 255 - libm::roundf(fade) as u8;
            (blend_hue(self.middle, self.outer, t), sat)
        }
    }
}

/// Interpolate between two hues the short way around the circle
///
/// `t` is clamped to 0.0..=1.0. Blending across 0 wraps, so 60000 to 5461
/// stays in the reds. Hues exactly half a circle apart turn backwards.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn blend_hue(a: u16, b: u16, t: f32) -> u16 {
    let t = t.clamp(0.0, 1.0);
    let delta = f32::from(b.wrapping_sub(a) as i16);
    a.wrapping_add_signed(libm::roundf(delta * t) as i16)
}
