//! White light gradient from candlelight to daylight

use crate::{color::Rgb, math8::map_range};

/// Largest warmth value; anything above is treated as this
pub const WARMTH_MAX: u16 = 1023;

/// Calibrated (warmth, color) breakpoints, warm to cool
pub const WARMTH_STOPS: [(u16, Rgb); 8] = [
    // Candlelight
    (0, rgb(255, 147, 41)),
    // Warm amber
    (146, rgb(255, 169, 87)),
    (292, rgb(255, 197, 143)),
    (438, rgb(255, 214, 170)),
    // Warm white
    (585, rgb(255, 241, 224)),
    (731, rgb(245, 243, 255)),
    (877, rgb(225, 235, 255)),
    // Daylight
    (WARMTH_MAX, rgb(201, 226, 255)),
];

const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

/// Interpolate the white gradient at `warmth` (0 = warmest, 1023 = coolest)
pub fn warmth_to_rgb(warmth: u16) -> Rgb {
    let warmth = warmth.min(WARMTH_MAX);

    let segment = WARMTH_STOPS
        .windows(2)
        .position(|pair| warmth < pair[1].0)
        .unwrap_or(WARMTH_STOPS.len() - 2);
    let (from_pos, from) = WARMTH_STOPS[segment];
    let (to_pos, to) = WARMTH_STOPS[segment + 1];

    let lerp = |a: u8, b: u8| {
        let value = map_range(
            i32::from(warmth),
            i32::from(from_pos),
            i32::from(to_pos),
            i32::from(a),
            i32::from(b),
        );
        u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX)
    };

    Rgb {
        r: lerp(from.r, to.r),
        g: lerp(from.g, to.g),
        b: lerp(from.b, to.b),
    }
}
