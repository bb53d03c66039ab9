use crate::color::Rgb;

/// Number of discrete steps around the hue circle (6 sectors of 255)
const HUE_STEPS: u32 = 1530;

/// Convert a 16-bit HSV color to RGB
///
/// `hue` covers the full circle (0..=65535 maps to 0..360 degrees), so it
/// wraps naturally with `wrapping_add`. `sat` and `val` are 0-255.
#[allow(clippy::cast_possible_truncation)]
pub fn hsv_to_rgb(hue: u16, sat: u8, val: u8) -> Rgb {
    // Re-map 0..65535 onto 0..1529 with rounding
    let hue = (u32::from(hue) * HUE_STEPS + 0x8000) >> 16;

    let (r, g, b): (u16, u16, u16) = match hue {
        // Red to yellow
        0..=254 => (255, hue as u16, 0),
        // Yellow to green
        255..=509 => (510 - hue as u16, 255, 0),
        // Green to cyan
        510..=764 => (0, 255, hue as u16 - 510),
        // Cyan to blue
        765..=1019 => (0, 1020 - hue as u16, 255),
        // Blue to magenta
        1020..=1274 => (hue as u16 - 1020, 0, 255),
        // Magenta to red
        1275..=1529 => (255, 0, 1530 - hue as u16),
        _ => (255, 0, 0),
    };

    let s1 = 1 + u16::from(sat);
    let s2 = u16::from(255 - sat);
    let v1 = 1 + u16::from(val);
    let channel = |c: u16| ((((c * s1) >> 8) + s2) * v1 >> 8) as u8;

    Rgb {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}
