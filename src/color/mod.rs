mod gamma;
mod hsv;
mod palette;
mod warmth;

use smart_leds::RGB8;

pub use smart_leds::colors::{BLACK, WHITE};

pub use gamma::{apply_gamma, gamma8};
pub use hsv::hsv_to_rgb;
pub use palette::{FIRE_PALETTES, FirePalette, blend_hue};
pub use warmth::{WARMTH_MAX, WARMTH_STOPS, warmth_to_rgb};

pub type Rgb = RGB8;
