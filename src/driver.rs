//! LED strip output
//!
//! The engine talks to the strip through [`OutputDriver`]. Any
//! `smart-leds` writer (WS2812 over SPI, RMT, PIO, ...) can be plugged in
//! with [`SmartLedsOutput`]; the wire color order is the writer's business.

use core::iter;

use smart_leds::{SmartLedsWrite, brightness};

use crate::color::{BLACK, Rgb};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait.
pub trait OutputDriver {
    type Error;

    /// Write colors to the LED strip at the given global brightness
    fn write(&mut self, colors: &[Rgb], brightness: u8) -> Result<(), Self::Error>;

    /// Turn every LED off
    fn clear(&mut self) -> Result<(), Self::Error>;
}

/// [`OutputDriver`] for a `smart-leds` writer driving `N` LEDs
///
/// Brightness is applied in software before the colors are handed over.
pub struct SmartLedsOutput<W, const N: usize> {
    writer: W,
}

impl<W, const N: usize> SmartLedsOutput<W, N> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> OutputDriver for SmartLedsOutput<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    type Error = W::Error;

    fn write(&mut self, colors: &[Rgb], level: u8) -> Result<(), Self::Error> {
        self.writer.write(brightness(colors.iter().copied(), level))
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.writer.write(iter::repeat_n(BLACK, N))
    }
}
