use crate::color::{BLACK, Rgb};

/// One complete set of pixel colors plus the global brightness scalar
///
/// `N` is the number of LEDs in the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<const N: usize> {
    pub pixels: [Rgb; N],
    pub brightness: u8,
}

impl<const N: usize> Frame<N> {
    /// All pixels black, brightness 0
    pub const fn new() -> Self {
        Self {
            pixels: [BLACK; N],
            brightness: 0,
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::new()
    }
}
