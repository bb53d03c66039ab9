//! Analog knob conditioning
//!
//! Every knob read flushes the multiplexed ADC, smooths the reading with an
//! exponential moving average and re-maps the calibrated raw range onto the
//! output range of the control.

use crate::math8::map_range;

/// Largest value an ADC read can produce
pub const RAW_MAX: u16 = 1023;

/// Reads thrown away before each real sample, letting the ADC sample-and-hold
/// settle after the multiplexer switched channels
pub const FLUSH_READS: usize = 3;

/// Shortest and longest inter-frame delay produced by the speed knob, in ms
pub const SPEED_MIN_MS: u16 = 10;
pub const SPEED_MAX_MS: u16 = 1000;

/// Fractional bits of the smoothing accumulator
const SMOOTHING_SHIFT: u32 = 8;
/// New samples contribute `1 / SMOOTHING_WEIGHT` of the smoothed value
const SMOOTHING_WEIGHT: u32 = 8;

/// Identifies one of the three analog inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnobId {
    Brightness,
    Hue,
    Speed,
}

impl KnobId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Hue => "hue",
            Self::Speed => "speed",
        }
    }
}

/// Raw analog sampling service
///
/// Implement this trait on top of the platform ADC.
pub trait AnalogInput {
    /// Read one raw sample (0-1023) from the given knob
    fn read_raw(&mut self, knob: KnobId) -> u16;
}

/// Raw range a knob actually produces
///
/// Potentiometers rarely reach the rails, so the range is measured on the
/// hardware instead of assuming 0..=1023.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    pub min: u16,
    pub max: u16,
}

impl Calibration {
    /// Range measured on the reference hardware
    pub const DEFAULT: Self = Self { min: 15, max: 1000 };

    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// Map `raw` onto `out_min..=out_max` and clamp to that range
    ///
    /// `out_min` may be larger than `out_max` for inverted controls.
    pub fn remap(self, raw: u16, out_min: i32, out_max: i32) -> i32 {
        let (low, high) = if out_min <= out_max {
            (out_min, out_max)
        } else {
            (out_max, out_min)
        };
        if self.max <= self.min {
            return if raw <= self.min { out_min } else { out_max };
        }
        let raw = raw.clamp(self.min, self.max);
        map_range(
            i32::from(raw),
            i32::from(self.min),
            i32::from(self.max),
            out_min,
            out_max,
        )
        .clamp(low, high)
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One smoothed, calibrated analog input
#[derive(Debug, Clone)]
pub struct KnobChannel {
    id: KnobId,
    calibration: Calibration,
    /// Smoothed value with `SMOOTHING_SHIFT` fractional bits
    smoothed: u32,
    /// Last raw sample, kept for diagnostics
    raw: u16,
}

impl KnobChannel {
    /// Create a channel whose smoothed state starts at `initial`
    pub const fn new(id: KnobId, calibration: Calibration, initial: u16) -> Self {
        Self {
            id,
            calibration,
            smoothed: (initial as u32) << SMOOTHING_SHIFT,
            raw: initial,
        }
    }

    pub const fn id(&self) -> KnobId {
        self.id
    }

    pub const fn calibration(&self) -> Calibration {
        self.calibration
    }

    /// Last raw sample fed into the filter
    pub const fn raw(&self) -> u16 {
        self.raw
    }

    /// Current smoothed value in raw units
    #[allow(clippy::cast_possible_truncation)]
    pub const fn smoothed(&self) -> u16 {
        ((self.smoothed + (1 << (SMOOTHING_SHIFT - 1))) >> SMOOTHING_SHIFT) as u16
    }

    /// Flush the ADC, take one sample and feed it into the filter
    ///
    /// Returns the new smoothed value.
    pub fn sample<A: AnalogInput + ?Sized>(&mut self, input: &mut A) -> u16 {
        for _ in 0..FLUSH_READS {
            input.read_raw(self.id);
        }
        let raw = input.read_raw(self.id);
        self.update(raw)
    }

    /// Feed one raw sample into the filter
    ///
    /// Returns the new smoothed value.
    pub fn update(&mut self, raw: u16) -> u16 {
        let raw = raw.min(RAW_MAX);
        self.raw = raw;
        let sample = u32::from(raw) << SMOOTHING_SHIFT;
        self.smoothed = (self.smoothed * (SMOOTHING_WEIGHT - 1) + sample) / SMOOTHING_WEIGHT;
        self.smoothed()
    }

    /// Smoothed value mapped onto `out_min..=out_max`
    pub fn remapped(&self, out_min: i32, out_max: i32) -> i32 {
        self.calibration.remap(self.smoothed(), out_min, out_max)
    }
}

/// Conditioned readers for the brightness, hue and speed knobs
#[derive(Debug, Clone)]
pub struct SignalConditioner {
    brightness: KnobChannel,
    hue: KnobChannel,
    speed: KnobChannel,
}

impl SignalConditioner {
    /// Create the conditioner with neutral start values
    ///
    /// Brightness and speed start at mid-scale, hue at the start of the circle.
    pub const fn new(brightness: Calibration, hue: Calibration, speed: Calibration) -> Self {
        Self {
            brightness: KnobChannel::new(KnobId::Brightness, brightness, 512),
            hue: KnobChannel::new(KnobId::Hue, hue, 0),
            speed: KnobChannel::new(KnobId::Speed, speed, 512),
        }
    }

    /// Read the brightness knob (0-255)
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn read_brightness<A: AnalogInput + ?Sized>(&mut self, input: &mut A) -> u8 {
        self.brightness.sample(input);
        self.brightness.remapped(0, 255) as u8
    }

    /// Read the hue knob (0-65535)
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn read_hue<A: AnalogInput + ?Sized>(&mut self, input: &mut A) -> u16 {
        self.hue.sample(input);
        self.hue.remapped(0, i32::from(u16::MAX)) as u16
    }

    /// Read the speed knob as an inter-frame delay in ms (10-1000)
    ///
    /// Turning the knob up shortens the delay.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn read_speed<A: AnalogInput + ?Sized>(&mut self, input: &mut A) -> u16 {
        self.speed.sample(input);
        self.speed
            .remapped(i32::from(SPEED_MAX_MS), i32::from(SPEED_MIN_MS)) as u16
    }

    pub const fn channel(&self, knob: KnobId) -> &KnobChannel {
        match knob {
            KnobId::Brightness => &self.brightness,
            KnobId::Hue => &self.hue,
            KnobId::Speed => &self.speed,
        }
    }
}

impl Default for SignalConditioner {
    fn default() -> Self {
        Self::new(
            Calibration::DEFAULT,
            Calibration::DEFAULT,
            Calibration::DEFAULT,
        )
    }
}
