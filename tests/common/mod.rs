#![allow(dead_code)]

use core::convert::Infallible;

use knob_light::{AnalogInput, ButtonInput, KnobId, LogSink, OutputDriver, Rgb};

/// Knobs parked at fixed raw positions
#[derive(Debug, Default)]
pub struct MockAnalog {
    pub brightness: u16,
    pub hue: u16,
    pub speed: u16,
    pub reads: Vec<KnobId>,
}

impl MockAnalog {
    pub fn new(brightness: u16, hue: u16, speed: u16) -> Self {
        Self {
            brightness,
            hue,
            speed,
            reads: Vec::new(),
        }
    }
}

impl AnalogInput for MockAnalog {
    fn read_raw(&mut self, knob: KnobId) -> u16 {
        self.reads.push(knob);
        match knob {
            KnobId::Brightness => self.brightness,
            KnobId::Hue => self.hue,
            KnobId::Speed => self.speed,
        }
    }
}

/// Button held at a fixed level; released (high) by default
#[derive(Debug)]
pub struct MockButton {
    pub high: bool,
}

impl Default for MockButton {
    fn default() -> Self {
        Self { high: true }
    }
}

impl ButtonInput for MockButton {
    fn is_high(&mut self) -> bool {
        self.high
    }
}

/// Records every frame and clear
#[derive(Debug, Default)]
pub struct MockOutput {
    pub frames: Vec<(Vec<Rgb>, u8)>,
    pub clears: usize,
}

impl MockOutput {
    pub fn last_frame(&self) -> &(Vec<Rgb>, u8) {
        self.frames.last().expect("no frame written")
    }
}

impl OutputDriver for MockOutput {
    type Error = Infallible;

    fn write(&mut self, colors: &[Rgb], brightness: u8) -> Result<(), Self::Error> {
        self.frames.push((colors.to_vec(), brightness));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.clears += 1;
        Ok(())
    }
}

/// Output whose bus is always down
#[derive(Debug, Default)]
pub struct FailingOutput;

impl OutputDriver for FailingOutput {
    type Error = &'static str;

    fn write(&mut self, _colors: &[Rgb], _brightness: u8) -> Result<(), Self::Error> {
        Err("bus down")
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        Err("bus down")
    }
}

/// Collects log lines
#[derive(Debug, Default)]
pub struct VecLog {
    pub lines: Vec<String>,
}

impl VecLog {
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl LogSink for VecLog {
    fn log(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
