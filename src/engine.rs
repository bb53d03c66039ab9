//! Effect engine
//!
//! [`Engine`] owns every piece of mutable state (knob filters, debouncer,
//! active effect) together with the peripherals it talks to. One call to
//! [`Engine::tick`] is one loop iteration: sample the button, render one
//! frame of the active effect and push it to the strip.

use core::convert::Infallible;
use core::fmt::Write;

use embassy_time::{Duration, Instant};
use rand::RngCore;

use crate::driver::OutputDriver;
use crate::effect::{EffectId, EffectInput, EffectSlot};
use crate::error::EngineError;
use crate::frame::Frame;
use crate::knob::{AnalogInput, Calibration, KnobId, SignalConditioner};
use crate::log::{DEFAULT_STATUS_INTERVAL, LogLine, LogSink, StatusThrottle, Truncating, format_line};
use crate::mode::{ButtonInput, DEFAULT_DEBOUNCE, ModeSelector};

/// Quiet period after an effect switch
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(300);

/// Raw readings logged by the startup knob check
pub const SELF_TEST_READINGS: usize = 5;

/// Configuration for the engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub brightness: Calibration,
    pub hue: Calibration,
    pub speed: Calibration,
    /// Time a button level must hold before it counts
    pub debounce: Duration,
    /// Pause after an effect switch before rendering resumes
    pub settle: Duration,
    /// Minimum time between status lines
    pub status_interval: Duration,
    pub effect: EffectId,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            brightness: Calibration::DEFAULT,
            hue: Calibration::DEFAULT,
            speed: Calibration::DEFAULT,
            debounce: DEFAULT_DEBOUNCE,
            settle: DEFAULT_SETTLE,
            status_interval: DEFAULT_STATUS_INTERVAL,
            effect: EffectId::Off,
        }
    }
}

/// Result of one engine iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Effect active after the tick
    pub effect: EffectId,
    /// How long to wait before the next tick
    pub delay: Duration,
    /// Whether the tick switched effects instead of rendering
    pub switched: bool,
}

/// The effect engine with its peripherals
///
/// `N` is the number of LEDs in the strip.
pub struct Engine<A, B, O, R, L, const N: usize> {
    // Peripherals
    analog: A,
    button: B,
    output: O,
    rng: R,
    log: L,

    // Internal state
    knobs: SignalConditioner,
    selector: ModeSelector,
    effect: EffectSlot,
    status: StatusThrottle,
    settle: Duration,
}

impl<A, B, O, R, L, const N: usize> Engine<A, B, O, R, L, N>
where
    A: AnalogInput,
    B: ButtonInput,
    O: OutputDriver,
    R: RngCore,
    L: LogSink,
{
    pub fn new(config: &EngineConfig, analog: A, button: B, output: O, rng: R, log: L) -> Self {
        Self {
            analog,
            button,
            output,
            rng,
            log,
            knobs: SignalConditioner::new(config.brightness, config.hue, config.speed),
            selector: ModeSelector::new(config.effect, config.debounce),
            effect: config.effect.to_slot(),
            status: StatusThrottle::new(config.status_interval),
            settle: config.settle,
        }
    }

    /// Blank the strip and report the knob wiring
    ///
    /// Logs a few raw readings of every knob so miswired potentiometers show
    /// up on the console. The readings bypass the smoothing filters.
    pub fn start(&mut self) -> Result<(), EngineError<O::Error>> {
        self.output.clear()?;

        let effect = self.effect.id();
        self.log.log(&format_line(format_args!(
            "Setup complete. Current effect: {}",
            effect.index()
        )));

        self.log.log("=== Potentiometer Test ===");
        for _ in 0..SELF_TEST_READINGS {
            let brightness = self.analog.read_raw(KnobId::Brightness);
            let hue = self.analog.read_raw(KnobId::Hue);
            let speed = self.analog.read_raw(KnobId::Speed);
            self.log.log(&format_line(format_args!(
                "Hue: {} | Brightness: {} | Speed: {}",
                hue, brightness, speed
            )));
        }
        self.log.log("Expected: values should range from ~0 to ~1023");
        Ok(())
    }

    /// Run one loop iteration at time `now`
    ///
    /// The button is always sampled before the effect renders. A confirmed
    /// press switches effects, blanks the strip and returns the settle delay
    /// without rendering.
    pub fn tick(&mut self, now: Instant) -> Result<TickResult, EngineError<O::Error>> {
        if let Some(effect) = self.selector.poll(&mut self.button, now) {
            self.switch_to(effect)?;
            return Ok(TickResult {
                effect,
                delay: self.settle,
                switched: true,
            });
        }

        let input = EffectInput {
            brightness: self.knobs.read_brightness(&mut self.analog),
            hue: self.knobs.read_hue(&mut self.analog),
            speed: Duration::from_millis(u64::from(self.knobs.read_speed(&mut self.analog))),
        };

        let mut frame = Frame::<N>::new();
        let output = self.effect.render(&input, &mut self.rng, &mut frame.pixels);
        frame.brightness = output.brightness;

        if self.status.ready(now) {
            self.log_status(&input);
        }

        self.output.write(&frame.pixels, frame.brightness)?;

        Ok(TickResult {
            effect: self.effect.id(),
            delay: output.delay,
            switched: false,
        })
    }

    /// Tick forever, blocking for the requested delay in between
    pub fn run(&mut self) -> Result<Infallible, EngineError<O::Error>> {
        self.start()?;
        loop {
            let result = self.tick(Instant::now())?;
            embassy_time::block_for(result.delay);
        }
    }

    /// Install a fresh instance of `effect`, dropping the old effect state
    fn switch_to(&mut self, effect: EffectId) -> Result<(), EngineError<O::Error>> {
        self.effect = effect.to_slot();
        self.status.reset();

        self.log.log(&format_line(format_args!(
            "Button pressed! Switching to effect {}: {}",
            effect.index(),
            effect
        )));

        self.output.clear()?;
        Ok(())
    }

    fn log_status(&mut self, input: &EffectInput) {
        let mut line = LogLine::new();
        let mut out = Truncating(&mut line);
        let _ = write!(out, "[{}]", self.effect.id());
        let readings = [
            (KnobId::Brightness, u32::from(input.brightness)),
            (KnobId::Hue, u32::from(input.hue)),
            (KnobId::Speed, u32::try_from(input.speed.as_millis()).unwrap_or(u32::MAX)),
        ];
        for (i, (knob, value)) in readings.into_iter().enumerate() {
            let separator = if i == 0 { " " } else { " | " };
            let _ = write!(
                out,
                "{}{} {} -> {}",
                separator,
                knob.as_str(),
                self.knobs.channel(knob).raw(),
                value
            );
        }
        let _ = self.effect.describe(&mut out);
        self.log.log(&line);
    }

    /// Effect currently running
    pub const fn active_effect(&self) -> EffectId {
        self.selector.active()
    }

    pub const fn effect(&self) -> &EffectSlot {
        &self.effect
    }

    pub const fn knobs(&self) -> &SignalConditioner {
        &self.knobs
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub const fn log(&self) -> &L {
        &self.log
    }

    pub fn analog_mut(&mut self) -> &mut A {
        &mut self.analog
    }

    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }
}
