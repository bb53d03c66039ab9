#![no_std]

pub mod color;
pub mod driver;
pub mod effect;
pub mod engine;
pub mod error;
pub mod frame;
pub mod knob;
pub mod log;
pub mod math8;
pub mod mode;

pub use color::{Rgb, apply_gamma, blend_hue, hsv_to_rgb};
pub use driver::{OutputDriver, SmartLedsOutput};
pub use effect::{EFFECT_COUNT, EffectId, EffectSlot};
pub use engine::{Engine, EngineConfig, TickResult};
pub use error::EngineError;
pub use frame::Frame;
pub use knob::{AnalogInput, Calibration, KnobChannel, KnobId, SignalConditioner};
pub use log::{LogSink, NoLog};
#[cfg(feature = "esp32-log")]
pub use log::EspLog;
pub use mode::{ButtonInput, Debouncer, ModeSelector};

pub use embassy_time::{Duration, Instant};
