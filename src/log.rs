//! Line oriented status logging
//!
//! Lines are formatted into a fixed-size buffer and handed to a [`LogSink`].
//! Lines longer than [`LINE_CAPACITY`] are cut short.

use core::fmt::{self, Write};

use embassy_time::{Duration, Instant};
use heapless::String;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Longest line kept, in bytes
pub const LINE_CAPACITY: usize = 160;

/// Minimum time between two status lines of the same effect
pub const DEFAULT_STATUS_INTERVAL: Duration = Duration::from_secs(1);

/// Formatted log line
pub type LogLine = String<LINE_CAPACITY>;

/// Destination for log lines
pub trait LogSink {
    fn log(&mut self, line: &str);
}

/// Discards all output
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLog;

impl LogSink for NoLog {
    fn log(&mut self, _line: &str) {}
}

/// Prints lines over the ESP32 serial console
#[cfg(feature = "esp32-log")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EspLog;

#[cfg(feature = "esp32-log")]
impl LogSink for EspLog {
    fn log(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Format `args` into a line, cutting it short when it does not fit
pub fn format_line(args: fmt::Arguments<'_>) -> LogLine {
    let mut line = LogLine::new();
    let _ = Truncating(&mut line).write_fmt(args);
    line
}

/// Writer that drops whatever does not fit instead of failing
pub(crate) struct Truncating<'a>(pub(crate) &'a mut LogLine);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Rate limit for periodic status lines
#[derive(Debug, Clone)]
pub struct StatusThrottle {
    interval: Duration,
    last: Option<Instant>,
}

impl StatusThrottle {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Returns `true` and restarts the interval when a line is due
    pub fn ready(&mut self, now: Instant) -> bool {
        let due = self
            .last
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval);
        if due {
            self.last = Some(now);
        }
        due
    }

    /// Make the next call to [`ready`](Self::ready) succeed
    pub fn reset(&mut self) {
        self.last = None;
    }
}
