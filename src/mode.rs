//! Push-button mode selection
//!
//! The button is active-low: a high level means released. Raw levels are
//! debounced before they can change the active effect.

use embassy_time::{Duration, Instant};

use crate::effect::EffectId;

/// Time a raw level must hold before it is accepted
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Digital input service for the mode button
pub trait ButtonInput {
    /// Raw pin level, `true` when high (released)
    fn is_high(&mut self) -> bool;
}

/// Debouncer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebouncePhase {
    /// Raw and stable levels agree or the raw level has settled
    Idle,
    /// Raw level changed recently and is not trusted yet
    Debouncing,
}

/// Stable level change reported by the debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    /// Stable level went from high to low
    Pressed,
    /// Stable level went from low to high
    Released,
}

/// Debounce state for one active-low button
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    phase: DebouncePhase,
    last_raw: bool,
    stable: bool,
    last_change: Instant,
}

impl Debouncer {
    /// Create a debouncer for a released button
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            phase: DebouncePhase::Idle,
            last_raw: true,
            stable: true,
            last_change: Instant::from_ticks(0),
        }
    }

    pub const fn phase(&self) -> DebouncePhase {
        self.phase
    }

    /// Whether the debounced button is held down
    pub const fn is_pressed(&self) -> bool {
        !self.stable
    }

    /// Feed one raw level sampled at `now`
    ///
    /// Returns an edge once a changed level has held for the debounce
    /// interval.
    pub fn update(&mut self, high: bool, now: Instant) -> Option<ButtonEdge> {
        if high != self.last_raw {
            self.last_change = now;
            self.phase = DebouncePhase::Debouncing;
        }
        self.last_raw = high;

        if now.saturating_duration_since(self.last_change) < self.interval {
            return None;
        }
        self.phase = DebouncePhase::Idle;

        if high == self.stable {
            return None;
        }
        self.stable = high;
        Some(if high {
            ButtonEdge::Released
        } else {
            ButtonEdge::Pressed
        })
    }
}

/// Debounced button driving the active effect
#[derive(Debug, Clone)]
pub struct ModeSelector {
    debouncer: Debouncer,
    active: EffectId,
}

impl ModeSelector {
    pub const fn new(initial: EffectId, debounce: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(debounce),
            active: initial,
        }
    }

    /// Effect currently selected
    pub const fn active(&self) -> EffectId {
        self.active
    }

    pub const fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// Sample the button and advance the effect on a confirmed press
    ///
    /// Returns the newly selected effect when it changed.
    pub fn poll<B: ButtonInput + ?Sized>(&mut self, button: &mut B, now: Instant) -> Option<EffectId> {
        let high = button.is_high();
        match self.debouncer.update(high, now)? {
            ButtonEdge::Pressed => {
                self.active = self.active.next();
                Some(self.active)
            }
            ButtonEdge::Released => None,
        }
    }
}
