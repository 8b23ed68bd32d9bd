use fugit_timer::ExtU32;

use super::TickDuration;

/// Clock divider feeding the tick timer. `Off` stops the clock entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prescaler {
    Off,
    Div1,
    Div8,
    Div32,
    Div64,
    Div128,
    Div256,
    Div1024,
}

impl Prescaler {
    pub const fn divisor(self) -> Option<u32> {
        match self {
            Prescaler::Off => None,
            Prescaler::Div1 => Some(1),
            Prescaler::Div8 => Some(8),
            Prescaler::Div32 => Some(32),
            Prescaler::Div64 => Some(64),
            Prescaler::Div128 => Some(128),
            Prescaler::Div256 => Some(256),
            Prescaler::Div1024 => Some(1024),
        }
    }
}

/// 8-bit AVR timers of the first pedal revision. They offer different
/// divider sets and encode them differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Amplitude timer, drives the duty pins.
    Timer0,
    /// Speed timer, raises the tick interrupt.
    Timer2,
}

impl TimerKind {
    /// Clock-select code for `prescaler`, `None` if this timer has no such
    /// divider.
    pub const fn clock_select(self, prescaler: Prescaler) -> Option<u8> {
        use Prescaler::*;

        match (self, prescaler) {
            (_, Off) => Some(0),
            (_, Div1) => Some(1),
            (_, Div8) => Some(2),
            (TimerKind::Timer0, Div64) => Some(3),
            (TimerKind::Timer0, Div256) => Some(4),
            (TimerKind::Timer0, Div1024) => Some(5),
            (TimerKind::Timer0, Div32 | Div128) => None,
            (TimerKind::Timer2, Div32) => Some(3),
            (TimerKind::Timer2, Div64) => Some(4),
            (TimerKind::Timer2, Div128) => Some(5),
            (TimerKind::Timer2, Div256) => Some(6),
            (TimerKind::Timer2, Div1024) => Some(7),
        }
    }
}

/// Time between ticks: the timer counts `compare + 1` prescaled clocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickPeriod {
    pub prescaler: Prescaler,
    pub compare: u8,
}

impl TickPeriod {
    pub const fn new(prescaler: Prescaler, compare: u8) -> Self {
        Self { prescaler, compare }
    }

    /// Period length for a timer clocked at `clock_hz`, never shorter than
    /// 1us. `None` when the prescaler is off.
    pub fn duration(&self, clock_hz: u32) -> Option<TickDuration> {
        let divisor = self.prescaler.divisor()? as u64;
        if clock_hz == 0 {
            return None;
        }

        let us = divisor * (self.compare as u64 + 1) * 1_000_000 / clock_hz as u64;
        Some((us.clamp(1, u32::MAX as u64) as u32).micros())
    }
}
