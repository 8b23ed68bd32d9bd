use crate::support::Prescaler;

/// Samples per waveform period. Phase is a `u8`, so wraparound is free.
pub const WAVE_LENGTH: usize = 256;

/// Shapes in the full tremolo table: sine, square, ramp.
pub const WAVE_COUNT: usize = 3;

//-----------------------------------------------------------------------------

/// Centers a signed sample in the middle of the 8-bit duty range.
pub const FULL_SWING_OFFSET: u8 = 128;

/// Offset of the unscaled single-sine output of the first pedal revision.
pub const LEGACY_OFFSET: u8 = 155;

//-----------------------------------------------------------------------------

pub const DEFAULT_SHAPE: u8 = 0;
pub const DEFAULT_DEPTH: u8 = u8::MAX;
pub const DEFAULT_SPEED: u8 = 128;
pub const DEFAULT_PRESCALER: Prescaler = Prescaler::Div64;

//-----------------------------------------------------------------------------

pub const MCU_XTAL_HZ: u32 = 8_000_000;

/// Clock feeding the tick timer prescaler.
pub const TICK_TIMER_CLOCK_HZ: u32 = MCU_XTAL_HZ;

/// Carrier frequency of the duty outputs.
pub const PWM_CARRIER_HZ: u32 = 20_000;

//-----------------------------------------------------------------------------

pub const SYSTICK_RATE_HZ: u32 = 1_000;

/// How often the firmware steps to the next waveform shape.
pub const SHAPE_CYCLE_PERIOD_MS: u64 = 4_000;
