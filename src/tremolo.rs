use core::cell::Cell;

use critical_section::Mutex;
use log::{debug, warn};

use crate::config::{FULL_SWING_OFFSET, LEGACY_OFFSET, WAVE_COUNT};
use crate::error::Result;
use crate::pwm::{DepthScaling, DutyRegister, Polarity};
use crate::scheduler::TickHandler;
use crate::wave::{WaveState, WaveformTable, LEGACY_WAVES, TREMOLO_WAVES};

/// Everything that tells two output channels apart.
#[derive(Clone, Copy)]
pub struct ChannelConfig<const N: usize> {
    pub table: &'static WaveformTable<N>,
    pub offset: u8,
    pub scaling: DepthScaling,
    pub polarity: Polarity,
}

impl ChannelConfig<WAVE_COUNT> {
    /// Sine, square and ramp centered on the duty midpoint.
    pub const TREMOLO: Self = Self {
        table: &TREMOLO_WAVES,
        offset: FULL_SWING_OFFSET,
        scaling: DepthScaling::Linear,
        polarity: Polarity::NonInverting,
    };
}

impl ChannelConfig<1> {
    /// Unscaled sine of the first pedal revision.
    pub const LEGACY: Self = Self {
        table: &LEGACY_WAVES,
        offset: LEGACY_OFFSET,
        scaling: DepthScaling::Bypass,
        polarity: Polarity::NonInverting,
    };
}

impl<const N: usize> ChannelConfig<N> {
    pub const fn with_scaling(self, scaling: DepthScaling) -> Self {
        Self { scaling, ..self }
    }

    pub const fn with_polarity(self, polarity: Polarity) -> Self {
        Self { polarity, ..self }
    }

    /// Duty written for `state`.
    #[inline]
    pub fn duty(&self, state: &WaveState<N>) -> u8 {
        let sample = self.table.lookup(state.shape(), state.phase());
        let duty = self.scaling.duty(sample, state.depth(), self.offset);
        self.polarity.apply(duty)
    }
}

/// Modulation engine of one output channel.
///
/// The state is shared by the foreground (`configure`) and the tick
/// interrupt (`tick`). Both touch it only inside a critical section, so a
/// tick always sees a complete configuration.
pub struct Tremolo<const N: usize> {
    config: ChannelConfig<N>,
    state: Mutex<Cell<WaveState<N>>>,
}

impl<const N: usize> Tremolo<N> {
    pub const fn new(config: ChannelConfig<N>) -> Self {
        let state = WaveState::new(config.scaling);
        Self {
            config,
            state: Mutex::new(Cell::new(state)),
        }
    }

    pub fn config(&self) -> &ChannelConfig<N> {
        &self.config
    }

    /// Applies a new shape, depth and speed. An out-of-range shape rejects the
    /// whole call. On success returns the state as stored, whose `speed` is the
    /// compare value for the tick timer.
    pub fn configure(&self, shape: u8, depth: u8, speed: u8) -> Result<WaveState<N>> {
        let res: Result<WaveState<N>> = critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            state.configure(shape, depth, speed)?;
            cell.set(state);
            Ok(state)
        });

        match &res {
            Ok(state) => debug!(
                "configured shape {} depth {} speed {}",
                state.shape().index(),
                state.depth(),
                state.speed()
            ),
            Err(e) => warn!("configuration rejected: {}", e),
        }
        res
    }

    /// Consistent snapshot of the current state.
    pub fn state(&self) -> WaveState<N> {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    pub fn advance_phase(&self) {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            state.advance_phase();
            cell.set(state);
        });
    }

    /// Duty for the current phase, without advancing.
    pub fn duty(&self) -> u8 {
        self.config.duty(&self.state())
    }

    /// Advances the phase and returns the duty of the new phase.
    #[inline]
    pub fn tick(&self) -> u8 {
        let state = critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            state.advance_phase();
            cell.set(state);
            state
        });
        self.config.duty(&state)
    }
}

/// Binds a channel engine to its duty register for the tick interrupt.
pub struct TremoloTick<'a, R, const N: usize> {
    tremolo: &'a Tremolo<N>,
    register: R,
}

impl<'a, R, const N: usize> TremoloTick<'a, R, N>
where
    R: DutyRegister,
{
    pub fn new(tremolo: &'a Tremolo<N>, register: R) -> Self {
        Self { tremolo, register }
    }

    /// Writes the duty of the current phase before the first tick.
    pub fn prime(&mut self) {
        self.register.write(self.tremolo.duty());
    }

    pub fn register(&self) -> &R {
        &self.register
    }

    pub fn release(self) -> R {
        self.register
    }
}

impl<'a, R, const N: usize> TickHandler for TremoloTick<'a, R, N>
where
    R: DutyRegister,
{
    fn on_tick(&mut self) {
        let duty = self.tremolo.tick();
        self.register.write(duty);
    }
}
