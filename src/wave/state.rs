use snafu::OptionExt;

use super::table::ShapeId;
use crate::config::{DEFAULT_DEPTH, DEFAULT_SPEED};
use crate::error::{Result, ShapeOutOfRangeSnafu};
use crate::pwm::DepthScaling;

/// Configuration and progress of one modulated channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaveState<const N: usize> {
    shape: ShapeId<N>,
    phase: u8,
    depth: u8,
    speed: u8,
    scaling: DepthScaling,
}

impl<const N: usize> WaveState<N> {
    /// Startup state: first shape, phase 0, full depth, default speed.
    /// `scaling` is fixed for the life of the state.
    pub const fn new(scaling: DepthScaling) -> Self {
        Self {
            shape: ShapeId::first(),
            phase: 0,
            depth: scaling.stored(DEFAULT_DEPTH),
            speed: scaling.stored(DEFAULT_SPEED),
            scaling,
        }
    }

    /// Applies a new configuration. An out-of-range `shape` rejects the whole
    /// call and leaves every field untouched. The phase is never reset.
    pub fn configure(&mut self, shape: u8, depth: u8, speed: u8) -> Result<()> {
        self.shape = ShapeId::new(shape).context(ShapeOutOfRangeSnafu { shape, count: N })?;
        self.depth = self.scaling.stored(depth);
        self.speed = self.scaling.stored(speed);
        Ok(())
    }

    #[inline]
    pub fn advance_phase(&mut self) {
        self.phase = self.phase.wrapping_add(1);
    }

    pub fn shape(&self) -> ShapeId<N> {
        self.shape
    }

    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Depth as stored, after the configure-stage scaling.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Timer compare value as stored, after the configure-stage scaling.
    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn scaling(&self) -> DepthScaling {
        self.scaling
    }
}
