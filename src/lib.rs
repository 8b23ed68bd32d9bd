#![cfg_attr(not(test), no_std)]

pub mod config;
mod error;
pub mod pwm;
pub mod scheduler;
pub mod support;
pub mod tremolo;
pub mod wave;

pub use error::{Error, Result};
pub use pwm::{CaptureRegister, DepthScaling, DutyRegister, NativeCh, Polarity};
pub use scheduler::{TickHandler, TickScheduler};
pub use support::{Prescaler, TickPeriod, TickTimer, Timer};
pub use tremolo::{ChannelConfig, Tremolo, TremoloTick};
pub use wave::{Shape, WaveState, WaveformTable};
