use snafu::Snafu;

#[derive(Debug, Snafu, Clone, Copy, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("waveform shape {shape} is out of range (table has {count})"))]
    ShapeOutOfRange { shape: u8, count: usize },

    #[snafu(display("tick timer rejected a period of {period_us}us"))]
    PeriodRejected { period_us: u32 },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
