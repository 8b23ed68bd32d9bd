mod state;
mod table;

pub use state::WaveState;
pub use table::{
    Shape, ShapeId, Wave, WaveformTable, LEGACY_WAVES, RAMP, SINE, SQUARE, TREMOLO_WAVES,
    WAVE_PEAK,
};
