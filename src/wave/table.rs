use crate::config::{WAVE_COUNT, WAVE_LENGTH};

/// One period of a modulation waveform.
pub type Wave = [i8; WAVE_LENGTH];

/// Peak deviation of the built-in waves from their midpoint.
pub const WAVE_PEAK: i8 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Shape {
    Sine = 0,
    Square = 1,
    Ramp = 2,
}

impl From<Shape> for u8 {
    fn from(shape: Shape) -> u8 {
        shape as u8
    }
}

/// Row index into a `WaveformTable<N>`. Only values in `0..N` can be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeId<const N: usize>(u8);

impl<const N: usize> ShapeId<N> {
    pub const fn new(raw: u8) -> Option<Self> {
        if (raw as usize) < N {
            Some(Self(raw))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// The following row, wrapping back to the first one.
    pub const fn next(self) -> Self {
        if self.0 as usize + 1 < N {
            Self(self.0 + 1)
        } else {
            Self(0)
        }
    }

    // Only reachable through a non-empty table.
    pub(crate) const fn first() -> Self {
        Self(0)
    }
}

/// Immutable sample data, one `Wave` per shape.
pub struct WaveformTable<const N: usize> {
    rows: [Wave; N],
}

impl<const N: usize> WaveformTable<N> {
    pub const fn new(rows: [Wave; N]) -> Self {
        assert!(N > 0 && N <= u8::MAX as usize, "table must hold 1..=255 shapes");
        Self { rows }
    }

    pub const fn shape_count(&self) -> usize {
        N
    }

    #[inline]
    pub fn lookup(&self, shape: ShapeId<N>, phase: u8) -> i8 {
        self.rows[shape.0 as usize][phase as usize]
    }

    pub fn wave(&self, shape: ShapeId<N>) -> &Wave {
        &self.rows[shape.0 as usize]
    }
}

//-----------------------------------------------------------------------------

#[rustfmt::skip]
pub const SINE: Wave = [
    0, 2, 4, 7, 9, 12, 14, 17, 19, 21, 24, 26, 29, 31, 33, 35,
    38, 40, 42, 44, 47, 49, 51, 53, 55, 57, 59, 61, 63, 65, 67, 68,
    70, 72, 74, 75, 77, 78, 80, 81, 83, 84, 85, 87, 88, 89, 90, 91,
    92, 93, 94, 94, 95, 96, 97, 97, 98, 98, 98, 99, 99, 99, 99, 99,
    100, 99, 99, 99, 99, 99, 98, 98, 98, 97, 97, 96, 95, 94, 94, 93,
    92, 91, 90, 89, 88, 87, 85, 84, 83, 81, 80, 78, 77, 75, 74, 72,
    70, 68, 67, 65, 63, 61, 59, 57, 55, 53, 51, 49, 47, 44, 42, 40,
    38, 35, 33, 31, 29, 26, 24, 21, 19, 17, 14, 12, 9, 7, 4, 2,
    0, -2, -4, -7, -9, -12, -14, -17, -19, -21, -24, -26, -29, -31, -33, -35,
    -38, -40, -42, -44, -47, -49, -51, -53, -55, -57, -59, -61, -63, -65, -67, -68,
    -70, -72, -74, -75, -77, -78, -80, -81, -83, -84, -85, -87, -88, -89, -90, -91,
    -92, -93, -94, -94, -95, -96, -97, -97, -98, -98, -98, -99, -99, -99, -99, -99,
    -100, -99, -99, -99, -99, -99, -98, -98, -98, -97, -97, -96, -95, -94, -94, -93,
    -92, -91, -90, -89, -88, -87, -85, -84, -83, -81, -80, -78, -77, -75, -74, -72,
    -70, -68, -67, -65, -63, -61, -59, -57, -55, -53, -51, -49, -47, -44, -42, -40,
    -38, -35, -33, -31, -29, -26, -24, -21, -19, -17, -14, -12, -9, -7, -4, -2,];

pub const SQUARE: Wave = square();
pub const RAMP: Wave = ramp();

pub const TREMOLO_WAVES: WaveformTable<WAVE_COUNT> = WaveformTable::new([SINE, SQUARE, RAMP]);
pub const LEGACY_WAVES: WaveformTable<1> = WaveformTable::new([SINE]);

const fn square() -> Wave {
    let mut wave = [0; WAVE_LENGTH];
    let mut i = 0;
    while i < WAVE_LENGTH {
        wave[i] = if i < WAVE_LENGTH / 2 {
            WAVE_PEAK
        } else {
            -WAVE_PEAK
        };
        i += 1;
    }
    wave
}

/// Rising ramp from `-WAVE_PEAK` at phase 0 to `WAVE_PEAK` at the last phase.
const fn ramp() -> Wave {
    let mut wave = [0; WAVE_LENGTH];
    let span = 2 * WAVE_PEAK as i32;
    let mut i = 0;
    while i < WAVE_LENGTH {
        wave[i] = (i as i32 * span / (WAVE_LENGTH as i32 - 1) - WAVE_PEAK as i32) as i8;
        i += 1;
    }
    wave
}
