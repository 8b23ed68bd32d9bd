use heapless::Vec;

use super::DutyRegister;

/// Records every written duty, up to `CAP` writes. Later writes are counted
/// as dropped instead of blocking the tick.
#[derive(Default)]
pub struct CaptureRegister<const CAP: usize> {
    writes: Vec<u8, CAP>,
    dropped: usize,
}

impl<const CAP: usize> CaptureRegister<CAP> {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            dropped: 0,
        }
    }

    pub fn writes(&self) -> &[u8] {
        &self.writes
    }

    pub fn last(&self) -> Option<u8> {
        self.writes.last().copied()
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.writes.clear();
        self.dropped = 0;
    }
}

impl<const CAP: usize> DutyRegister for CaptureRegister<CAP> {
    fn write(&mut self, duty: u8) {
        if self.writes.push(duty).is_err() {
            self.dropped += 1;
        }
    }
}
