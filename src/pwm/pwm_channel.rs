/// Output compare mode of a duty pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    NonInverting,
    /// Output starts low and goes high past the compare value.
    Inverting,
}

impl Polarity {
    #[inline]
    pub const fn apply(self, duty: u8) -> u8 {
        match self {
            Polarity::NonInverting => duty,
            Polarity::Inverting => u8::MAX - duty,
        }
    }
}

/// Write-only 8-bit duty register, one per output channel.
pub trait DutyRegister {
    fn write(&mut self, duty: u8);
}

impl<R: DutyRegister + ?Sized> DutyRegister for &mut R {
    fn write(&mut self, duty: u8) {
        (**self).write(duty)
    }
}
