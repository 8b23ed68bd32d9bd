use embedded_hal::PwmPin;

use super::DutyRegister;

/// Duty register backed by a timer PWM channel of the MCU.
pub struct NativeCh<P> {
    pin: P,
    max_duty: u16,
}

impl<P> NativeCh<P>
where
    P: PwmPin<Duty = u16>,
{
    /// Enables the channel and takes over its duty.
    pub fn new(mut pin: P) -> Self {
        let max_duty = pin.get_max_duty();
        pin.enable();
        Self { pin, max_duty }
    }

    pub fn release(mut self) -> P {
        self.pin.disable();
        self.pin
    }
}

impl<P> DutyRegister for NativeCh<P>
where
    P: PwmPin<Duty = u16>,
{
    fn write(&mut self, duty: u8) {
        self.pin.set_duty(scale_duty(duty, self.max_duty));
    }
}

/// Stretches an 8-bit duty over the `0..=max` range of a timer channel.
pub fn scale_duty(duty: u8, max: u16) -> u16 {
    (duty as u32 * max as u32 / u8::MAX as u32) as u16
}
