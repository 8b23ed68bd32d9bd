use fugit_timer::ExtU32;

pub type TickDuration = fugit_timer::Duration<u32, 1, 1_000_000>;

/// Periodic interrupt source. Each expiry raises the tick interrupt, which
/// rearms itself until `stop`.
pub trait TickTimer {
    fn set_period(&mut self, period: TickDuration) -> bool;
    fn start(&mut self) -> bool;
    fn stop(&mut self);
}

pub struct Timer<TIM> {
    timer: TIM,
    period: TickDuration,
}

impl<TIM> Timer<TIM> {
    /// `timer` should already be listening for its update event.
    pub fn new(timer: TIM) -> Self {
        Self {
            timer,
            period: 1u32.millis(),
        }
    }

    pub fn period(&self) -> TickDuration {
        self.period
    }

    pub fn release(self) -> TIM {
        self.timer
    }
}

impl<TIM> TickTimer for Timer<TIM>
where
    TIM: fugit_timer::Timer<1_000_000>,
{
    fn set_period(&mut self, period: TickDuration) -> bool {
        self.period = period;
        true
    }

    fn start(&mut self) -> bool {
        self.timer.start(self.period).is_ok()
    }

    fn stop(&mut self) {
        let _ = self.timer.cancel();
    }
}
