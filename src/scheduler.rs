use log::info;
use snafu::ensure;

use crate::config::{DEFAULT_PRESCALER, DEFAULT_SPEED};
use crate::error::{PeriodRejectedSnafu, Result};
use crate::support::{TickPeriod, TickTimer};

/// Work done on every timer firing.
///
/// `on_tick` runs in interrupt context: it must finish in bounded time and
/// must not block, allocate, log or wait for anything a lower priority
/// context may hold. The scheduler does not pace itself; one call is one
/// firing of the underlying timer.
pub trait TickHandler {
    fn on_tick(&mut self);
}

impl<H: TickHandler + ?Sized> TickHandler for &mut H {
    fn on_tick(&mut self) {
        (**self).on_tick()
    }
}

/// Two outputs sharing one timing source, stepped in order.
impl<A: TickHandler, B: TickHandler> TickHandler for (A, B) {
    fn on_tick(&mut self) {
        self.0.on_tick();
        self.1.on_tick();
    }
}

/// Foreground control of the periodic tick source.
///
/// Stopping only disarms the timer; channel state is kept, so a later
/// `start` resumes from the same phase.
pub struct TickScheduler<T> {
    timer: T,
    clock_hz: u32,
    period: TickPeriod,
    running: bool,
}

impl<T> TickScheduler<T>
where
    T: TickTimer,
{
    pub fn new(timer: T, clock_hz: u32) -> Self {
        Self {
            timer,
            clock_hz,
            period: TickPeriod::new(DEFAULT_PRESCALER, DEFAULT_SPEED),
            running: false,
        }
    }

    /// Arms the timer for `period`. A prescaler of `Off` halts ticking.
    ///
    /// The stored period only changes once the timer has accepted it. If the
    /// timer refuses the period it keeps its previous one; if it fails to
    /// start, ticking is halted.
    pub fn start(&mut self, period: TickPeriod) -> Result<()> {
        let Some(duration) = period.duration(self.clock_hz) else {
            self.period = period;
            self.stop();
            info!("tick clock off");
            return Ok(());
        };

        let period_us = duration.ticks();
        ensure!(
            self.timer.set_period(duration),
            PeriodRejectedSnafu { period_us }
        );
        if !self.timer.start() {
            self.timer.stop();
            self.running = false;
            return PeriodRejectedSnafu { period_us }.fail();
        }

        self.period = period;
        self.running = true;
        info!(
            "ticking every {}us ({:?}, compare {})",
            period_us, period.prescaler, period.compare
        );
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.running {
            self.timer.stop();
            self.running = false;
            info!("ticking stopped");
        }
    }

    /// Changes the compare value, keeping the prescaler. Rearms the timer
    /// only when it is already running.
    pub fn retime(&mut self, compare: u8) -> Result<()> {
        let period = TickPeriod { compare, ..self.period };
        if self.running {
            self.start(period)
        } else {
            self.period = period;
            Ok(())
        }
    }

    pub fn period(&self) -> TickPeriod {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn release(mut self) -> T {
        self.stop();
        self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::support::{Prescaler, TickDuration};

    /// Refuses periods shorter than `min_us` and fails every start after
    /// `max_starts`.
    #[derive(Default)]
    struct FakeTimer {
        period_us: Option<u32>,
        armed: bool,
        starts: usize,
        min_us: u32,
        max_starts: Option<usize>,
    }

    impl TickTimer for FakeTimer {
        fn set_period(&mut self, period: TickDuration) -> bool {
            if period.ticks() < self.min_us {
                return false;
            }
            self.period_us = Some(period.ticks());
            true
        }

        fn start(&mut self) -> bool {
            if self.max_starts.map_or(false, |max| self.starts >= max) {
                return false;
            }
            self.starts += 1;
            self.armed = true;
            true
        }

        fn stop(&mut self) {
            self.armed = false;
        }
    }

    #[test]
    fn start_arms_timer() {
        let mut sched = TickScheduler::new(FakeTimer::default(), 8_000_000);
        sched.start(TickPeriod::new(Prescaler::Div64, 255)).unwrap();
        assert!(sched.is_running());

        let timer = sched.release();
        assert_eq!(timer.period_us, Some(2_048));
        assert!(!timer.armed);
    }

    #[test]
    fn off_prescaler_stops() {
        let mut sched = TickScheduler::new(FakeTimer::default(), 8_000_000);
        sched.start(TickPeriod::new(Prescaler::Div8, 9)).unwrap();
        sched.start(TickPeriod::new(Prescaler::Off, 9)).unwrap();
        assert!(!sched.is_running());
        assert_eq!(sched.period().prescaler, Prescaler::Off);
    }

    #[test]
    fn retime_keeps_prescaler() {
        let mut sched = TickScheduler::new(FakeTimer::default(), 8_000_000);
        sched.retime(99).unwrap();
        assert!(!sched.is_running());
        assert_eq!(sched.period(), TickPeriod::new(DEFAULT_PRESCALER, 99));

        sched.start(TickPeriod::new(Prescaler::Div8, 0)).unwrap();
        sched.retime(9).unwrap();
        assert_eq!(sched.period(), TickPeriod::new(Prescaler::Div8, 9));
        assert_eq!(sched.release().starts, 2);
    }

    #[test]
    fn rejected_period_is_an_error() {
        let timer = FakeTimer {
            min_us: u32::MAX,
            ..Default::default()
        };
        let mut sched = TickScheduler::new(timer, 8_000_000);
        let err = sched.start(TickPeriod::new(Prescaler::Div8, 9)).unwrap_err();
        assert_eq!(err, Error::PeriodRejected { period_us: 10 });
        assert!(!sched.is_running());
        assert_eq!(sched.period(), TickPeriod::new(DEFAULT_PRESCALER, DEFAULT_SPEED));
    }

    #[test]
    fn refused_retime_keeps_running_period() {
        let timer = FakeTimer {
            min_us: 50,
            ..Default::default()
        };
        let mut sched = TickScheduler::new(timer, 8_000_000);
        sched.start(TickPeriod::new(Prescaler::Div8, 99)).unwrap();

        let err = sched.retime(9).unwrap_err();
        assert_eq!(err, Error::PeriodRejected { period_us: 10 });
        assert!(sched.is_running());
        assert_eq!(sched.period(), TickPeriod::new(Prescaler::Div8, 99));

        let timer = sched.release();
        assert_eq!(timer.period_us, Some(100));
        assert_eq!(timer.starts, 1);
    }

    #[test]
    fn failed_restart_halts_ticking() {
        let timer = FakeTimer {
            max_starts: Some(1),
            ..Default::default()
        };
        let mut sched = TickScheduler::new(timer, 8_000_000);
        sched.start(TickPeriod::new(Prescaler::Div8, 99)).unwrap();

        let err = sched.retime(49).unwrap_err();
        assert_eq!(err, Error::PeriodRejected { period_us: 50 });
        assert!(!sched.is_running());
        assert_eq!(sched.period(), TickPeriod::new(Prescaler::Div8, 99));
        assert!(!sched.release().armed);
    }

    struct Counter(u32);

    impl TickHandler for Counter {
        fn on_tick(&mut self) {
            self.0 += 1;
        }
    }

    #[test]
    fn paired_handlers_both_tick() {
        let mut pair = (Counter(0), Counter(10));
        for _ in 0..3 {
            pair.on_tick();
        }
        assert_eq!((pair.0 .0, pair.1 .0), (3, 13));
    }
}
