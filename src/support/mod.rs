mod prescaler;
pub use prescaler::{Prescaler, TickPeriod, TimerKind};

mod timer_interface;
pub use timer_interface::{TickDuration, TickTimer, Timer};
