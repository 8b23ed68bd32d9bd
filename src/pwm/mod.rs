mod pwm_calc;
pub use pwm_calc::{compute_duty, DepthScaling};

mod pwm_channel;
pub use pwm_channel::{DutyRegister, Polarity};

mod native_channels;
pub use native_channels::{scale_duty, NativeCh};

mod capture;
pub use capture::CaptureRegister;
