/// How the configured depth flows into the duty formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthScaling {
    /// `sample + offset`; depth is ignored.
    Bypass,
    /// Depth is stored as given and halved once by `compute_duty`.
    Linear,
    /// Depth and speed are halved when stored, then depth is halved again by
    /// `compute_duty`. A requested depth of 255 ends up as a half depth of 63.
    TwoStage,
}

impl DepthScaling {
    /// Configure-stage transform applied to depth and speed before storing.
    pub const fn stored(self, value: u8) -> u8 {
        match self {
            Self::TwoStage => value / 2,
            Self::Bypass | Self::Linear => value,
        }
    }

    /// Duty for `sample` given an already stored `depth`.
    #[inline]
    pub fn duty(self, sample: i8, depth: u8, offset: u8) -> u8 {
        match self {
            Self::Bypass => clamp_duty(sample as i32 + offset as i32),
            Self::Linear | Self::TwoStage => compute_duty(sample, depth, offset),
        }
    }
}

/// Maps a signed sample onto an 8-bit duty, attenuated around the midpoint by
/// `depth`.
///
/// ```text
/// half   = depth / 2
/// scaled = (sample + offset) * (2 * half) / 255 - half
/// duty   = scaled + offset
/// ```
///
/// Division truncates toward zero. With `offset` = 128 a depth of 255 passes
/// every sample in `-127..=127` through unchanged and a depth of 0 yields
/// `offset` for any sample. Results outside `0..=255` saturate.
#[inline]
pub fn compute_duty(sample: i8, depth: u8, offset: u8) -> u8 {
    let offset = offset as i32;
    let half_depth = (depth / 2) as i32;

    let shifted = sample as i32 + offset;
    let scaled = shifted * (2 * half_depth) / u8::MAX as i32 - half_depth;

    clamp_duty(scaled + offset)
}

#[inline]
fn clamp_duty(duty: i32) -> u8 {
    duty.clamp(0, u8::MAX as i32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FULL_SWING_OFFSET, LEGACY_OFFSET};

    #[test]
    fn max_depth_is_unattenuated() {
        for sample in -127..=127i8 {
            assert_eq!(
                compute_duty(sample, u8::MAX, FULL_SWING_OFFSET) as i32,
                sample as i32 + FULL_SWING_OFFSET as i32,
                "sample {}",
                sample
            );
        }
    }

    #[test]
    fn most_negative_sample_lands_one_above_zero() {
        assert_eq!(compute_duty(i8::MIN, u8::MAX, FULL_SWING_OFFSET), 1);
    }

    #[test]
    fn zero_depth_is_constant() {
        for sample in i8::MIN..=i8::MAX {
            assert_eq!(compute_duty(sample, 0, FULL_SWING_OFFSET), FULL_SWING_OFFSET);
            assert_eq!(compute_duty(sample, 1, LEGACY_OFFSET), LEGACY_OFFSET);
        }
    }

    #[test]
    fn partial_depth_vectors() {
        assert_eq!(compute_duty(100, 100, FULL_SWING_OFFSET), 167);
        assert_eq!(compute_duty(-100, 100, FULL_SWING_OFFSET), 88);
        assert_eq!(compute_duty(0, 100, FULL_SWING_OFFSET), 128);
    }

    #[test]
    fn two_stage_vectors() {
        let depth = DepthScaling::TwoStage.stored(u8::MAX);
        assert_eq!(depth, 127);
        assert_eq!(DepthScaling::TwoStage.duty(100, depth, FULL_SWING_OFFSET), 177);
        assert_eq!(DepthScaling::TwoStage.duty(-100, depth, FULL_SWING_OFFSET), 78);
        assert_eq!(DepthScaling::TwoStage.duty(0, depth, FULL_SWING_OFFSET), 128);
    }

    #[test]
    fn division_truncates_toward_zero() {
        // (-125 + 120) * 2 / 255 is -0.04, truncated to 0 rather than floored to -1
        assert_eq!(compute_duty(-125, 2, 120), 119);
    }

    #[test]
    fn out_of_range_saturates() {
        assert_eq!(compute_duty(-100, u8::MAX, 0), 0);
        assert_eq!(DepthScaling::Bypass.duty(127, 0, LEGACY_OFFSET), u8::MAX);
        assert_eq!(DepthScaling::Bypass.duty(-100, 0, LEGACY_OFFSET), 55);
    }

    #[test]
    fn bypass_ignores_depth() {
        for depth in [0, 1, 100, 255] {
            assert_eq!(DepthScaling::Bypass.duty(100, depth, LEGACY_OFFSET), 255);
            assert_eq!(DepthScaling::Bypass.stored(depth), depth);
        }
    }
}
