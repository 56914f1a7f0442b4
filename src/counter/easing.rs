//! Easing curves used to interpolate between start and end values.

use serde::{Deserialize, Serialize};

/// Interpolation curve for a count-up segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Exponential ease-out: fast start, long gentle landing.
    #[default]
    OutExpo,
    /// Constant speed.
    Linear,
}

impl Easing {
    /// Value at `progress` (0.0..=1.0) of a move from `start` by `change`.
    ///
    /// Progress is clamped, so `ease(1.0, ..)` lands exactly on
    /// `start + change` for both curves.
    #[must_use]
    pub fn ease(self, progress: f64, start: f64, change: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::Linear => change * t + start,
            // Scaled by 1024/1023 so the curve reaches 1.0 at t = 1.
            Self::OutExpo => change * ((1.0 - 2f64.powf(-10.0 * t)) * 1024.0 / 1023.0) + start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    const EPSILON: f64 = 1e-9;

    #[rstest]
    #[case::linear(Easing::Linear)]
    #[case::out_expo(Easing::OutExpo)]
    fn test_endpoints(#[case] easing: Easing) {
        assert!((easing.ease(0.0, 10.0, 90.0) - 10.0).abs() < EPSILON);
        assert!((easing.ease(1.0, 10.0, 90.0) - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_out_expo_is_ahead_of_linear() {
        let expo = Easing::OutExpo.ease(0.25, 0.0, 100.0);
        let linear = Easing::Linear.ease(0.25, 0.0, 100.0);
        assert!(expo > linear);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert!((Easing::Linear.ease(2.0, 0.0, 5.0) - 5.0).abs() < EPSILON);
        assert!((Easing::OutExpo.ease(-1.0, 3.0, 5.0) - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_counting_down() {
        let mid = Easing::OutExpo.ease(0.5, 100.0, -100.0);
        assert!(mid < 100.0 && mid > 0.0);
    }
}
