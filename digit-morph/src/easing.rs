//! Time-to-progress easing curves.

/// Easing applied to the elapsed fraction before interpolation. All curves
/// map 0 to 0 and 1 to 1 and are monotonic in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    /// Quadratic in/out. The default: transitions start and settle gently.
    #[default]
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    #[test]
    fn boundaries_map_to_boundaries() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-9, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing:?} at 1");
        }
    }

    #[test]
    fn all_curves_are_monotonic() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);

            for i in 1..=100 {
                let t = i as f64 / 100.0;
                let val = easing.apply(t);
                assert!(val >= prev - 1e-9, "{easing:?} non-monotonic at t={t}");
                prev = val;
            }
        }
    }

    #[test]
    fn ease_in_starts_slow() {
        assert!(Easing::EaseIn.apply(0.25) < 0.25);
    }

    #[test]
    fn ease_out_starts_fast() {
        assert!(Easing::EaseOut.apply(0.25) > 0.25);
    }

    #[test]
    fn ease_in_out_crosses_the_midpoint() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-9);
    }
}
