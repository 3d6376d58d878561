use derive_more::Display;

/// Easing curves used by reveal timelines, the ticker and the count-up.
///
/// `apply` is used when a value is interpolated in Rust (count-up, frame
/// loops); `css` is used when the browser runs the transition itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum Ease {
    /// Constant speed
    #[display("none")]
    None,
    /// Cubic ease-out
    #[display("power2.out")]
    Power2Out,
    /// Quartic ease-out, the default for reveals
    #[default]
    #[display("power3.out")]
    Power3Out,
}

impl Ease {
    /// Map linear progress `t` (clamped to `0..=1`) onto the curve
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::None => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }

    /// CSS timing function approximating the curve
    pub fn css(&self) -> &'static str {
        match self {
            Ease::None => "linear",
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 3] = [Ease::None, Ease::Power2Out, Ease::Power3Out];

    #[test]
    fn test_endpoints_are_fixed() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-9, "{ease} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease} at 1");
        }
    }

    #[test]
    fn test_progress_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-3.0), ease.apply(0.0));
            assert_eq!(ease.apply(7.5), ease.apply(1.0));
        }
    }

    #[test]
    fn test_curves_are_monotonic() {
        for ease in ALL {
            let mut last = 0.0;
            for step in 1..=100 {
                let value = ease.apply(step as f64 / 100.0);
                assert!(value >= last, "{ease} decreased at step {step}");
                last = value;
            }
        }
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        assert!(Ease::Power3Out.apply(0.5) > Ease::Power2Out.apply(0.5));
        assert!(Ease::Power2Out.apply(0.5) > Ease::None.apply(0.5));
    }
}
