//! Time-based interpolation.
//!
//! Animations are cooperative: the host advances them with `update(dt)` from
//! its frame timer. Nothing here owns a clock.

/// Quadratic ease-out: fast start, slow end. Input is clamped to [0, 1].
#[must_use]
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    (1.0 - t).mul_add(-(1.0 - t), 1.0)
}

/// A value easing out from `from` to `to` over `duration` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct EasedValue {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time
    pub elapsed: f64,
}

impl EasedValue {
    /// Start a new transition.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Current value. Exactly `to` once complete.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        (self.to - self.from).mul_add(ease_out(self.progress()), self.from)
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance the animation by `dt` seconds. Negative steps are ignored.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(-1.0), 0.0);
        assert_eq!(ease_out(2.0), 1.0);
    }

    #[test]
    fn test_ease_out_is_ahead_of_linear() {
        assert!(ease_out(0.3) > 0.3);
        assert!((ease_out(0.5) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_eased_value_progression() {
        let mut v = EasedValue::new(0.0, 10.0, 1.0);
        assert_eq!(v.value(), 0.0);
        v.update(0.5);
        assert!((v.value() - 7.5).abs() < 1e-9);
        assert!(!v.is_complete());
        v.update(10.0);
        assert!(v.is_complete());
        assert_eq!(v.value(), 10.0);
    }

    #[test]
    fn test_eased_value_zero_duration_is_complete() {
        let v = EasedValue::new(1.0, 0.0, 0.0);
        assert!(v.is_complete());
        assert_eq!(v.value(), 0.0);
    }

    #[test]
    fn test_eased_value_ignores_negative_dt() {
        let mut v = EasedValue::new(0.0, 1.0, 1.0);
        v.update(-5.0);
        assert_eq!(v.elapsed, 0.0);
    }

    proptest! {
        #[test]
        fn prop_eased_value_stays_between_endpoints(from in -10.0f64..10.0, to in -10.0f64..10.0, dt in 0.0f64..2.0) {
            let mut v = EasedValue::new(from, to, 1.0);
            v.update(dt);
            let lo = from.min(to) - 1e-9;
            let hi = from.max(to) + 1e-9;
            prop_assert!(v.value() >= lo && v.value() <= hi);
        }
    }
}
