use super::Ease;

/// Animated count from zero to a target, formatted for the stats grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    pub target: u32,
    pub is_percentage: bool,
    /// Seconds
    pub duration: f64,
    pub ease: Ease,
}

impl CountUp {
    pub fn new(target: u32, is_percentage: bool) -> Self {
        Self {
            target,
            is_percentage,
            duration: 2.0,
            ease: Ease::Power2Out,
        }
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Rounded value `elapsed` seconds after the count started
    pub fn value_at(&self, elapsed: f64) -> u32 {
        if self.is_finished(elapsed) {
            return self.target;
        }
        let progress = self.ease.apply(elapsed / self.duration);
        (self.target as f64 * progress).round() as u32
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        self.duration <= 0.0 || elapsed >= self.duration
    }

    pub fn label_at(&self, elapsed: f64) -> String {
        format_count(self.value_at(elapsed), self.is_percentage)
    }

    /// Label shown before the stats grid enters the viewport
    pub fn initial_label(&self) -> String {
        if self.is_percentage {
            "0%".to_string()
        } else {
            "0".to_string()
        }
    }
}

/// `95` -> `"95%"`, `10000` -> `"10,000+"`
pub fn format_count(value: u32, is_percentage: bool) -> String {
    if is_percentage {
        return format!("{value}%");
    }
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push('+');
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(95, true), "95%");
        assert_eq!(format_count(0, true), "0%");
        assert_eq!(format_count(50, false), "50+");
        assert_eq!(format_count(500, false), "500+");
        assert_eq!(format_count(1234, false), "1,234+");
        assert_eq!(format_count(10_000, false), "10,000+");
        assert_eq!(format_count(1_000_000, false), "1,000,000+");
    }

    #[test]
    fn test_count_reaches_exact_target() {
        let count = CountUp::new(10_000, false);
        assert_eq!(count.value_at(0.0), 0);
        assert_eq!(count.value_at(2.0), 10_000);
        assert_eq!(count.value_at(9.0), 10_000);
        assert_eq!(count.label_at(2.0), "10,000+");
    }

    #[test]
    fn test_count_is_monotonic_and_front_loaded() {
        let count = CountUp::new(500, false);
        let mut last = 0;
        for step in 0..=40 {
            let value = count.value_at(step as f64 * 0.05);
            assert!(value >= last);
            last = value;
        }
        assert!(count.value_at(1.0) > 250);
    }

    #[test]
    fn test_initial_labels() {
        assert_eq!(CountUp::new(95, true).initial_label(), "0%");
        assert_eq!(CountUp::new(50, false).initial_label(), "0");
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let count = CountUp::new(95, true).with_duration(0.0);
        assert!(count.is_finished(0.0));
        assert_eq!(count.label_at(0.0), "95%");
    }
}
