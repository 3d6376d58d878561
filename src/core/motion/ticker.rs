//! Looping ticker: a list rendered several times back to back, translated
//! upward by exactly one list-height per loop and snapped back to zero.
//!
//! Because the snap target shows the same pixels as the loop end, the reset
//! is invisible as long as at least two copies are rendered.

/// Geometry and timing of the ticker
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickerConfig {
    /// Height of one row including spacing, in pixels
    pub item_height: f64,
    /// Seconds per full loop
    pub duration: f64,
    /// Number of consecutive renders of the list
    pub copies: usize,
    /// Delay before the loop starts, giving the list time to lay out
    pub start_delay_ms: u32,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            item_height: 90.0,
            duration: 20.0,
            copies: 3,
            start_delay_ms: 200,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ticker {
    config: TickerConfig,
    item_count: usize,
}

impl Ticker {
    pub fn new(config: TickerConfig, item_count: usize) -> Self {
        Self { config, item_count }
    }

    pub fn config(&self) -> &TickerConfig {
        &self.config
    }

    /// Distance travelled per loop: one list-height
    pub fn loop_distance(&self) -> f64 {
        self.config.item_height * self.item_count as f64
    }

    /// Vertical offset `elapsed` seconds after the loop started.
    ///
    /// Always in `(-loop_distance, 0]`; constant speed within a loop.
    pub fn offset_at(&self, elapsed: f64) -> f64 {
        let distance = self.loop_distance();
        if self.config.duration <= 0.0 || distance <= 0.0 || !elapsed.is_finite() {
            return 0.0;
        }
        let phase = elapsed.max(0.0).rem_euclid(self.config.duration) / self.config.duration;
        if phase == 0.0 {
            return 0.0;
        }
        -distance * phase
    }

    /// Inline style for the translated container
    pub fn style_at(&self, elapsed: f64) -> String {
        format!(
            "transform: translate3d(0, {}px, 0); will-change: transform;",
            self.offset_at(elapsed)
        )
    }

    /// Rows to render: every item `copies` times, tagged with a unique key
    pub fn rows<T: Copy>(&self, items: &[T]) -> Vec<(usize, T)> {
        items
            .iter()
            .copied()
            .cycle()
            .take(items.len() * self.config.copies)
            .enumerate()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker() -> Ticker {
        Ticker::new(TickerConfig::default(), 6)
    }

    #[test]
    fn test_loop_distance_is_one_list_height() {
        assert_eq!(ticker().loop_distance(), 540.0);
    }

    #[test]
    fn test_offset_returns_to_start_after_full_loop() {
        let ticker = ticker();
        let start = ticker.offset_at(0.0);
        assert_eq!(start, 0.0);
        assert_eq!(ticker.offset_at(20.0), start);
        assert_eq!(ticker.offset_at(40.0), start);
        assert_eq!(ticker.style_at(20.0), ticker.style_at(0.0));
    }

    #[test]
    fn test_offset_moves_at_constant_speed() {
        let ticker = ticker();
        assert!((ticker.offset_at(5.0) + 135.0).abs() < 1e-9);
        assert!((ticker.offset_at(10.0) + 270.0).abs() < 1e-9);
        assert!((ticker.offset_at(15.0) + 405.0).abs() < 1e-9);
        assert!((ticker.offset_at(25.0) - ticker.offset_at(5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_offset_stays_within_one_loop() {
        let ticker = ticker();
        for tenth in 0..2000 {
            let offset = ticker.offset_at(tenth as f64 / 10.0);
            assert!(offset <= 0.0);
            assert!(offset > -ticker.loop_distance());
        }
    }

    #[test]
    fn test_degenerate_configs_never_move() {
        assert_eq!(Ticker::new(TickerConfig::default(), 0).offset_at(3.0), 0.0);

        let frozen = TickerConfig {
            duration: 0.0,
            ..TickerConfig::default()
        };
        assert_eq!(Ticker::new(frozen, 6).offset_at(3.0), 0.0);
        assert_eq!(ticker().offset_at(f64::NAN), 0.0);
        assert_eq!(ticker().offset_at(-4.0), 0.0);
    }

    #[test]
    fn test_rows_repeat_list_in_order() {
        let rows = ticker().rows(&['a', 'b', 'c']);
        let keys: Vec<usize> = rows.iter().map(|(k, _)| *k).collect();
        let values: String = rows.iter().map(|(_, v)| *v).collect();

        assert_eq!(keys, (0..9).collect::<Vec<_>>());
        assert_eq!(values, "abcabcabc");
    }
}
