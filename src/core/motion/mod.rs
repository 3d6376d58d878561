//! Motion model for the landing page.
//!
//! Everything here is timing and geometry expressed as plain values; the
//! browser side (`ui::motion`) only feeds in viewport measurements and
//! frame timestamps and writes the resulting styles back.

mod counter;
mod easing;
mod particles;
mod reveal;
mod scope;
mod ticker;
mod typewriter;

pub use counter::{CountUp, format_count};
pub use easing::Ease;
pub use particles::{HERO_PARTICLE_SEED, Particle, ParticleTone, particle_field};
pub use reveal::{Position, RevealPhase, RevealTrigger, Timeline, TriggerConfig, TriggerState, Tween, VisualState};
pub use scope::{Cancel, Liveness, TimerScope};
pub use ticker::{Ticker, TickerConfig};
pub use typewriter::{Typewriter, TypewriterConfig, TypewriterPhase};

/// Shared timing for section reveals
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTiming {
    /// Seconds for a section panel
    pub duration: f64,
    /// Seconds for one staggered list item
    pub item_duration: f64,
    /// Seconds between consecutive list items
    pub stagger: f64,
    /// How long items start before the panels finish
    pub overlap: f64,
    pub ease: Ease,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            duration: 1.0,
            item_duration: 0.6,
            stagger: 0.15,
            overlap: 0.4,
            ease: Ease::Power3Out,
        }
    }
}

impl RevealTiming {
    /// Panels enter together, then `items` stagger in while they settle.
    ///
    /// Tweens `0..panels.len()` belong to the panels, the rest to items.
    pub fn panels_then_items(
        &self,
        panels: &[VisualState],
        items: usize,
        item_from: VisualState,
    ) -> Timeline {
        let mut timeline = Timeline::new();
        for panel in panels {
            timeline = timeline.add(*panel, self.duration, self.ease, Position::At(0.0));
        }
        let position = if panels.is_empty() {
            Position::At(0.0)
        } else {
            Position::Overlap(self.overlap)
        };
        timeline.add_staggered(
            items,
            item_from,
            self.item_duration,
            self.ease,
            self.stagger,
            position,
        )
    }

    /// A single staggered list with its own stagger step
    pub fn list(&self, items: usize, from: VisualState, stagger: f64) -> Timeline {
        Timeline::new().add_staggered(
            items,
            from,
            self.item_duration,
            self.ease,
            stagger,
            Position::At(0.0),
        )
    }
}

/// All presentation tuning for the page, provided once at the root
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Section panels
    pub trigger: TriggerConfig,
    /// Lists further down inside a section
    pub item_trigger: TriggerConfig,
    pub reveal: RevealTiming,
    pub ticker: TickerConfig,
    pub typewriter: TypewriterConfig,
    /// Seconds for the stats count-up
    pub count_up: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            trigger: TriggerConfig::default(),
            item_trigger: TriggerConfig::at(0.9),
            reveal: RevealTiming::default(),
            ticker: TickerConfig::default(),
            typewriter: TypewriterConfig::default(),
            count_up: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panels_then_items_layout() {
        let timing = RevealTiming::default();
        let timeline = timing.panels_then_items(
            &[VisualState::beside(-50.0), VisualState::beside(50.0)],
            5,
            VisualState::below(30.0),
        );

        assert_eq!(timeline.len(), 7);
        let tweens = timeline.tweens();
        assert_eq!(tweens[0].delay, 0.0);
        assert_eq!(tweens[1].delay, 0.0);
        // Items begin 0.4s before the 1s panels end
        assert!((tweens[2].delay - 0.6).abs() < 1e-9);
        assert!((tweens[6].delay - (0.6 + 4.0 * 0.15)).abs() < 1e-9);
        assert!(tweens[2].delay < tweens[0].end());
    }

    #[test]
    fn test_items_without_panels_start_immediately() {
        let timeline = RevealTiming::default().panels_then_items(&[], 3, VisualState::below(30.0));
        assert_eq!(timeline.tweens()[0].delay, 0.0);
    }

    #[test]
    fn test_list_uses_given_stagger() {
        let timeline = RevealTiming::default().list(12, VisualState::below(20.0), 0.05);
        assert_eq!(timeline.len(), 12);
        assert!((timeline.tweens()[11].delay - 0.55).abs() < 1e-9);
    }

    #[test]
    fn test_default_motion_config() {
        let config = MotionConfig::default();
        assert_eq!(config.trigger.start, 0.85);
        assert_eq!(config.item_trigger.start, 0.9);
        assert_eq!(config.count_up, 2.0);
        assert_eq!(config.ticker.copies, 3);
    }
}
