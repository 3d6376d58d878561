//! Reveal-on-scroll: the one-shot viewport trigger and the timeline builder.
//!
//! A [`RevealTrigger`] decides *when* a section plays; a [`Timeline`] decides
//! *how* each of its elements moves from a hidden [`VisualState`] to rest.
//! Both are plain values so the browser glue in `ui::motion` stays thin.

use super::Ease;

/// Opacity, offset and scale of one element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl VisualState {
    /// Fully visible, untransformed
    pub const RESTING: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Transparent, pushed `y` pixels down
    pub const fn below(y: f64) -> Self {
        VisualState {
            opacity: 0.0,
            x: 0.0,
            y,
            scale: 1.0,
        }
    }

    /// Transparent, pushed `x` pixels sideways (negative = from the left)
    pub const fn beside(x: f64) -> Self {
        VisualState {
            opacity: 0.0,
            x,
            y: 0.0,
            scale: 1.0,
        }
    }

    pub const fn scaled(self, scale: f64) -> Self {
        VisualState { scale, ..self }
    }

    /// Linear blend between `self` and `other`
    pub fn lerp(&self, other: &VisualState, t: f64) -> VisualState {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            opacity: mix(self.opacity, other.opacity),
            x: mix(self.x, other.x),
            y: mix(self.y, other.y),
            scale: mix(self.scale, other.scale),
        }
    }

    /// Inline style declarations for this state
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

/// A single element's transition inside a timeline. Times are in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: VisualState,
    pub to: VisualState,
    pub delay: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }

    /// State at `t` seconds after the timeline started playing
    pub fn state_at(&self, t: f64) -> VisualState {
        if t <= self.delay {
            return self.from;
        }
        if self.duration <= 0.0 || t >= self.end() {
            return self.to;
        }
        let progress = (t - self.delay) / self.duration;
        self.from.lerp(&self.to, self.ease.apply(progress))
    }

    /// Inline style for `phase`.
    ///
    /// The hidden style carries no transition so the element snaps to its
    /// start state. The playing style lets the browser run the tween. Once
    /// rested, only the end state remains, so the element's own transition
    /// classes (hover lifts, scrolled backgrounds) apply again.
    pub fn style(&self, phase: RevealPhase) -> String {
        match phase {
            RevealPhase::Hidden => format!("{} transition: none;", self.from.to_css()),
            RevealPhase::Playing => {
                let timing = format!("{}s {} {}s", self.duration, self.ease.css(), self.delay);
                format!(
                    "{} transition: opacity {timing}, transform {timing};",
                    self.to.to_css()
                )
            }
            RevealPhase::Rested => self.to.to_css(),
        }
    }
}

/// Where an element is in its one-shot entrance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Playing,
    Rested,
}

/// Where a new tween starts relative to what is already on the timeline
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// When the timeline currently ends
    End,
    /// `n` seconds before the timeline currently ends
    Overlap(f64),
    /// Absolute offset from the start
    At(f64),
}

/// Ordered sequence of tweens, addressed by insertion index
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    delay: f64,
    tweens: Vec<Tween>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift every tween by a fixed start delay
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Length of the timeline, excluding the start delay
    pub fn duration(&self) -> f64 {
        self.tweens
            .iter()
            .map(|tw| tw.end() - self.delay)
            .fold(0.0, f64::max)
    }

    /// Seconds from play until the last tween has finished
    pub fn end(&self) -> f64 {
        self.tweens.iter().map(Tween::end).fold(0.0, f64::max)
    }

    fn resolve(&self, position: Position) -> f64 {
        let start = match position {
            Position::End => self.duration(),
            Position::Overlap(by) => self.duration() - by,
            Position::At(at) => at,
        };
        start.max(0.0)
    }

    /// Append one tween ending at [`VisualState::RESTING`]
    pub fn add(
        mut self,
        from: VisualState,
        duration: f64,
        ease: Ease,
        position: Position,
    ) -> Self {
        let start = self.resolve(position);
        self.tweens.push(Tween {
            from,
            to: VisualState::RESTING,
            delay: self.delay + start,
            duration,
            ease,
        });
        self
    }

    /// Append `count` tweens, each starting `stagger` seconds after the last
    pub fn add_staggered(
        mut self,
        count: usize,
        from: VisualState,
        duration: f64,
        ease: Ease,
        stagger: f64,
        position: Position,
    ) -> Self {
        let start = self.resolve(position);
        for index in 0..count {
            self.tweens.push(Tween {
                from,
                to: VisualState::RESTING,
                delay: self.delay + start + stagger * index as f64,
                duration,
                ease,
            });
        }
        self
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Style for tween `index`; out-of-range indices get no style at all
    pub fn style(&self, index: usize, phase: RevealPhase) -> String {
        self.tweens
            .get(index)
            .map(|tw| tw.style(phase))
            .unwrap_or_default()
    }
}

/// Viewport line at which a trigger fires, as fractions of viewport height
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerConfig {
    /// Fires once the element's top edge rises above this line
    pub start: f64,
    /// Line at which the entrance is considered settled
    pub settle: f64,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            start: 0.85,
            settle: 0.5,
        }
    }
}

impl TriggerConfig {
    pub const fn at(start: f64) -> Self {
        Self { start, settle: 0.5 }
    }

    /// IntersectionObserver root margin equivalent to the start line
    pub fn root_margin(&self) -> String {
        let inset = ((1.0 - self.start) * 100.0).round();
        format!("0px 0px -{inset}% 0px")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
    Armed,
    Fired,
}

/// One-shot scroll trigger: fires the first time the target crosses the
/// start line and never re-arms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    config: TriggerConfig,
    state: TriggerState,
}

impl RevealTrigger {
    pub fn new(config: TriggerConfig) -> Self {
        Self {
            config,
            state: TriggerState::Armed,
        }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn has_fired(&self) -> bool {
        self.state == TriggerState::Fired
    }

    /// Feed the target's current top edge (relative to the viewport).
    ///
    /// Returns `true` exactly once: on the observation that fires.
    pub fn observe(&mut self, top: f64, viewport_height: f64) -> bool {
        if self.has_fired() || viewport_height <= 0.0 {
            return false;
        }
        if top <= self.config.start * viewport_height {
            self.state = TriggerState::Fired;
            return true;
        }
        false
    }

    /// Scroll progress from the start line (0) to the settle line (1)
    pub fn progress(&self, top: f64, viewport_height: f64) -> f64 {
        let start = self.config.start * viewport_height;
        let settle = self.config.settle * viewport_height;
        if start <= settle {
            return if top <= settle { 1.0 } else { 0.0 };
        }
        ((start - top) / (start - settle)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_trigger_fires_once_at_start_line() {
        let mut trigger = RevealTrigger::new(TriggerConfig::default());

        assert!(!trigger.observe(900.0, 1000.0));
        assert!(!trigger.observe(851.0, 1000.0));
        assert!(trigger.observe(850.0, 1000.0));
        assert!(trigger.has_fired());

        // Scrolling away and back never fires again
        assert!(!trigger.observe(2000.0, 1000.0));
        assert!(!trigger.observe(100.0, 1000.0));
        assert_eq!(trigger.state(), TriggerState::Fired);
    }

    #[test]
    fn test_trigger_fires_for_targets_already_scrolled_past() {
        let mut trigger = RevealTrigger::new(TriggerConfig::default());
        assert!(trigger.observe(-400.0, 1000.0));
    }

    #[test]
    fn test_trigger_ignores_degenerate_viewport() {
        let mut trigger = RevealTrigger::new(TriggerConfig::default());
        assert!(!trigger.observe(0.0, 0.0));
        assert_eq!(trigger.state(), TriggerState::Armed);
    }

    #[test]
    fn test_progress_between_start_and_settle() {
        let trigger = RevealTrigger::new(TriggerConfig::default());
        assert!(close(trigger.progress(850.0, 1000.0), 0.0));
        assert!(close(trigger.progress(675.0, 1000.0), 0.5));
        assert!(close(trigger.progress(500.0, 1000.0), 1.0));
        assert!(close(trigger.progress(0.0, 1000.0), 1.0));
        assert!(close(trigger.progress(1200.0, 1000.0), 0.0));
    }

    #[test]
    fn test_root_margin() {
        assert_eq!(TriggerConfig::default().root_margin(), "0px 0px -15% 0px");
        assert_eq!(TriggerConfig::at(0.9).root_margin(), "0px 0px -10% 0px");
        assert_eq!(TriggerConfig::at(0.75).root_margin(), "0px 0px -25% 0px");
    }

    #[test]
    fn test_sequential_tweens_with_overlap() {
        // Hero: title 1s, subtitle 0.8s at -=0.5, buttons 0.6s stagger 0.1 at -=0.4
        let timeline = Timeline::new()
            .with_delay(0.2)
            .add(VisualState::below(50.0), 1.0, Ease::Power3Out, Position::End)
            .add(VisualState::below(30.0), 0.8, Ease::Power3Out, Position::Overlap(0.5))
            .add_staggered(2, VisualState::below(20.0), 0.6, Ease::Power3Out, 0.1, Position::Overlap(0.4));

        let delays: Vec<f64> = timeline.tweens().iter().map(|t| t.delay).collect();
        assert!(close(delays[0], 0.2));
        assert!(close(delays[1], 0.7));
        assert!(close(delays[2], 1.1));
        assert!(close(delays[3], 1.2));
        assert!(close(timeline.duration(), 1.6));
    }

    #[test]
    fn test_children_start_before_parent_finishes() {
        let timeline = Timeline::new()
            .add(VisualState::below(50.0), 1.0, Ease::Power3Out, Position::End)
            .add_staggered(3, VisualState::below(30.0).scaled(0.95), 0.6, Ease::Power3Out, 0.15, Position::Overlap(0.4));

        let parent = timeline.tweens()[0];
        let first_child = timeline.tweens()[1];
        assert!(first_child.delay < parent.end());
        assert!(first_child.delay > parent.delay);

        // Stagger is strictly increasing by index
        let children = &timeline.tweens()[1..];
        for pair in children.windows(2) {
            assert!(close(pair[1].delay - pair[0].delay, 0.15));
        }
    }

    #[test]
    fn test_overlap_never_starts_before_zero() {
        let timeline = Timeline::new().add(VisualState::below(10.0), 0.5, Ease::None, Position::Overlap(3.0));
        assert!(close(timeline.tweens()[0].delay, 0.0));
    }

    #[test]
    fn test_tween_state_over_time() {
        let tween = Tween {
            from: VisualState::below(40.0).scaled(0.9),
            to: VisualState::RESTING,
            delay: 0.5,
            duration: 1.0,
            ease: Ease::None,
        };

        assert_eq!(tween.state_at(0.0), tween.from);
        assert_eq!(tween.state_at(0.5), tween.from);
        let mid = tween.state_at(1.0);
        assert!(close(mid.opacity, 0.5));
        assert!(close(mid.y, 20.0));
        assert!(close(mid.scale, 0.95));
        assert_eq!(tween.state_at(1.5), VisualState::RESTING);
        assert_eq!(tween.state_at(99.0), VisualState::RESTING);
    }

    #[test]
    fn test_styles_switch_from_hidden_to_transition() {
        let timeline = Timeline::new().add(VisualState::beside(-50.0), 1.0, Ease::Power3Out, Position::End);

        let hidden = timeline.style(0, RevealPhase::Hidden);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translate3d(-50px, 0px, 0)"));
        assert!(hidden.contains("transition: none;"));

        let shown = timeline.style(0, RevealPhase::Playing);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("translate3d(0px, 0px, 0) scale(1)"));
        assert!(shown.contains("1s cubic-bezier(0.165, 0.84, 0.44, 1) 0s"));

        assert_eq!(timeline.style(5, RevealPhase::Playing), "");
    }

    #[test]
    fn test_rested_style_leaves_transitions_to_classes() {
        let timeline = Timeline::new()
            .with_delay(0.2)
            .add_staggered(3, VisualState::below(30.0), 0.6, Ease::Power3Out, 0.1, Position::End);

        for index in 0..timeline.len() {
            let rested = timeline.style(index, RevealPhase::Rested);
            assert!(!rested.contains("transition"));
            assert_eq!(rested, VisualState::RESTING.to_css());
        }
        assert!(close(timeline.end(), 1.0));
    }
}
