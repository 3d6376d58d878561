//! Typewriter state machine.
//!
//! The machine itself never sleeps: every [`Typewriter::step`] performs the
//! transition that is due and returns how long the driver must wait before
//! calling `step` again. This keeps the cadence testable without timers.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterPhase {
    /// Waiting for the start delay
    Idle,
    /// Appending one character per tick
    Typing,
    /// Holding the complete line
    PausingFull,
    /// Line just cleared, next line selected
    Clearing,
    /// Holding the empty input before typing the next line
    PausingEmpty,
}

/// Cadence of the typewriter; the defaults are presentation tuning values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub start_delay: Duration,
    pub char_interval: Duration,
    pub hold_full: Duration,
    pub hold_empty: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            start_delay: Duration::from_millis(3000),
            char_interval: Duration::from_millis(100),
            hold_full: Duration::from_millis(2000),
            hold_empty: Duration::from_millis(1500),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    lines: &'static [&'static str],
    config: TypewriterConfig,
    phase: TypewriterPhase,
    index: usize,
    /// Byte length of the typed prefix of the current line
    typed: usize,
}

impl Typewriter {
    pub fn new(lines: &'static [&'static str], config: TypewriterConfig) -> Self {
        Self {
            lines,
            config,
            phase: TypewriterPhase::Idle,
            index: 0,
            typed: 0,
        }
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    /// Index of the line being typed (or about to be)
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Full text of the current line
    pub fn target(&self) -> &'static str {
        self.lines.get(self.index).copied().unwrap_or("")
    }

    /// Text currently shown in the input
    pub fn text(&self) -> &'static str {
        &self.target()[..self.typed]
    }

    /// Whether typing has begun at least once (drives the caret)
    pub fn has_started(&self) -> bool {
        self.phase != TypewriterPhase::Idle
    }

    /// Delay before the first `step`; `None` when there is nothing to type
    pub fn start(&self) -> Option<Duration> {
        (!self.lines.is_empty()).then_some(self.config.start_delay)
    }

    /// Perform the due transition and return the wait until the next one.
    ///
    /// Returns `None` only when the line list is empty.
    pub fn step(&mut self) -> Option<Duration> {
        if self.lines.is_empty() {
            return None;
        }

        let wait = match self.phase {
            TypewriterPhase::Idle | TypewriterPhase::PausingEmpty => {
                self.phase = TypewriterPhase::Typing;
                self.type_char()
            }
            TypewriterPhase::Typing => self.type_char(),
            TypewriterPhase::PausingFull => {
                self.typed = 0;
                self.index = (self.index + 1) % self.lines.len();
                self.phase = TypewriterPhase::Clearing;
                Duration::ZERO
            }
            TypewriterPhase::Clearing => {
                self.phase = TypewriterPhase::PausingEmpty;
                self.config.hold_empty
            }
        };
        Some(wait)
    }

    fn type_char(&mut self) -> Duration {
        let rest = &self.target()[self.typed..];
        if let Some(ch) = rest.chars().next() {
            self.typed += ch.len_utf8();
        }
        if self.typed >= self.target().len() {
            self.phase = TypewriterPhase::PausingFull;
            self.config.hold_full
        } else {
            self.config.char_interval
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: &[&str] = &["hey", "yo"];

    fn machine() -> Typewriter {
        Typewriter::new(LINES, TypewriterConfig::default())
    }

    /// Step until the machine reaches `phase`, collecting the waits
    fn run_until(tw: &mut Typewriter, phase: TypewriterPhase) -> Vec<Duration> {
        let mut waits = Vec::new();
        for _ in 0..64 {
            waits.push(tw.step().unwrap());
            if tw.phase() == phase {
                return waits;
            }
        }
        panic!("never reached {phase:?}");
    }

    #[test]
    fn test_starts_idle_with_start_delay() {
        let tw = machine();
        assert_eq!(tw.phase(), TypewriterPhase::Idle);
        assert_eq!(tw.text(), "");
        assert!(!tw.has_started());
        assert_eq!(tw.start(), Some(Duration::from_millis(3000)));
    }

    #[test]
    fn test_types_one_character_per_interval() {
        let mut tw = machine();

        assert_eq!(tw.step(), Some(Duration::from_millis(100)));
        assert_eq!(tw.text(), "h");
        assert_eq!(tw.phase(), TypewriterPhase::Typing);

        assert_eq!(tw.step(), Some(Duration::from_millis(100)));
        assert_eq!(tw.text(), "he");

        // Last character enters the full pause
        assert_eq!(tw.step(), Some(Duration::from_millis(2000)));
        assert_eq!(tw.text(), "hey");
        assert_eq!(tw.phase(), TypewriterPhase::PausingFull);
    }

    #[test]
    fn test_clear_then_pause_then_next_line() {
        let mut tw = machine();
        run_until(&mut tw, TypewriterPhase::PausingFull);

        assert_eq!(tw.step(), Some(Duration::ZERO));
        assert_eq!(tw.phase(), TypewriterPhase::Clearing);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.current_index(), 1);

        assert_eq!(tw.step(), Some(Duration::from_millis(1500)));
        assert_eq!(tw.phase(), TypewriterPhase::PausingEmpty);
        assert_eq!(tw.text(), "");

        tw.step();
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
        assert_eq!(tw.text(), "y");
    }

    #[test]
    fn test_cycles_in_order_and_wraps() {
        let mut tw = machine();
        let mut completed = Vec::new();
        for _ in 0..5 {
            run_until(&mut tw, TypewriterPhase::PausingFull);
            completed.push(tw.text());
        }
        assert_eq!(completed, vec!["hey", "yo", "hey", "yo", "hey"]);
    }

    #[test]
    fn test_text_is_always_prefix_or_empty() {
        let mut tw = Typewriter::new(crate::core::content::TYPING_QUESTIONS, TypewriterConfig::default());
        for _ in 0..2000 {
            tw.step();
            let text = tw.text();
            match tw.phase() {
                TypewriterPhase::Typing | TypewriterPhase::PausingFull => {
                    assert!(tw.target().starts_with(text));
                    assert!(!text.is_empty());
                }
                TypewriterPhase::Clearing | TypewriterPhase::PausingEmpty | TypewriterPhase::Idle => {
                    assert_eq!(text, "");
                }
            }
            if tw.phase() == TypewriterPhase::Typing {
                assert!(text.len() < tw.target().len());
            }
        }
    }

    #[test]
    fn test_multibyte_characters_are_typed_whole() {
        const WIDE: &[&str] = &["héé"];
        let mut tw = Typewriter::new(WIDE, TypewriterConfig::default());
        tw.step();
        assert_eq!(tw.text(), "h");
        tw.step();
        assert_eq!(tw.text(), "hé");
        tw.step();
        assert_eq!(tw.text(), "héé");
        assert_eq!(tw.phase(), TypewriterPhase::PausingFull);
    }

    #[test]
    fn test_empty_line_goes_straight_to_full_pause() {
        const BLANK: &[&str] = &["", "a"];
        let mut tw = Typewriter::new(BLANK, TypewriterConfig::default());
        assert_eq!(tw.step(), Some(Duration::from_millis(2000)));
        assert_eq!(tw.phase(), TypewriterPhase::PausingFull);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_no_lines_never_schedules() {
        let mut tw = Typewriter::new(&[], TypewriterConfig::default());
        assert_eq!(tw.start(), None);
        assert_eq!(tw.step(), None);
        assert_eq!(tw.phase(), TypewriterPhase::Idle);
    }

    #[test]
    fn test_custom_cadence_is_respected() {
        let config = TypewriterConfig {
            start_delay: Duration::from_millis(10),
            char_interval: Duration::from_millis(5),
            hold_full: Duration::from_millis(7),
            hold_empty: Duration::from_millis(3),
        };
        let mut tw = Typewriter::new(LINES, config);
        assert_eq!(tw.start(), Some(Duration::from_millis(10)));

        let waits = run_until(&mut tw, TypewriterPhase::PausingEmpty);
        assert_eq!(
            waits,
            vec![
                Duration::from_millis(5),
                Duration::from_millis(5),
                Duration::from_millis(7),
                Duration::ZERO,
                Duration::from_millis(3),
            ]
        );
    }
}
