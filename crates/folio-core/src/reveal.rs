//! Entrance animations expressed as small state machines.
//!
//! A [`Reveal`] tracks whether a section has been seen; [`RevealTiming`] and
//! [`FadeIn`] turn that state into inline CSS for the section's children.

/// Visible fraction at which a section reveals itself.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unobserved,
    PendingVisible,
    Revealed,
}

/// One-shot scroll reveal for a single section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    state: RevealState,
    threshold: f64,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD)
    }
}

impl Reveal {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: RevealState::Unobserved,
            threshold,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Visibility tracking has been attached to the section.
    pub fn observe(&mut self) {
        if self.state == RevealState::Unobserved {
            self.state = RevealState::PendingVisible;
        }
    }

    /// Feed a visibility report. Returns `true` only on the call that
    /// reveals the section; later reports are ignored.
    pub fn on_visibility(&mut self, visible_ratio: f64) -> bool {
        match self.state {
            RevealState::Revealed => false,
            RevealState::Unobserved | RevealState::PendingVisible => {
                self.state = RevealState::PendingVisible;
                if visible_ratio >= self.threshold {
                    self.state = RevealState::Revealed;
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Container/child transition parameters for a revealed section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTiming {
    /// Seconds before the first child starts
    pub delay_children: f64,
    /// Seconds between consecutive children
    pub stagger: f64,
    /// Seconds each child takes to settle
    pub duration: f64,
    /// Vertical offset (px) of a hidden child
    pub offset_y: f64,
}

impl RevealTiming {
    pub const ABOUT: RevealTiming = RevealTiming {
        delay_children: 0.15,
        stagger: 0.08,
        duration: 0.3,
        offset_y: 10.0,
    };

    pub const PROJECTS: RevealTiming = RevealTiming {
        delay_children: 0.3,
        stagger: 0.2,
        duration: 0.5,
        offset_y: 20.0,
    };

    pub const CONTACT: RevealTiming = RevealTiming {
        delay_children: 0.2,
        stagger: 0.1,
        duration: 0.5,
        offset_y: 20.0,
    };

    /// Section headings drop in from above as soon as the page mounts.
    pub const TITLE: RevealTiming = RevealTiming {
        delay_children: 0.0,
        stagger: 0.0,
        duration: 0.5,
        offset_y: -20.0,
    };

    pub fn child_delay(&self, index: usize) -> f64 {
        self.delay_children + self.stagger * index as f64
    }

    /// Inline style for the child at `index`.
    pub fn child_style(&self, index: usize, revealed: bool) -> String {
        if revealed {
            format!(
                "opacity: 1; transform: translateY(0px); transition: opacity {d}s ease-out {delay:.2}s, transform {d}s ease-out {delay:.2}s;",
                d = self.duration,
                delay = self.child_delay(index),
            )
        } else {
            format!(
                "opacity: 0; transform: translateY({}px);",
                self.offset_y
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Distance (px) a fading element travels.
const FADE_DISTANCE: f64 = 80.0;
const FADE_DURATION: f64 = 0.8;
const FADE_EASING: &str = "cubic-bezier(0.25, 0.25, 0.25, 0.75)";

/// Directional fade used by the home hero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeIn {
    pub direction: Direction,
    pub delay: f64,
}

impl FadeIn {
    pub fn new(direction: Direction, delay: f64) -> Self {
        Self { direction, delay }
    }

    pub fn up(delay: f64) -> Self {
        Self::new(Direction::Up, delay)
    }

    /// Starting (x, y) offset of the hidden element.
    pub fn hidden_offset(&self) -> (f64, f64) {
        match self.direction {
            Direction::Up => (0.0, FADE_DISTANCE),
            Direction::Down => (0.0, -FADE_DISTANCE),
            Direction::Left => (FADE_DISTANCE, 0.0),
            Direction::Right => (-FADE_DISTANCE, 0.0),
        }
    }

    pub fn style(&self, shown: bool) -> String {
        if shown {
            format!(
                "opacity: 1; transform: translate(0px, 0px); transition: opacity {FADE_DURATION}s {FADE_EASING} {delay}s, transform {FADE_DURATION}s {FADE_EASING} {delay}s;",
                delay = self.delay,
            )
        } else {
            let (x, y) = self.hidden_offset();
            format!("opacity: 0; transform: translate({x}px, {y}px);")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_exactly_once() {
        let mut reveal = Reveal::default();
        assert_eq!(reveal.state(), RevealState::Unobserved);
        reveal.observe();
        assert_eq!(reveal.state(), RevealState::PendingVisible);

        // enter, exit, enter
        let fired: Vec<bool> = [0.5, 0.0, 0.8]
            .into_iter()
            .map(|ratio| reveal.on_visibility(ratio))
            .collect();

        assert_eq!(fired, vec![true, false, false]);
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_below_threshold_stays_pending() {
        let mut reveal = Reveal::default();
        reveal.observe();
        assert!(!reveal.on_visibility(0.05));
        assert_eq!(reveal.state(), RevealState::PendingVisible);
        assert!(reveal.on_visibility(0.1));
    }

    #[test]
    fn test_report_before_observe_counts_as_observed() {
        let mut reveal = Reveal::default();
        assert!(!reveal.on_visibility(0.0));
        assert_eq!(reveal.state(), RevealState::PendingVisible);
    }

    #[test]
    fn test_observe_after_reveal_is_noop() {
        let mut reveal = Reveal::default();
        reveal.on_visibility(1.0);
        reveal.observe();
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_stagger_delays() {
        let timing = RevealTiming::PROJECTS;
        assert!((timing.child_delay(0) - 0.3).abs() < 1e-9);
        assert!((timing.child_delay(2) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_child_style_hidden_and_revealed() {
        let timing = RevealTiming::CONTACT;
        assert_eq!(
            timing.child_style(0, false),
            "opacity: 0; transform: translateY(20px);"
        );
        let shown = timing.child_style(1, true);
        assert!(shown.starts_with("opacity: 1;"));
        assert!(shown.contains("0.30s"));
    }

    #[test]
    fn test_fade_offsets() {
        assert_eq!(FadeIn::up(0.2).hidden_offset(), (0.0, 80.0));
        assert_eq!(FadeIn::new(Direction::Down, 0.0).hidden_offset(), (0.0, -80.0));
        assert_eq!(FadeIn::new(Direction::Left, 0.0).hidden_offset(), (80.0, 0.0));
        assert_eq!(FadeIn::new(Direction::Right, 0.0).hidden_offset(), (-80.0, 0.0));
    }

    #[test]
    fn test_fade_style() {
        let fade = FadeIn::up(0.35);
        assert_eq!(fade.style(false), "opacity: 0; transform: translate(0px, 80px);");
        assert!(fade.style(true).contains("0.35s"));
    }
}
