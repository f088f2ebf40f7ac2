//! Character-by-character flip used by the hero intro.

/// Stagger between consecutive characters.
pub const CHAR_STAGGER_MS: u32 = 50;
/// Point in a character's flip where the old face collapses.
pub const COLLAPSE_AFTER_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipCell {
    /// Old character; `None` renders as a non-breaking placeholder.
    pub front: Option<char>,
    /// New character; `None` when the new text is shorter.
    pub back: Option<char>,
    pub delay_ms: u32,
    pub collapse_at_ms: u32,
}

/// One cell per character position of the longer of the two strings.
pub fn flip_plan(old: &str, new: &str) -> Vec<FlipCell> {
    let old: Vec<char> = old.trim().chars().collect();
    let new: Vec<char> = new.chars().collect();
    let len = old.len().max(new.len());
    (0..len)
        .map(|i| {
            let delay_ms = i as u32 * CHAR_STAGGER_MS;
            FlipCell {
                front: old.get(i).copied(),
                back: new.get(i).copied(),
                delay_ms,
                collapse_at_ms: COLLAPSE_AFTER_MS + delay_ms,
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroStep {
    /// Flip hero line `n` (0-based).
    Line(usize),
    RevealSubtext,
}

/// Intro steps with their absolute start times after page load.
pub const INTRO_TIMELINE: [(IntroStep, u32); 4] = [
    (IntroStep::Line(0), 2000),
    (IntroStep::Line(1), 2500),
    (IntroStep::Line(2), 3000),
    (IntroStep::RevealSubtext, 4000),
];
