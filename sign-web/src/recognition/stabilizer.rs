//! Temporal stabilizer - turns noisy per-frame labels into discrete words
//!
//! A label must be seen on N consecutive frames before it counts, and once a
//! word is emitted nothing else is emitted until the debounce window has
//! passed. Holding a pose keeps the count climbing, so it is emitted again
//! each time the window elapses.

use tracing::debug;

/// Consecutive identical frames required before emitting
pub const DEFAULT_STABILITY_FRAMES: u32 = 5;

/// Minimum time between two emissions (ms)
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StabilizerState {
    /// No candidate (no hand, or nothing recognized)
    Idle,
    /// Same label seen on `count` consecutive frames
    Accumulating { label: String, count: u32 },
}

/// A word accepted by the stabilizer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Emission {
    pub label: String,
    pub at_ms: u64,
}

/// Per-session debounce state machine
#[derive(Clone, Debug)]
pub struct Stabilizer {
    stability_frames: u32,
    debounce_ms: u64,
    state: StabilizerState,
    last_emission: Option<Emission>,
}

impl Stabilizer {
    pub fn new(stability_frames: u32, debounce_ms: u64) -> Self {
        Self {
            stability_frames: stability_frames.max(1),
            debounce_ms,
            state: StabilizerState::Idle,
            last_emission: None,
        }
    }

    /// Feed one frame's classification. `now_ms` must not go backwards.
    pub fn observe(&mut self, label: Option<&str>, now_ms: u64) -> Option<Emission> {
        let Some(label) = label else {
            self.state = StabilizerState::Idle;
            return None;
        };

        let count = match &mut self.state {
            StabilizerState::Accumulating { label: current, count } if *current == label => {
                *count = count.saturating_add(1);
                *count
            }
            state => {
                *state = StabilizerState::Accumulating {
                    label: label.to_string(),
                    count: 1,
                };
                1
            }
        };

        if count < self.stability_frames || !self.debounce_elapsed(now_ms) {
            return None;
        }

        let emission = Emission {
            label: label.to_string(),
            at_ms: now_ms,
        };
        debug!("Emitting {} after {} stable frames", emission.label, count);
        self.last_emission = Some(emission.clone());
        Some(emission)
    }

    /// The gate is open before the first emission
    fn debounce_elapsed(&self, now_ms: u64) -> bool {
        match &self.last_emission {
            Some(last) => now_ms.saturating_sub(last.at_ms) > self.debounce_ms,
            None => true,
        }
    }

    pub fn state(&self) -> &StabilizerState {
        &self.state
    }

    /// Label currently accumulating, if any
    pub fn candidate(&self) -> Option<&str> {
        match &self.state {
            StabilizerState::Accumulating { label, .. } => Some(label),
            StabilizerState::Idle => None,
        }
    }

    pub fn last_emission(&self) -> Option<&Emission> {
        self.last_emission.as_ref()
    }

    /// Forget the candidate and the debounce history
    pub fn reset(&mut self) {
        self.state = StabilizerState::Idle;
        self.last_emission = None;
    }
}

impl Default for Stabilizer {
    fn default() -> Self {
        Self::new(DEFAULT_STABILITY_FRAMES, DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed `label` for `frames` frames spaced `step_ms` apart; return emissions
    fn feed(
        s: &mut Stabilizer,
        label: Option<&str>,
        frames: u64,
        start_ms: u64,
        step_ms: u64,
    ) -> Vec<Emission> {
        (0..frames)
            .filter_map(|i| s.observe(label, start_ms + i * step_ms))
            .collect()
    }

    #[test]
    fn test_five_frames_emit_once() {
        let mut s = Stabilizer::default();
        let emitted = feed(&mut s, Some("HELLO"), 5, 0, 33);
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0], Emission { label: "HELLO".into(), at_ms: 4 * 33 });
    }

    #[test]
    fn test_four_frames_then_switch_emit_nothing() {
        let mut s = Stabilizer::default();
        assert!(feed(&mut s, Some("HELLO"), 4, 0, 33).is_empty());
        assert!(s.observe(Some("YES"), 200).is_none());
        assert_eq!(s.state(), &StabilizerState::Accumulating { label: "YES".into(), count: 1 });
    }

    #[test]
    fn test_held_pose_within_window_emits_once() {
        let mut s = Stabilizer::default();
        // 20 frames at 30 fps span ~630 ms
        assert_eq!(feed(&mut s, Some("YES"), 20, 0, 33).len(), 1);
    }

    #[test]
    fn test_held_pose_reemits_after_window() {
        let mut s = Stabilizer::default();
        let emitted = feed(&mut s, Some("YES"), 20, 0, 100);
        let times: Vec<u64> = emitted.iter().map(|e| e.at_ms).collect();
        // First at frame 5, then strictly more than 1000 ms later
        assert_eq!(times, vec![400, 1500]);
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let mut s = Stabilizer::new(1, 1000);
        assert!(s.observe(Some("A"), 0).is_some());
        assert!(s.observe(Some("A"), 1000).is_none());
        assert!(s.observe(Some("A"), 1001).is_some());
    }

    #[test]
    fn test_none_resets_to_idle() {
        let mut s = Stabilizer::default();
        feed(&mut s, Some("LOOK"), 3, 0, 33);
        assert!(s.observe(None, 100).is_none());
        assert_eq!(s.state(), &StabilizerState::Idle);
        assert!(feed(&mut s, Some("LOOK"), 4, 133, 33).is_empty());
    }

    #[test]
    fn test_flicker_never_emits() {
        let mut s = Stabilizer::default();
        for i in 0..60u64 {
            let label = if i % 2 == 0 { "HELLO" } else { "YES" };
            assert!(s.observe(Some(label), i * 33).is_none());
        }
    }

    #[test]
    fn test_debounce_applies_across_words() {
        let mut s = Stabilizer::default();
        assert_eq!(feed(&mut s, Some("HELLO"), 5, 0, 33).len(), 1);
        // A different sign stabilizes 300 ms later but the window is still closed
        assert!(feed(&mut s, Some("YES"), 5, 300, 33).is_empty());
        assert_eq!(feed(&mut s, Some("YES"), 30, 465, 33).len(), 1);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut s = Stabilizer::default();
        feed(&mut s, Some("HELLO"), 5, 0, 33);
        s.reset();
        assert!(s.last_emission().is_none());
        assert_eq!(feed(&mut s, Some("HELLO"), 5, 200, 33).len(), 1);
    }
}
