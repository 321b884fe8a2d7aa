//! Geometric rule-based classification
//!
//! No corpus: checks which fingers are extended and matches a handful of
//! fixed patterns. Works on the normalized pose so it does not depend on how
//! close the hand is to the camera.

use super::features::extract_features;
use super::source::LabelSource;
use crate::hand::{
    HandPose, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP,
    RING_TIP, THUMB_TIP,
};

/// Minimum thumb-tip to index-tip gap (normalized units) for an open palm
pub const PALM_THUMB_GAP: f32 = 0.25;

/// Fixed finger-extension patterns
#[derive(Clone, Debug, Default)]
pub struct RuleClassifier;

impl RuleClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl LabelSource for RuleClassifier {
    fn classify(&self, pose: &HandPose) -> Option<&str> {
        let f = extract_features(pose);
        if f.iter().any(|v| !v.is_finite()) {
            return None;
        }
        let point = |idx: usize| (f[idx * 2], f[idx * 2 + 1]);

        // Image y grows downward: an extended finger has its tip above the PIP joint
        let extended = |tip: usize, pip: usize| point(tip).1 < point(pip).1;

        let index = extended(INDEX_TIP, INDEX_PIP);
        let middle = extended(MIDDLE_TIP, MIDDLE_PIP);
        let ring = extended(RING_TIP, RING_PIP);
        let pinky = extended(PINKY_TIP, PINKY_PIP);

        let (tx, ty) = point(THUMB_TIP);
        let (ix, iy) = point(INDEX_TIP);
        let thumb_gap = ((tx - ix).powi(2) + (ty - iy).powi(2)).sqrt();

        match (index, middle, ring, pinky) {
            (true, true, true, true) if thumb_gap > PALM_THUMB_GAP => Some("HELLO"),
            (false, false, false, false) => Some("YES"),
            (true, true, false, false) => Some("VICTORY"),
            (true, false, false, true) => Some("I LOVE YOU"),
            (true, false, false, false) => Some("LOOK"),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        "rule-based"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::corpus::{FingerState::*, PoseDescriptor};
    use crate::hand::HandLandmark;

    fn classify(pose: PoseDescriptor) -> Option<String> {
        // Place the synthetic hand somewhere in the camera frame
        let hand = pose
            .synthesize()
            .map(|lm| HandLandmark::new(0.5 + lm.x * 0.25, 0.8 + lm.y * 0.25, 0.0));
        RuleClassifier::new().classify(&hand).map(str::to_string)
    }

    #[test]
    fn test_open_palm() {
        let pose = PoseDescriptor::new(Tucked, Open, Open, Open, Open).spread(true);
        assert_eq!(classify(pose).as_deref(), Some("HELLO"));
    }

    #[test]
    fn test_fist() {
        let pose = PoseDescriptor::new(Closed, Closed, Closed, Closed, Closed);
        assert_eq!(classify(pose).as_deref(), Some("YES"));
    }

    #[test]
    fn test_victory() {
        let pose = PoseDescriptor::new(Closed, Open, Open, Closed, Closed).spread(true);
        assert_eq!(classify(pose).as_deref(), Some("VICTORY"));
    }

    #[test]
    fn test_i_love_you() {
        let pose = PoseDescriptor::new(Open, Open, Closed, Closed, Open);
        assert_eq!(classify(pose).as_deref(), Some("I LOVE YOU"));
    }

    #[test]
    fn test_pointing() {
        let pose = PoseDescriptor::new(Closed, Open, Closed, Closed, Closed);
        assert_eq!(classify(pose).as_deref(), Some("LOOK"));
    }

    #[test]
    fn test_unmatched_pattern() {
        // Index, middle and ring up, pinky down
        let pose = PoseDescriptor::new(Closed, Open, Open, Open, Closed).spread(true);
        assert_eq!(classify(pose).as_deref(), None);
    }

    #[test]
    fn test_non_finite_pose_is_unknown() {
        let fist = PoseDescriptor::new(Closed, Closed, Closed, Closed, Closed).synthesize();
        let rules = RuleClassifier::new();

        let mut pose = fist;
        pose.landmarks[INDEX_TIP].x = f32::NAN;
        assert_eq!(rules.classify(&pose), None);

        let mut pose = fist;
        pose.landmarks[RING_TIP].y = f32::INFINITY;
        assert_eq!(rules.classify(&pose), None);
    }
}
