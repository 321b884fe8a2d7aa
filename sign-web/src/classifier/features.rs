//! Feature extraction for sign classification
//!
//! Turns a 21-point hand pose into a 42-float vector that is invariant to
//! where the hand sits in the frame and how large it appears. Orientation is
//! kept: a rotated hand is a different pose.

use crate::hand::{HandPose, LANDMARK_COUNT, WRIST};

/// Number of features per frame (x, y for every landmark)
pub const FEATURE_COUNT: usize = LANDMARK_COUNT * 2;

pub type FeatureVector = [f32; FEATURE_COUNT];

/// Extract 42 features from one frame
///
/// Layout: `[x0, y0, x1, y1, ..., x20, y20]`, each point relative to the
/// wrist and divided by the largest wrist-to-point distance. Depth is dropped;
/// the landmarker's z estimate is too noisy to help.
pub fn extract_features(pose: &HandPose) -> FeatureVector {
    let wrist = pose.landmarks[WRIST];

    let mut centered = [(0.0f32, 0.0f32); LANDMARK_COUNT];
    let mut max_dist = 0.0f32;
    for (out, lm) in centered.iter_mut().zip(pose.landmarks.iter()) {
        let dx = lm.x - wrist.x;
        let dy = lm.y - wrist.y;
        max_dist = max_dist.max((dx * dx + dy * dy).sqrt());
        *out = (dx, dy);
    }

    // Coincident points: divide by 1 and return the all-zero vector
    if max_dist == 0.0 {
        max_dist = 1.0;
    }

    let mut features = [0.0; FEATURE_COUNT];
    for (i, (dx, dy)) in centered.iter().enumerate() {
        features[i * 2] = dx / max_dist;
        features[i * 2 + 1] = dy / max_dist;
    }
    features
}

/// Euclidean distance between two feature vectors
pub fn feature_distance(a: &FeatureVector, b: &FeatureVector) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::HandLandmark;

    /// Irregular but deterministic hand-like pose
    fn sample_pose() -> HandPose {
        let mut landmarks = [HandLandmark::default(); LANDMARK_COUNT];
        for (i, lm) in landmarks.iter_mut().enumerate() {
            let t = i as f32;
            *lm = HandLandmark::new(
                0.45 + 0.013 * t - 0.002 * (t * 1.7).sin(),
                0.70 - 0.017 * t + 0.003 * (t * 0.9).cos(),
                -0.01 * t,
            );
        }
        HandPose::new(landmarks)
    }

    fn assert_close(a: &FeatureVector, b: &FeatureVector) {
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-4, "{} != {}", x, y);
        }
    }

    #[test]
    fn test_scale_invariance() {
        let pose = sample_pose();
        let wrist = pose.wrist();
        for s in [0.25f32, 0.5, 2.0, 3.7] {
            let scaled = pose.map(|lm| {
                HandLandmark::new(
                    wrist.x + (lm.x - wrist.x) * s,
                    wrist.y + (lm.y - wrist.y) * s,
                    lm.z,
                )
            });
            assert_close(&extract_features(&pose), &extract_features(&scaled));
        }
    }

    #[test]
    fn test_translation_invariance() {
        let pose = sample_pose();
        let moved = pose.map(|lm| HandLandmark::new(lm.x - 0.3, lm.y + 0.15, lm.z));
        assert_close(&extract_features(&pose), &extract_features(&moved));
    }

    #[test]
    fn test_depth_is_ignored() {
        let pose = sample_pose();
        let deeper = pose.map(|lm| HandLandmark::new(lm.x, lm.y, lm.z - 5.0));
        assert_eq!(extract_features(&pose), extract_features(&deeper));
    }

    #[test]
    fn test_degenerate_pose_is_all_zero() {
        let pose = HandPose::new([HandLandmark::new(0.4, 0.6, 0.1); LANDMARK_COUNT]);
        let features = extract_features(&pose);
        assert!(features.iter().all(|f| *f == 0.0));
    }

    #[test]
    fn test_unit_max_distance_and_wrist_origin() {
        let features = extract_features(&sample_pose());
        assert_eq!((features[0], features[1]), (0.0, 0.0));
        let max = (0..LANDMARK_COUNT)
            .map(|i| (features[i * 2].powi(2) + features[i * 2 + 1].powi(2)).sqrt())
            .fold(0.0f32, f32::max);
        assert!((max - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_not_rotation_invariant() {
        let pose = sample_pose();
        let wrist = pose.wrist();
        let rotated = pose.map(|lm| {
            // 90 degrees around the wrist
            HandLandmark::new(wrist.x - (lm.y - wrist.y), wrist.y + (lm.x - wrist.x), lm.z)
        });
        let d = feature_distance(&extract_features(&pose), &extract_features(&rotated));
        assert!(d > 0.5);
    }

    #[test]
    fn test_distance_basics() {
        let a = [0.0; FEATURE_COUNT];
        let mut b = [0.0; FEATURE_COUNT];
        b[3] = 3.0;
        b[10] = 4.0;
        assert_eq!(feature_distance(&a, &b), 5.0);
        assert_eq!(feature_distance(&b, &b), 0.0);
    }
}
