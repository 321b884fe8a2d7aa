//! Hand landmark topology and the fixed 21-point pose type
//!
//! Matches the MediaPipe hand landmarker output: index 0 is the wrist,
//! followed by four points per finger from base to tip.

use crate::error::{Result, SignError};

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks per hand
pub const LANDMARK_COUNT: usize = 21;

/// Values per landmark in the flat `[x, y, z, x, y, z, ...]` layout
pub const LANDMARK_STRIDE: usize = 3;

/// Anatomical chains, base to tip: thumb, index, middle, ring, pinky
pub const FINGER_CHAINS: [[usize; 4]; 5] = [
    [THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP],
    [INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP],
    [MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP],
    [RING_MCP, RING_PIP, RING_DIP, RING_TIP],
    [PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP],
];

/// Hand skeleton connections for overlay drawing (bones + palm knuckle line)
#[rustfmt::skip]
pub const HAND_SKELETON: [(usize, usize); 23] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (WRIST, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (WRIST, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, RING_MCP), (RING_MCP, PINKY_MCP),
];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single tracked point in normalized camera space (origin top-left)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
    /// Relative depth; ignored by recognition
    pub z: f32,
}

impl HandLandmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Planar (x, y) distance to another landmark
    pub fn planar_distance(&self, other: &HandLandmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One frame of hand tracking: exactly 21 landmarks with fixed index semantics
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandPose {
    pub landmarks: [HandLandmark; LANDMARK_COUNT],
}

impl HandPose {
    pub fn new(landmarks: [HandLandmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Parse one hand from the flat `[x, y, z] * 21` layout produced by the JS side
    pub fn from_flat(flat_data: &[f32]) -> Result<Self> {
        let expected = LANDMARK_COUNT * LANDMARK_STRIDE;
        if flat_data.len() != expected {
            return Err(SignError::FlatLength {
                expected,
                actual: flat_data.len(),
            });
        }

        let mut landmarks = [HandLandmark::default(); LANDMARK_COUNT];
        for (landmark, chunk) in landmarks.iter_mut().zip(flat_data.chunks_exact(LANDMARK_STRIDE)) {
            *landmark = HandLandmark::new(chunk[0], chunk[1], chunk[2]);
        }
        let pose = Self { landmarks };
        match pose.first_non_finite() {
            Some(index) => Err(SignError::NonFinite { index }),
            None => Ok(pose),
        }
    }

    /// Index of the first landmark with a NaN or infinite x/y
    pub fn first_non_finite(&self) -> Option<usize> {
        self.landmarks
            .iter()
            .position(|lm| !(lm.x.is_finite() && lm.y.is_finite()))
    }

    pub fn wrist(&self) -> HandLandmark {
        self.landmarks[WRIST]
    }

    /// Apply `f` to every landmark, producing a new pose
    pub fn map(&self, mut f: impl FnMut(HandLandmark) -> HandLandmark) -> Self {
        let mut landmarks = self.landmarks;
        for landmark in landmarks.iter_mut() {
            *landmark = f(*landmark);
        }
        Self { landmarks }
    }
}

impl TryFrom<&[HandLandmark]> for HandPose {
    type Error = SignError;

    fn try_from(points: &[HandLandmark]) -> Result<Self> {
        let landmarks = <[HandLandmark; LANDMARK_COUNT]>::try_from(points).map_err(|_| {
            SignError::LandmarkCount {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            }
        })?;
        Ok(Self { landmarks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_orders_points() {
        let flat: Vec<f32> = (0..LANDMARK_COUNT * LANDMARK_STRIDE).map(|v| v as f32).collect();
        let pose = HandPose::from_flat(&flat).unwrap();
        assert_eq!(pose.wrist(), HandLandmark::new(0.0, 1.0, 2.0));
        assert_eq!(pose.landmarks[PINKY_TIP], HandLandmark::new(60.0, 61.0, 62.0));
    }

    #[test]
    fn test_from_flat_rejects_short_input() {
        let flat = vec![0.0; 20 * LANDMARK_STRIDE];
        match HandPose::from_flat(&flat) {
            Err(SignError::FlatLength { expected, actual }) => {
                assert_eq!(expected, 63);
                assert_eq!(actual, 60);
            }
            other => panic!("expected length error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_flat_reports_raw_length() {
        let err = HandPose::from_flat(&[0.5; 64]).unwrap_err();
        assert!(matches!(err, SignError::FlatLength { expected: 63, actual: 64 }));
        assert_eq!(err.to_string(), "expected 63 landmark values ([x, y, z] per point), got 64");
    }

    #[test]
    fn test_from_flat_rejects_non_finite() {
        let mut flat = vec![0.5; LANDMARK_COUNT * LANDMARK_STRIDE];
        flat[INDEX_TIP * LANDMARK_STRIDE] = f32::NAN;
        assert!(matches!(
            HandPose::from_flat(&flat),
            Err(SignError::NonFinite { index: INDEX_TIP })
        ));

        flat[INDEX_TIP * LANDMARK_STRIDE] = 0.5;
        flat[PINKY_TIP * LANDMARK_STRIDE + 1] = f32::INFINITY;
        assert!(matches!(
            HandPose::from_flat(&flat),
            Err(SignError::NonFinite { index: PINKY_TIP })
        ));
    }

    #[test]
    fn test_depth_is_not_checked() {
        let mut flat = vec![0.5; LANDMARK_COUNT * LANDMARK_STRIDE];
        flat[2] = f32::NAN;
        assert!(HandPose::from_flat(&flat).is_ok());
    }

    #[test]
    fn test_try_from_slice() {
        let points = vec![HandLandmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        assert!(HandPose::try_from(points.as_slice()).is_ok());
        assert!(HandPose::try_from(&points[..3]).is_err());
    }

    #[test]
    fn test_chains_cover_every_point_once() {
        let mut seen = [false; LANDMARK_COUNT];
        seen[WRIST] = true;
        for chain in FINGER_CHAINS.iter() {
            for &idx in chain {
                assert!(!seen[idx]);
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
