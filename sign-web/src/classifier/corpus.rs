//! Synthetic training corpus
//!
//! There is no recorded dataset. Each sign is described by a coarse pose
//! (per-finger state + spread) and turned into an idealized 21-point hand,
//! which is then normalized exactly like live frames.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use super::features::{extract_features, FeatureVector};
use crate::hand::{HandLandmark, HandPose, FINGER_CHAINS, LANDMARK_COUNT};

/// Discrete finger state used to author poses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FingerState {
    /// Fully extended along its ray
    Open,
    /// Curled into the palm
    Closed,
    /// Bent so the tip sits at the knuckle
    Hooked,
    /// Swung sideways and shortened
    Side,
    /// Tucked under, tip near the palm center
    Tucked,
}

/// Authoring-time description of one sign pose
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseDescriptor {
    pub thumb: FingerState,
    pub index: FingerState,
    pub middle: FingerState,
    pub ring: FingerState,
    pub pinky: FingerState,
    /// `None` means the sign is recognized both spread and together
    pub spread: Option<bool>,
}

/// Fixed ray geometry for one non-thumb finger
struct FingerRay {
    angle: f32,
    spread_delta: f32,
    length_scale: f32,
}

/// Index, middle, ring, pinky
const FINGER_RAYS: [FingerRay; 4] = [
    FingerRay { angle: -0.3, spread_delta: -0.15, length_scale: 1.0 },
    FingerRay { angle: 0.0, spread_delta: 0.0, length_scale: 1.1 },
    FingerRay { angle: 0.3, spread_delta: 0.15, length_scale: 1.0 },
    FingerRay { angle: 0.6, spread_delta: 0.3, length_scale: 0.8 },
];

/// Knuckle distance from the wrist
const BASE_RADIUS: f32 = 0.4;
/// Extra reach of an open finger per unit of length scale
const OPEN_REACH: f32 = 0.5;
/// Radial distance of a curled fingertip
const CLOSED_RADIUS: f32 = 0.2;
/// Sideways swing of a finger in the `Side` state
const SIDE_SWING: f32 = 0.5;

/// Thumb templates (CMC, MCP, IP, tip) relative to the wrist
const THUMB_OUTSTRETCHED: [(f32, f32); 4] = [(0.2, -0.1), (0.3, -0.2), (0.4, -0.3), (0.5, -0.4)];
const THUMB_SIDE: [(f32, f32); 4] = [(0.1, -0.2), (0.1, -0.3), (0.1, -0.4), (0.1, -0.5)];
const THUMB_FOLDED: [(f32, f32); 4] = [(0.1, -0.1), (0.2, -0.1), (0.1, -0.1), (0.0, -0.1)];

impl PoseDescriptor {
    pub const fn new(
        thumb: FingerState,
        index: FingerState,
        middle: FingerState,
        ring: FingerState,
        pinky: FingerState,
    ) -> Self {
        Self { thumb, index, middle, ring, pinky, spread: None }
    }

    pub const fn spread(self, spread: bool) -> Self {
        Self { spread: Some(spread), ..self }
    }

    /// Build the idealized hand for this descriptor, wrist at the origin and
    /// fingers pointing towards negative y (up in image space)
    pub fn synthesize(&self) -> HandPose {
        // Wrist stays at the origin
        let mut landmarks = [HandLandmark::default(); LANDMARK_COUNT];

        let thumb = match self.thumb {
            FingerState::Open => &THUMB_OUTSTRETCHED,
            FingerState::Side => &THUMB_SIDE,
            FingerState::Closed | FingerState::Hooked | FingerState::Tucked => &THUMB_FOLDED,
        };
        for (&idx, &(x, y)) in FINGER_CHAINS[0].iter().zip(thumb.iter()) {
            landmarks[idx] = HandLandmark::new(x, y, 0.0);
        }

        let spread = self.spread.unwrap_or(false);
        let states = [self.index, self.middle, self.ring, self.pinky];
        for ((chain, ray), state) in FINGER_CHAINS[1..].iter().zip(FINGER_RAYS.iter()).zip(states) {
            let angle = if spread { ray.angle + ray.spread_delta } else { ray.angle };
            for (&idx, point) in chain.iter().zip(finger_points(state, angle, ray.length_scale)) {
                landmarks[idx] = point;
            }
        }

        HandPose::new(landmarks)
    }
}

/// Base, two interpolated joints, tip
fn finger_points(state: FingerState, angle: f32, length_scale: f32) -> [HandLandmark; 4] {
    let (sin, cos) = angle.sin_cos();
    let base = (sin * BASE_RADIUS, -cos * BASE_RADIUS);

    let tip = match state {
        FingerState::Open => {
            let reach = BASE_RADIUS + OPEN_REACH * length_scale;
            (sin * reach, -cos * reach)
        }
        FingerState::Closed => (sin * BASE_RADIUS, -cos * CLOSED_RADIUS),
        FingerState::Hooked => base,
        FingerState::Side => {
            let (s, c) = (angle + SIDE_SWING).sin_cos();
            (s * 0.5, -c * 0.3)
        }
        FingerState::Tucked => (0.0, -CLOSED_RADIUS),
    };

    let mid = ((base.0 + tip.0) / 2.0, (base.1 + tip.1) / 2.0);
    let distal = ((mid.0 + tip.0) / 2.0, (mid.1 + tip.1) / 2.0);

    [base, mid, distal, tip].map(|(x, y)| HandLandmark::new(x, y, 0.0))
}

// ============================================================================
// CORPUS
// ============================================================================

/// One labeled reference vector
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingSample {
    pub label: String,
    pub features: FeatureVector,
}

/// A sign as authored: gloss + pose
#[derive(Clone, Copy, Debug)]
pub struct SignPose {
    pub label: &'static str,
    pub pose: PoseDescriptor,
}

/// Ordered, immutable set of reference samples
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    samples: Vec<TrainingSample>,
}

impl Corpus {
    /// Build from authored poses. A pose without an explicit spread value
    /// contributes two samples, spread first.
    pub fn build(signs: &[SignPose]) -> Self {
        let mut samples = Vec::with_capacity(signs.len() * 2);
        for sign in signs {
            match sign.pose.spread {
                Some(_) => samples.push(sample(sign.label, &sign.pose)),
                None => {
                    samples.push(sample(sign.label, &sign.pose.spread(true)));
                    samples.push(sample(sign.label, &sign.pose.spread(false)));
                }
            }
        }
        debug!("Built sign corpus: {} samples from {} signs", samples.len(), signs.len());
        Self { samples }
    }

    /// Corpus over the built-in sign library
    pub fn builtin() -> Self {
        Self::build(&SIGN_POSES)
    }

    /// Process-wide built-in corpus, built on first use and shared read-only
    pub fn shared() -> Arc<Corpus> {
        static SHARED: OnceLock<Arc<Corpus>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(Self::builtin())).clone()
    }

    /// Corpus from explicit samples, e.g. recorded vectors
    pub fn from_samples(samples: Vec<TrainingSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Distinct labels in first-seen order
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for s in &self.samples {
            if !labels.contains(&s.label.as_str()) {
                labels.push(&s.label);
            }
        }
        labels
    }
}

fn sample(label: &str, pose: &PoseDescriptor) -> TrainingSample {
    TrainingSample {
        label: label.to_string(),
        features: extract_features(&pose.synthesize()),
    }
}

// ============================================================================
// SIGN LIBRARY
// ============================================================================

use FingerState::{Closed as C, Hooked as H, Open as O, Side as S, Tucked as T};

const fn sign(label: &'static str, pose: PoseDescriptor) -> SignPose {
    SignPose { label, pose }
}

/// Built-in static signs. Order matters: it breaks distance and vote ties.
pub const SIGN_POSES: [SignPose; 27] = [
    // Basics
    sign("HELLO", PoseDescriptor::new(T, O, O, O, O).spread(true)),
    sign("YES", PoseDescriptor::new(C, C, C, C, C)),
    sign("NO", PoseDescriptor::new(O, O, O, C, C)),
    // ASL static alphabet
    sign("A", PoseDescriptor::new(S, C, C, C, C)),
    sign("B", PoseDescriptor::new(T, O, O, O, O).spread(false)),
    sign("C", PoseDescriptor::new(O, H, H, H, H)),
    sign("D", PoseDescriptor::new(C, O, C, C, C)),
    sign("E", PoseDescriptor::new(T, C, C, C, C)),
    sign("F", PoseDescriptor::new(C, C, O, O, O).spread(true)),
    sign("I", PoseDescriptor::new(C, C, C, C, O)),
    sign("L", PoseDescriptor::new(O, O, C, C, C)),
    sign("M", PoseDescriptor::new(T, C, C, C, C)),
    sign("N", PoseDescriptor::new(T, C, C, C, C)),
    sign("O", PoseDescriptor::new(C, C, C, C, C)),
    sign("R", PoseDescriptor::new(C, O, O, C, C)),
    sign("S", PoseDescriptor::new(T, C, C, C, C)),
    sign("U", PoseDescriptor::new(C, O, O, C, C).spread(false)),
    sign("V", PoseDescriptor::new(C, O, O, C, C).spread(true)),
    sign("W", PoseDescriptor::new(C, O, O, O, C).spread(true)),
    sign("Y", PoseDescriptor::new(O, C, C, C, O)),
    // Common words / phrases
    sign("VICTORY", PoseDescriptor::new(C, O, O, C, C).spread(true)),
    sign("I LOVE YOU", PoseDescriptor::new(O, O, C, C, O)),
    sign("LOOK", PoseDescriptor::new(C, O, C, C, C)),
    sign("THUMBS UP", PoseDescriptor::new(O, C, C, C, C)),
    sign("OK", PoseDescriptor::new(C, C, O, O, O).spread(true)),
    sign("STOP", PoseDescriptor::new(T, O, O, O, O).spread(true)),
    sign("ROCK", PoseDescriptor::new(C, O, C, C, O)),
];
