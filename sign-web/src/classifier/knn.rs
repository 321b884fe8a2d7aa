//! k-nearest-neighbor classification over the synthetic corpus

use std::sync::Arc;

use tracing::{trace, warn};

use super::corpus::Corpus;
use super::features::{extract_features, feature_distance, FeatureVector};
use super::source::LabelSource;
use crate::hand::{HandLandmark, HandPose};

/// Neighbors consulted per query
pub const DEFAULT_K: usize = 3;

/// Nearest match farther than this (normalized feature space) is rejected
pub const DEFAULT_MAX_DISTANCE: f32 = 0.5;

/// One ranked corpus match
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor<'a> {
    pub label: &'a str,
    pub distance: f32,
}

/// Majority vote among the k closest samples, with a distance cutoff
#[derive(Clone, Debug)]
pub struct KnnClassifier {
    corpus: Arc<Corpus>,
    k: usize,
    max_distance: f32,
}

impl KnnClassifier {
    pub fn new(corpus: Arc<Corpus>, k: usize, max_distance: f32) -> Self {
        Self {
            corpus,
            k: k.max(1),
            max_distance,
        }
    }

    /// Built-in corpus with default k and cutoff
    pub fn builtin() -> Self {
        Self::new(Arc::new(Corpus::builtin()), DEFAULT_K, DEFAULT_MAX_DISTANCE)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// The k closest samples, nearest first. Equal distances keep corpus order.
    pub fn nearest(&self, features: &FeatureVector) -> Vec<Neighbor<'_>> {
        let mut ranked: Vec<Neighbor<'_>> = self
            .corpus
            .samples()
            .iter()
            .map(|s| Neighbor {
                label: &s.label,
                distance: feature_distance(features, &s.features),
            })
            .collect();

        // Stable sort: ties stay in insertion order
        ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        ranked.truncate(self.k);
        ranked
    }

    /// Classify a feature vector
    pub fn classify_features(&self, features: &FeatureVector) -> Option<&str> {
        let neighbors = self.nearest(features);
        let closest = neighbors.first()?;

        if closest.distance.is_nan() || closest.distance > self.max_distance {
            trace!("Rejected pose: nearest {} at {:.3}", closest.label, closest.distance);
            return None;
        }

        // First label to reach the running maximum wins ties
        let mut counts: Vec<(&str, usize)> = Vec::with_capacity(neighbors.len());
        let mut max_count = 0;
        let mut prediction = None;
        for neighbor in &neighbors {
            let count = match counts.iter_mut().find(|(label, _)| *label == neighbor.label) {
                Some((_, count)) => {
                    *count += 1;
                    *count
                }
                None => {
                    counts.push((neighbor.label, 1));
                    1
                }
            };
            if count > max_count {
                max_count = count;
                prediction = Some(neighbor.label);
            }
        }

        prediction
    }

    /// Classify a landmark slice; an empty slice means no hand this frame
    pub fn classify_landmarks(&self, landmarks: &[HandLandmark]) -> Option<&str> {
        if landmarks.is_empty() {
            return None;
        }
        match HandPose::try_from(landmarks) {
            Ok(pose) => self.classify(&pose),
            Err(err) => {
                warn!("Skipping frame: {}", err);
                None
            }
        }
    }
}

impl LabelSource for KnnClassifier {
    fn classify(&self, pose: &HandPose) -> Option<&str> {
        self.classify_features(&extract_features(pose))
    }

    fn name(&self) -> &'static str {
        "nearest-neighbor"
    }
}
