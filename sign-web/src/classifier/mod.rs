//! Classifier module - per-frame sign classification
//!
//! Feature extraction, the synthetic corpus, and the two interchangeable
//! strategies (nearest-neighbor and rule-based) behind `LabelSource`.

mod corpus;
mod features;
mod knn;
mod rules;
mod source;

pub use corpus::{Corpus, FingerState, PoseDescriptor, SignPose, TrainingSample, SIGN_POSES};
pub use features::{extract_features, feature_distance, FeatureVector, FEATURE_COUNT};
pub use knn::{KnnClassifier, Neighbor, DEFAULT_K, DEFAULT_MAX_DISTANCE};
pub use rules::{RuleClassifier, PALM_THUMB_GAP};
pub use source::{LabelSource, Strategy};
