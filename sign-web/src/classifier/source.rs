//! Label sources: anything that maps one hand pose to a sign gloss

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::corpus::Corpus;
use super::knn::KnnClassifier;
use super::rules::RuleClassifier;
use crate::hand::HandPose;

/// Per-frame pose classifier.
///
/// Implementations hold no per-session state so one instance can serve any
/// number of sessions. A trained model can be plugged in here without
/// touching feature extraction or the stabilizer.
pub trait LabelSource: Send + Sync {
    /// Gloss for this pose, or `None` when nothing matches well enough
    fn classify(&self, pose: &HandPose) -> Option<&str>;

    /// Short identifier for logs
    fn name(&self) -> &'static str;
}

/// Which built-in classifier a session uses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    NearestNeighbor,
    RuleBased,
}

impl Strategy {
    /// Construct the classifier for this strategy. `k` and `max_distance`
    /// only apply to nearest-neighbor.
    pub fn build(self, corpus: Arc<Corpus>, k: usize, max_distance: f32) -> Arc<dyn LabelSource> {
        match self {
            Strategy::NearestNeighbor => Arc::new(KnnClassifier::new(corpus, k, max_distance)),
            Strategy::RuleBased => Arc::new(RuleClassifier::new()),
        }
    }
}
