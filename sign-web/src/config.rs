//! Recognizer configuration
//!
//! Every field has a default, so the JS side only sends what it overrides:
//!
//! ```json
//! { "strategy": "rule-based", "debounce-ms": 800, "language": "spanish" }
//! ```

use serde::{Deserialize, Serialize};

use crate::classifier::{Strategy, DEFAULT_K, DEFAULT_MAX_DISTANCE};
use crate::error::{Result, SignError};
use crate::hand::SmoothingConfig;
use crate::lexicon::DisplayLanguage;
use crate::recognition::{DEFAULT_DEBOUNCE_MS, DEFAULT_STABILITY_FRAMES};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RecognizerConfig {
    /// Per-frame classifier
    pub strategy: Strategy,
    /// Neighbors consulted by nearest-neighbor
    pub k: usize,
    /// Nearest-neighbor rejection distance in normalized feature space
    pub max_distance: f32,
    /// Consecutive identical frames before a word is emitted
    pub stability_frames: u32,
    /// Minimum time between emissions (ms)
    pub debounce_ms: u64,
    /// Language of emitted display strings
    pub language: DisplayLanguage,
    /// Drop a word equal to the last word of the sentence
    pub collapse_repeats: bool,
    /// Landmark smoothing; `None` disables it
    pub smoothing: Option<SmoothingConfig>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::NearestNeighbor,
            k: DEFAULT_K,
            max_distance: DEFAULT_MAX_DISTANCE,
            stability_frames: DEFAULT_STABILITY_FRAMES,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            language: DisplayLanguage::English,
            collapse_repeats: true,
            smoothing: None,
        }
    }
}

impl RecognizerConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(SignError::Config("k must be at least 1".into()));
        }
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(SignError::Config(format!(
                "max-distance must be a positive number, got {}",
                self.max_distance
            )));
        }
        if self.stability_frames == 0 {
            return Err(SignError::Config("stability-frames must be at least 1".into()));
        }
        if let Some(smoothing) = &self.smoothing {
            let cutoff_ok = smoothing.min_cutoff.is_finite() && smoothing.min_cutoff > 0.0;
            let beta_ok = smoothing.beta.is_finite() && smoothing.beta >= 0.0;
            if !cutoff_ok || !beta_ok {
                return Err(SignError::Config(format!(
                    "smoothing needs min-cutoff > 0 and beta >= 0, got {:?}",
                    smoothing
                )));
            }
        }
        Ok(())
    }
}
