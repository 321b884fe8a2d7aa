//! Interpreter session - one camera's worth of recognition state
//!
//! Owns everything that changes frame to frame (stabilizer, sentence,
//! smoothing, wrist trail). The classifier is shared and read-only, so any
//! number of sessions can run side by side.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::classifier::{Corpus, LabelSource};
use crate::config::RecognizerConfig;
use crate::error::Result;
use crate::hand::{HandPose, HandSmoother};
use crate::lexicon::translate;
use crate::recognition::{Movement, Sentence, Stabilizer, StabilizerState, WristTrail};

/// A word accepted this frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEvent {
    /// Canonical gloss
    pub label: String,
    /// Gloss in the configured display language
    pub display: String,
    pub at_ms: u64,
    /// False when the sentence dropped it as a repeat
    pub appended: bool,
}

/// Result of processing one frame
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Raw classification of this frame
    pub candidate: Option<String>,
    /// Set only on frames where the stabilizer emits
    pub word: Option<WordEvent>,
    pub movement: Option<Movement>,
}

pub struct InterpreterSession {
    config: RecognizerConfig,
    source: Arc<dyn LabelSource>,
    stabilizer: Stabilizer,
    sentence: Sentence,
    smoother: Option<HandSmoother>,
    trail: WristTrail,
}

impl InterpreterSession {
    /// Session using the configured built-in strategy over the shared corpus
    pub fn new(config: RecognizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Session with a caller-provided classifier; the config's strategy,
    /// `k` and `max-distance` are ignored
    pub fn with_source(config: RecognizerConfig, source: Arc<dyn LabelSource>) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, source))
    }

    fn build(config: RecognizerConfig) -> Self {
        let source = config
            .strategy
            .build(Corpus::shared(), config.k, config.max_distance);
        Self::assemble(config, source)
    }

    fn assemble(config: RecognizerConfig, source: Arc<dyn LabelSource>) -> Self {
        debug!(
            "New interpreter session: {} classifier, {} frames / {} ms",
            source.name(),
            config.stability_frames,
            config.debounce_ms
        );
        Self {
            stabilizer: Stabilizer::new(config.stability_frames, config.debounce_ms),
            sentence: Sentence::new(config.collapse_repeats),
            smoother: config.smoothing.map(HandSmoother::new),
            trail: WristTrail::new(),
            source,
            config,
        }
    }

    /// Run one frame through smoothing, classification and the stabilizer
    pub fn process_frame(&mut self, pose: &HandPose, now_ms: u64) -> FrameOutcome {
        let pose = match self.smoother.as_mut() {
            Some(smoother) => smoother.apply(pose, now_ms),
            None => *pose,
        };

        let wrist = pose.wrist();
        self.trail.push((wrist.x, wrist.y));

        let candidate = self.source.classify(&pose).map(str::to_string);
        trace!("Frame at {} ms classified as {:?}", now_ms, candidate);

        let word = self
            .stabilizer
            .observe(candidate.as_deref(), now_ms)
            .map(|emission| {
                let display = translate(&emission.label, self.config.language).to_string();
                let appended = self.sentence.push(&display);
                WordEvent {
                    label: emission.label,
                    display,
                    at_ms: emission.at_ms,
                    appended,
                }
            });

        FrameOutcome {
            candidate,
            word,
            movement: self.trail.movement(),
        }
    }

    /// No hand in this frame: drop the candidate and the motion history
    pub fn process_absent(&mut self, now_ms: u64) {
        trace!("No hand at {} ms", now_ms);
        self.stabilizer.observe(None, now_ms);
        self.trail.clear();
        if let Some(smoother) = self.smoother.as_mut() {
            smoother.reset();
        }
    }

    pub fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    pub fn clear_sentence(&mut self) {
        self.sentence.clear();
    }

    pub fn state(&self) -> &StabilizerState {
        self.stabilizer.state()
    }

    pub fn movement(&self) -> Option<Movement> {
        self.trail.movement()
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    pub fn classifier_name(&self) -> &'static str {
        self.source.name()
    }

    /// Back to a fresh session with the same classifier and config
    pub fn reset(&mut self) {
        self.stabilizer.reset();
        self.sentence.clear();
        self.trail.clear();
        if let Some(smoother) = self.smoother.as_mut() {
            smoother.reset();
        }
    }
}

impl Default for InterpreterSession {
    fn default() -> Self {
        Self::build(RecognizerConfig::default())
    }
}
