//! JS-facing interpreter handle
//!
//! Receives MediaPipe hand landmarks from JavaScript once per video frame and
//! hands back recognized words. Each `SignInterpreter` owns its own session;
//! the JS side creates one per camera and drops it when the camera stops.

use wasm_bindgen::prelude::*;

use crate::config::RecognizerConfig;
use crate::hand::{HandPose, HAND_SKELETON};
use crate::session::InterpreterSession;

#[wasm_bindgen]
pub struct SignInterpreter {
    session: InterpreterSession,
    last_candidate: Option<String>,
}

#[wasm_bindgen]
impl SignInterpreter {
    /// Interpreter with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> SignInterpreter {
        Self::from_session(InterpreterSession::default())
    }

    /// Interpreter from a JSON config (kebab-case keys, all optional)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<SignInterpreter, JsValue> {
        let config = RecognizerConfig::from_json(json)?;
        Ok(Self::from_session(InterpreterSession::new(config)?))
    }

    fn from_session(session: InterpreterSession) -> SignInterpreter {
        web_sys::console::log_1(
            &format!("✅ Sign interpreter ready ({})", session.classifier_name()).into(),
        );
        Self {
            session,
            last_candidate: None,
        }
    }

    /// Process one hand (`[x, y, z] * 21`, MediaPipe order) captured at `now_ms`.
    /// Returns the display word when one is recognized on this frame.
    #[wasm_bindgen(js_name = processLandmarks)]
    pub fn process_landmarks(
        &mut self,
        flat_data: &[f32],
        now_ms: f64,
    ) -> Result<Option<String>, JsValue> {
        let pose = HandPose::from_flat(flat_data)?;
        let outcome = self.session.process_frame(&pose, to_millis(now_ms));
        self.last_candidate = outcome.candidate;

        Ok(outcome.word.map(|word| {
            web_sys::console::log_1(&format!("🤟 {}", word.display).into());
            word.display
        }))
    }

    /// Same as `processLandmarks`, stamped with the browser clock
    #[wasm_bindgen(js_name = processLandmarksNow)]
    pub fn process_landmarks_now(&mut self, flat_data: &[f32]) -> Result<Option<String>, JsValue> {
        self.process_landmarks(flat_data, js_sys::Date::now())
    }

    /// Call on frames where the tracker found no hand
    #[wasm_bindgen(js_name = handLost)]
    pub fn hand_lost(&mut self, now_ms: f64) {
        self.last_candidate = None;
        self.session.process_absent(to_millis(now_ms));
    }

    /// Sentence so far, words separated by spaces
    pub fn sentence(&self) -> String {
        self.session.sentence().text()
    }

    /// Sentence words as a JS array of strings
    pub fn words(&self) -> js_sys::Array {
        self.session
            .sentence()
            .words()
            .iter()
            .map(|w| JsValue::from_str(w))
            .collect()
    }

    #[wasm_bindgen(js_name = clearSentence)]
    pub fn clear_sentence(&mut self) {
        self.session.clear_sentence();
    }

    /// Raw classification of the latest frame (for live UI feedback)
    #[wasm_bindgen(js_name = lastCandidate)]
    pub fn last_candidate(&self) -> Option<String> {
        self.last_candidate.clone()
    }

    /// Current wrist movement, e.g. "MOVE_LEFT"
    pub fn movement(&self) -> Option<String> {
        self.session.movement().map(|m| m.as_str().to_string())
    }

    pub fn reset(&mut self) {
        self.last_candidate = None;
        self.session.reset();
    }
}

impl Default for SignInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Hand skeleton connections flattened as `[from, to, from, to, ...]` for overlay drawing
#[wasm_bindgen(js_name = handSkeleton)]
pub fn hand_skeleton() -> Vec<u32> {
    HAND_SKELETON
        .iter()
        .flat_map(|&(from, to)| [from as u32, to as u32])
        .collect()
}

/// JS timestamps are f64 milliseconds; negative or NaN clamps to 0
fn to_millis(now_ms: f64) -> u64 {
    if now_ms.is_finite() && now_ms > 0.0 {
        now_ms as u64
    } else {
        0
    }
}
