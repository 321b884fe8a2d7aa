//! Sign Web - real-time sign recognition from hand landmarks
//!
//! Landmarks come from a hand tracker (MediaPipe in the browser), are
//! normalized, classified per frame and debounced into words.
//!
//! Module layout:
//! - `hand`: 21-point pose type, topology, smoothing
//! - `classifier`: features, synthetic corpus, nearest-neighbor and rule strategies
//! - `recognition`: stabilizer, sentence, wrist motion
//! - `session`: per-camera state tying the pipeline together
//! - `bridge`: wasm_bindgen entry points

pub mod bridge;
pub mod classifier;
pub mod config;
pub mod error;
pub mod hand;
pub mod lexicon;
pub mod recognition;
pub mod session;

use wasm_bindgen::prelude::*;

pub use bridge::{hand_skeleton, SignInterpreter};
pub use config::RecognizerConfig;
pub use error::{Result, SignError};
pub use hand::{HandLandmark, HandPose};
pub use session::{FrameOutcome, InterpreterSession, WordEvent};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
///
/// Native callers get no subscriber from the crate; install one (for example
/// `tracing_subscriber::fmt::init()`) to see recognition logs.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
}
