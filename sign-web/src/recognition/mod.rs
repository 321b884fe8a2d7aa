//! Recognition module - temporal logic on top of per-frame labels
//!
//! Re-exports only. All logic in submodules.

mod motion;
mod sentence;
mod stabilizer;

pub use motion::{Movement, WristTrail, MIN_TRAIL_FRAMES, MOVE_THRESHOLD, TRAIL_SIZE};
pub use sentence::Sentence;
pub use stabilizer::{
    Emission, Stabilizer, StabilizerState, DEFAULT_DEBOUNCE_MS, DEFAULT_STABILITY_FRAMES,
};
