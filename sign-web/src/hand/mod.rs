//! Hand module - landmark topology, pose type and smoothing
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod smoothing;

pub use landmarks::{
    HandLandmark, HandPose,
    // Constants
    FINGER_CHAINS, HAND_SKELETON, LANDMARK_COUNT, LANDMARK_STRIDE,
    WRIST, THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
};
pub use smoothing::{HandSmoother, OneEuroFilter, OneEuroFilter2D, SmoothingConfig};
