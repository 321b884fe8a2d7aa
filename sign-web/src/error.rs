//! Error type shared by the recognition core and the JS bridge

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced at the crate's input boundaries.
///
/// Recognition itself never fails: an unknown pose is `None`, not an error.
#[derive(Error, Debug)]
pub enum SignError {
    #[error("expected {expected} hand landmarks, got {actual}")]
    LandmarkCount { expected: usize, actual: usize },

    #[error("expected {expected} landmark values ([x, y, z] per point), got {actual}")]
    FlatLength { expected: usize, actual: usize },

    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("malformed configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SignError>;

impl From<SignError> for JsValue {
    fn from(err: SignError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
