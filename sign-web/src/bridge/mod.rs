//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod interpreter;

pub use interpreter::{hand_skeleton, SignInterpreter};
