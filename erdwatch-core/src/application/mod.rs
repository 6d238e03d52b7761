// erdwatch-core/src/application/mod.rs

pub mod check;
pub mod ports;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use erdwatch_core::application::{run_check, preview_prompt};`

pub use check::{preview_prompt, run_check};
