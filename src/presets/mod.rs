//! Named preset layouts for deterministic starting trees.

mod presets;

pub use presets::{PresetError, build_preset};
