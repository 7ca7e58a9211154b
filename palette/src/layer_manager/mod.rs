// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Layer transitions. Every function here is a pure `(&PaletteState, ..) -> PaletteState`
//! that keeps `hues`, `shades` and the colour grid in lock step. Transitions that address
//! a layer by index return [`None`] when the index does not exist, and the caller keeps
//! the old state.

// Attach sources.
pub mod add_layer;
pub mod hue_placement;
pub mod rearrange_layer;
pub mod recompute_averages;
pub mod remove_layer;

// Re-export.
pub use add_layer::*;
pub use hue_placement::*;
pub use rearrange_layer::*;
pub use recompute_averages::*;
pub use remove_layer::*;
