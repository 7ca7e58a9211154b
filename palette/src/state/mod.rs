// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod layer;
pub mod palette_config;
pub mod palette_state;
pub mod selection;

// Re-export.
pub use layer::*;
pub use palette_config::*;
pub use palette_state::*;
pub use selection::*;
