// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod action;
pub mod reducer;
pub mod store;

// Re-export.
pub use action::*;
pub use reducer::*;
pub use store::*;
