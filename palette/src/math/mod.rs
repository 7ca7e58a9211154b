// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod circular_stats;
pub mod nested_update;

// Re-export.
pub use circular_stats::*;
pub use nested_update::*;
