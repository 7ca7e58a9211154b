// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod decl_macros;
pub mod id_allocator;
pub mod inline_types;
pub mod palette_error;

// Re-export.
pub use id_allocator::*;
pub use inline_types::*;
pub use palette_error::*;
