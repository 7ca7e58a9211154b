// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod cie_lab;
pub mod colour;
pub mod hex_color_parser;
pub mod rgb_value;

// Re-export.
pub use cie_lab::*;
pub use colour::*;
pub use hex_color_parser::*;
pub use rgb_value::*;
