// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use miette::Diagnostic;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
/// Works hand in hand w/ [`PaletteError`].
pub type PaletteResult<T> = miette::Result<T>;

/// Errors produced by the fallible edges of the engine: colour string parsing and
/// configuration validation. The reducer itself never returns these; it absorbs them
/// into a fallback state and logs them.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Diagnostic)]
pub enum PaletteError {
    #[error("Invalid color string: {input:?}")]
    #[diagnostic(
        code(r3bl_palette::color::invalid_color),
        help("Use hex, a CSS color name, `rgb()` or `hsl()`, eg: `#f80`, `red`, `hsl(0, 100%, 50%)`")
    )]
    InvalidColorString { input: String },

    #[error("Config field `{field}` must be a finite number")]
    #[diagnostic(
        code(r3bl_palette::config::non_finite),
        help("NaN and infinity can't be turned into a colour")
    )]
    NonFiniteConfigValue { field: &'static str },

    #[error("Config field `{field}` has an out of range value: {value}")]
    #[diagnostic(
        code(r3bl_palette::config::out_of_range),
        help("Chroma must be >= 0 and lightness must be in 0..=100")
    )]
    InvalidConfigValue { field: &'static str, value: f64 },
}

impl PaletteError {
    /// Wrap `self` in a [`miette::Report`] and return it as an error result.
    ///
    /// # Errors
    ///
    /// Always returns `Err`.
    pub fn into_result<T>(self) -> PaletteResult<T> { Err(miette::Report::new(self)) }
}
