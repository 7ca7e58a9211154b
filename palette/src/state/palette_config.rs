// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{LIGHTNESS_CEILING, PaletteError, PaletteResult, ok};

pub mod defaults {
    pub const SEED_HUE_ANGLES: [f64; 3] = [0.0, 120.0, 240.0];
    pub const SEED_SHADE_LIGHTNESS: [f64; 3] = [25.0, 50.0, 75.0];
    pub const SEED_CHROMA: f64 = 40.0;
    pub const NEW_SHADE_LIGHTNESS: f64 = 45.0;
    pub const NEW_SHADE_CHROMA: f64 = 45.0;
    pub const FALLBACK_CHROMA: f64 = 45.0;
}

/// Tunables for the initial grid and for the cells the layer manager invents when a layer
/// is added.
///
/// ```
/// use r3bl_palette::PaletteConfig;
///
/// let config = PaletteConfig::default()
///     .with_seed_hue_angles([0.0, 90.0, 180.0])
///     .with_new_shade_lightness(60.0);
/// assert!(config.validate().is_ok());
///
/// let bad = PaletteConfig::default().with_seed_chroma(-1.0);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteConfig {
    /// One hue layer per angle, in order.
    pub seed_hue_angles: Vec<f64>,
    /// One shade layer per lightness, in order.
    pub seed_shade_lightness: Vec<f64>,
    /// Chroma of every seeded cell.
    pub seed_chroma: f64,
    /// Representative lightness of a new shade layer, and the lightness of its cells.
    pub new_shade_lightness: f64,
    /// Chroma of the cells of a new shade layer.
    pub new_shade_chroma: f64,
    /// Chroma of the cells of a new hue layer when there are no other hue rows to average.
    pub fallback_chroma: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            seed_hue_angles: defaults::SEED_HUE_ANGLES.to_vec(),
            seed_shade_lightness: defaults::SEED_SHADE_LIGHTNESS.to_vec(),
            seed_chroma: defaults::SEED_CHROMA,
            new_shade_lightness: defaults::NEW_SHADE_LIGHTNESS,
            new_shade_chroma: defaults::NEW_SHADE_CHROMA,
            fallback_chroma: defaults::FALLBACK_CHROMA,
        }
    }
}

impl PaletteConfig {
    #[must_use]
    pub fn with_seed_hue_angles(mut self, angles: impl IntoIterator<Item = f64>) -> Self {
        self.seed_hue_angles = angles.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_seed_shade_lightness(
        mut self,
        lightness: impl IntoIterator<Item = f64>,
    ) -> Self {
        self.seed_shade_lightness = lightness.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_seed_chroma(mut self, chroma: f64) -> Self {
        self.seed_chroma = chroma;
        self
    }

    #[must_use]
    pub fn with_new_shade_lightness(mut self, lightness: f64) -> Self {
        self.new_shade_lightness = lightness;
        self
    }

    #[must_use]
    pub fn with_new_shade_chroma(mut self, chroma: f64) -> Self {
        self.new_shade_chroma = chroma;
        self
    }

    #[must_use]
    pub fn with_fallback_chroma(mut self, chroma: f64) -> Self {
        self.fallback_chroma = chroma;
        self
    }

    /// Every value must be finite, chroma must be `>= 0`, and lightness must be in
    /// `0..=100`. Hue angles may be any finite number; they are wrapped on use.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::NonFiniteConfigValue`] or
    /// [`PaletteError::InvalidConfigValue`] for the first offending field.
    pub fn validate(&self) -> PaletteResult<()> {
        for angle in &self.seed_hue_angles {
            check_finite("seed_hue_angles", *angle)?;
        }
        for lightness in &self.seed_shade_lightness {
            check_lightness("seed_shade_lightness", *lightness)?;
        }
        check_chroma("seed_chroma", self.seed_chroma)?;
        check_lightness("new_shade_lightness", self.new_shade_lightness)?;
        check_chroma("new_shade_chroma", self.new_shade_chroma)?;
        check_chroma("fallback_chroma", self.fallback_chroma)?;
        ok!()
    }
}

fn check_finite(field: &'static str, value: f64) -> PaletteResult<()> {
    if value.is_finite() {
        ok!()
    } else {
        PaletteError::NonFiniteConfigValue { field }.into_result()
    }
}

fn check_chroma(field: &'static str, value: f64) -> PaletteResult<()> {
    check_finite(field, value)?;
    if value < 0.0 {
        return PaletteError::InvalidConfigValue { field, value }.into_result();
    }
    ok!()
}

fn check_lightness(field: &'static str, value: f64) -> PaletteResult<()> {
    check_finite(field, value)?;
    if !(0.0..=LIGHTNESS_CEILING).contains(&value) {
        return PaletteError::InvalidConfigValue { field, value }.into_result();
    }
    ok!()
}
