// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The immutable palette snapshot handed to renderers.
//!
//! ```text
//!              shades[0]  shades[1]  shades[2]
//!   hues[0]  [ colour,    colour,    colour   ]  <- colours[0]: SharedRow<Colour>
//!   hues[1]  [ colour,    colour,    colour   ]  <- colours[1]
//! ```
//!
//! The grid is always dense: `colours.len() == hues.len()` and every row has
//! `shades.len()` cells. Every transition in [`crate::layer_manager`] and
//! [`crate::PaletteReducer`] returns a new [`PaletteState`] that keeps this shape.

use std::sync::Arc;

use crate::{Colour, GridCoord, Hcl, HueLayer, IdAllocator, LayerKind, PaletteConfig,
            Selection, ShadeLayer, SharedRow, layer_name};

pub type ColourRef = Arc<Colour>;
pub type ColourRow = SharedRow<Colour>;
pub type ColourGrid = Vec<ColourRow>;

/// Hex shown for the selection swatch when no cell is selected.
pub const NO_SELECTION_HEX: &str = "#ffffff";

#[derive(Clone, Debug, PartialEq, Default)]
pub struct PaletteState {
    pub hues: Vec<HueLayer>,
    pub shades: Vec<ShadeLayer>,
    pub colours: ColourGrid,
    pub selected: Selection,
}

impl PaletteState {
    /// Seed grid: one hue layer per [`PaletteConfig::seed_hue_angles`], one shade layer
    /// per [`PaletteConfig::seed_shade_lightness`], and every cell at
    /// [`PaletteConfig::seed_chroma`].
    #[must_use]
    pub fn new(config: &PaletteConfig, ids: &impl IdAllocator) -> Self {
        let hues = config
            .seed_hue_angles
            .iter()
            .enumerate()
            .map(|(index, angle)| {
                HueLayer::new(layer_name(LayerKind::Hue, index + 1), Some(*angle), ids)
            })
            .collect::<Vec<_>>();

        let shades = config
            .seed_shade_lightness
            .iter()
            .enumerate()
            .map(|(index, lightness)| {
                ShadeLayer::new(
                    layer_name(LayerKind::Shade, index + 1),
                    Some(*lightness),
                    ids,
                )
            })
            .collect::<Vec<_>>();

        let colours: ColourGrid = config
            .seed_hue_angles
            .iter()
            .map(|angle| {
                config
                    .seed_shade_lightness
                    .iter()
                    .map(|lightness| {
                        Arc::new(Colour::new(
                            Hcl::new(*angle, config.seed_chroma, *lightness),
                            ids,
                        ))
                    })
                    .collect::<Vec<_>>()
                    .into()
            })
            .collect();

        Self {
            hues,
            shades,
            colours,
            selected: Selection::NONE,
        }
    }

    /// `(hue count, shade count)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) { (self.hues.len(), self.shades.len()) }

    #[must_use]
    pub fn colour_at(&self, coord: GridCoord) -> Option<&ColourRef> {
        self.colours.get(coord.hue)?.get(coord.shade)
    }

    #[must_use]
    pub fn contains(&self, coord: GridCoord) -> bool { self.colour_at(coord).is_some() }

    #[must_use]
    pub fn selected_colour(&self) -> Option<&ColourRef> {
        self.colour_at(self.selected.cell()?)
    }

    /// Hex of the selected cell, or [`NO_SELECTION_HEX`].
    #[must_use]
    pub fn selected_hex(&self) -> &str {
        self.selected_colour()
            .map_or(NO_SELECTION_HEX, |colour| colour.hex())
    }

    /// Number of layers of `kind`.
    #[must_use]
    pub fn layer_count(&self, kind: LayerKind) -> usize {
        match kind {
            LayerKind::Hue => self.hues.len(),
            LayerKind::Shade => self.shades.len(),
        }
    }

    /// The grid is dense and the selection only addresses existing layers.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let (hue_count, shade_count) = self.dimensions();
        self.colours.len() == hue_count
            && self.colours.iter().all(|row| row.len() == shade_count)
            && self.selected.fits(hue_count, shade_count)
    }

    /// Every colour, row by row.
    pub fn iter_colours(&self) -> impl Iterator<Item = &ColourRef> {
        self.colours.iter().flat_map(|row| row.iter())
    }
}
