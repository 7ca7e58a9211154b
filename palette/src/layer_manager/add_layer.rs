// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{iter::once, sync::Arc};

use crate::{Colour, ColourGrid, ColourRow, Hcl, HueLayer, IdAllocator, LayerKind,
            PaletteConfig, PaletteState, ShadeLayer, column_mean, find_widest_hue_gap,
            layer_name, representative_hue, representative_hues,
            representative_lightness};

/// Append a layer of `kind` and the matching row or column of new cells. Always
/// succeeds.
#[must_use]
pub fn add_layer(
    state: &PaletteState,
    kind: LayerKind,
    config: &PaletteConfig,
    ids: &impl IdAllocator,
) -> PaletteState {
    match kind {
        LayerKind::Hue => add_hue_layer(state, config, ids),
        LayerKind::Shade => add_shade_layer(state, config, ids),
    }
}

/// Append a hue layer in the widest free gap of the hue wheel (see
/// [`find_widest_hue_gap`]), and a new row with one cell per shade:
/// - hue: the new angle.
/// - chroma: mean chroma of the same shade column across the existing rows, or
///   [`PaletteConfig::fallback_chroma`] if there are no rows yet.
/// - lightness: the shade's [`representative_lightness`].
///
/// Existing rows are shared with `state`.
#[must_use]
pub fn add_hue_layer(
    state: &PaletteState,
    config: &PaletteConfig,
    ids: &impl IdAllocator,
) -> PaletteState {
    let angle = find_widest_hue_gap(&representative_hues(state));

    let new_row: ColourRow = (0..state.shades.len())
        .map(|shade_index| {
            let chroma = column_mean(state, shade_index, Colour::c)
                .unwrap_or(config.fallback_chroma);
            let lightness = representative_lightness(state, config, shade_index);
            Arc::new(Colour::new(Hcl::new(angle, chroma, lightness), ids))
        })
        .collect::<Vec<_>>()
        .into();

    let new_layer = HueLayer::new(
        layer_name(LayerKind::Hue, state.hues.len() + 1),
        Some(angle),
        ids,
    );

    PaletteState {
        hues: state.hues.iter().cloned().chain(once(new_layer)).collect(),
        colours: state.colours.iter().cloned().chain(once(new_row)).collect(),
        ..state.clone()
    }
}

/// Append a shade layer at [`PaletteConfig::new_shade_lightness`], and one new cell at
/// the end of every row, coloured with the row's [`representative_hue`],
/// [`PaletteConfig::new_shade_chroma`] and [`PaletteConfig::new_shade_lightness`].
///
/// Every row is new, but all the existing cells in it are shared with `state`.
#[must_use]
pub fn add_shade_layer(
    state: &PaletteState,
    config: &PaletteConfig,
    ids: &impl IdAllocator,
) -> PaletteState {
    let colours: ColourGrid = state
        .colours
        .iter()
        .enumerate()
        .map(|(hue_index, row)| {
            let new_cell = Arc::new(Colour::new(
                Hcl::new(
                    representative_hue(state, hue_index),
                    config.new_shade_chroma,
                    config.new_shade_lightness,
                ),
                ids,
            ));
            row.iter()
                .cloned()
                .chain(once(new_cell))
                .collect::<Vec<_>>()
                .into()
        })
        .collect();

    let new_layer = ShadeLayer::new(
        layer_name(LayerKind::Shade, state.shades.len() + 1),
        Some(config.new_shade_lightness),
        ids,
    );

    PaletteState {
        shades: state.shades.iter().cloned().chain(once(new_layer)).collect(),
        colours,
        ..state.clone()
    }
}
