// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Colour, HueLayer, InlineVec, PaletteState, ShadeLayer, circular_mean,
            column_mean};

/// Resync the representative values of every layer with the cells it currently holds:
/// `avg_hue` becomes the circular mean of the row's requested hues, `avg_value` the mean
/// requested lightness of the column. Layers with no cells keep their old value. The
/// grid itself is shared with `state`.
#[must_use]
pub fn recompute_averages(state: &PaletteState) -> PaletteState {
    let hues = state
        .hues
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            let row_hues = state
                .colours
                .get(index)
                .map(|row| row.iter().map(|it| it.h()).collect::<InlineVec<_>>())
                .unwrap_or_default();
            HueLayer {
                avg_hue: circular_mean(&row_hues).or(layer.avg_hue),
                ..layer.clone()
            }
        })
        .collect();

    let shades = state
        .shades
        .iter()
        .enumerate()
        .map(|(index, layer)| ShadeLayer {
            avg_value: column_mean(state, index, Colour::l).or(layer.avg_value),
            ..layer.clone()
        })
        .collect();

    PaletteState {
        hues,
        shades,
        ..state.clone()
    }
}
