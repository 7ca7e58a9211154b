// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{LayerKind, PaletteState, swap_at, swap_columns};

/// Swap layers `from` and `to` of `kind`, and the matching grid rows (hue) or the
/// matching cells of every row (shade). This is a pairwise swap: layers between the two
/// indices keep their place, so applying the same swap twice restores the original order.
///
/// `from == to` returns an identical state. Returns [`None`] if either index is out of
/// range.
#[must_use]
pub fn rearrange_layer(
    state: &PaletteState,
    kind: LayerKind,
    from: usize,
    to: usize,
) -> Option<PaletteState> {
    let selected = state.selected.after_swap(kind, from, to);
    match kind {
        LayerKind::Hue => Some(PaletteState {
            hues: swap_at(&state.hues, from, to)?,
            colours: swap_at(&state.colours, from, to)?,
            selected,
            ..state.clone()
        }),
        LayerKind::Shade => Some(PaletteState {
            shades: swap_at(&state.shades, from, to)?,
            colours: swap_columns(&state.colours, from, to)?,
            selected,
            ..state.clone()
        }),
    }
}
