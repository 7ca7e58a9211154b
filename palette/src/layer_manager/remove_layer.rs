// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{LayerKind, PaletteState, remove_at, remove_column};

/// Drop layer `index` of `kind` together with its grid row (hue) or its cell in every row
/// (shade). The selection is kept pointing at the same layers, and is cleared on the
/// removed axis if it pointed at the removed layer.
///
/// Returns [`None`] if `index` is out of range. Ids of the removed layer and cells are
/// never handed out again.
#[must_use]
pub fn remove_layer(
    state: &PaletteState,
    kind: LayerKind,
    index: usize,
) -> Option<PaletteState> {
    let selected = state.selected.after_remove(kind, index);
    match kind {
        LayerKind::Hue => Some(PaletteState {
            hues: remove_at(&state.hues, index)?,
            colours: remove_at(&state.colours, index)?,
            selected,
            ..state.clone()
        }),
        LayerKind::Shade => Some(PaletteState {
            shades: remove_at(&state.shades, index)?,
            colours: remove_column(&state.colours, index)?,
            selected,
            ..state.clone()
        }),
    }
}
