// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::AsRefStr;

use crate::{ColourInput, GridCoord, HclProperty, LayerKind, Selection};

/// Everything a UI can ask the engine to do. Dispatch one at a time through
/// [`crate::PaletteStore::dispatch_action`] or [`crate::Reducer::run`].
#[derive(Clone, Debug, PartialEq, Default, AsRefStr)]
pub enum PaletteAction {
    /// Patch one of `h`, `c`, `l` of the addressed cell. `hex`, `light` and the realized
    /// colour are derived again and the cell keeps its id.
    SetValue {
        coord: GridCoord,
        property: HclProperty,
        value: f64,
    },
    /// Replace the addressed cell's colour wholesale, keeping its id.
    SetColour {
        coord: GridCoord,
        colour: ColourInput,
    },
    /// Append a layer and a row or column of new cells.
    AddLayer(LayerKind),
    /// Drop a layer and its row or column.
    RemoveLayer { kind: LayerKind, index: usize },
    /// Swap two layers and their rows or columns.
    RearrangeLayer {
        kind: LayerKind,
        from: usize,
        to: usize,
    },
    /// Move the selection. The grid is untouched.
    SelectColour(Selection),
    /// Resync every layer's representative value with its cells.
    RecomputeAverages,
    #[default]
    Noop,
}

impl PaletteAction {
    /// Variant name, eg: `SetValue`.
    #[must_use]
    pub fn name(&self) -> &str { self.as_ref() }

    #[must_use]
    pub fn set_value(
        coord: impl Into<GridCoord>,
        property: HclProperty,
        value: f64,
    ) -> Self {
        Self::SetValue {
            coord: coord.into(),
            property,
            value,
        }
    }

    /// ```
    /// use r3bl_palette::{ColourInput, PaletteAction};
    ///
    /// let action = PaletteAction::set_colour((0, 1), "#ff8800");
    /// assert!(matches!(
    ///     action,
    ///     PaletteAction::SetColour { colour: ColourInput::Css(_), .. }
    /// ));
    /// ```
    #[must_use]
    pub fn set_colour(coord: impl Into<GridCoord>, colour: impl Into<ColourInput>) -> Self {
        Self::SetColour {
            coord: coord.into(),
            colour: colour.into(),
        }
    }

    #[must_use]
    pub fn add_layer(kind: LayerKind) -> Self { Self::AddLayer(kind) }

    #[must_use]
    pub fn remove_layer(kind: LayerKind, index: usize) -> Self {
        Self::RemoveLayer { kind, index }
    }

    #[must_use]
    pub fn rearrange_layer(kind: LayerKind, from: usize, to: usize) -> Self {
        Self::RearrangeLayer { kind, from, to }
    }

    /// Negative indices (eg: `-1`) deselect that axis.
    #[must_use]
    pub fn select_colour(hue: isize, shade: isize) -> Self {
        Self::SelectColour(Selection::from_signed(hue, shade))
    }

    #[must_use]
    pub fn clear_selection() -> Self { Self::SelectColour(Selection::NONE) }
}
