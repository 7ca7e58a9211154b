// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{GridCoord, LayerKind};

/// Pointer into the grid. Each axis is independent: a selected hue with no selected shade
/// highlights a whole row. [`None`] on an axis means nothing is selected on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    pub hue: Option<usize>,
    pub shade: Option<usize>,
}

impl From<GridCoord> for Selection {
    fn from(GridCoord { hue, shade }: GridCoord) -> Self {
        Self {
            hue: Some(hue),
            shade: Some(shade),
        }
    }
}

impl Selection {
    pub const NONE: Selection = Selection {
        hue: None,
        shade: None,
    };

    #[must_use]
    pub fn new(hue: Option<usize>, shade: Option<usize>) -> Self { Self { hue, shade } }

    /// Signed indices where any negative value (eg: `-1`) means "nothing selected".
    #[must_use]
    pub fn from_signed(hue: isize, shade: isize) -> Self {
        Self {
            hue: usize::try_from(hue).ok(),
            shade: usize::try_from(shade).ok(),
        }
    }

    /// The selected cell, if both axes are selected.
    #[must_use]
    pub fn cell(&self) -> Option<GridCoord> {
        Some(GridCoord::new(self.hue?, self.shade?))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.hue.is_none() && self.shade.is_none() }

    /// `true` if every selected axis addresses an existing layer.
    #[must_use]
    pub fn fits(&self, hue_count: usize, shade_count: usize) -> bool {
        self.hue.is_none_or(|it| it < hue_count)
            && self.shade.is_none_or(|it| it < shade_count)
    }

    /// Selection after the layer `index` of `kind` is removed: the removed layer is
    /// deselected, later layers shift down by one.
    #[must_use]
    pub fn after_remove(self, kind: LayerKind, index: usize) -> Self {
        let shift = |axis: Option<usize>| match axis {
            Some(it) if it == index => None,
            Some(it) if it > index => Some(it - 1),
            other => other,
        };
        match kind {
            LayerKind::Hue => Self {
                hue: shift(self.hue),
                ..self
            },
            LayerKind::Shade => Self {
                shade: shift(self.shade),
                ..self
            },
        }
    }

    /// Selection after layers `from` and `to` of `kind` trade places: the selection
    /// follows the layer it pointed at.
    #[must_use]
    pub fn after_swap(self, kind: LayerKind, from: usize, to: usize) -> Self {
        let follow = |axis: Option<usize>| match axis {
            Some(it) if it == from => Some(to),
            Some(it) if it == to => Some(from),
            other => other,
        };
        match kind {
            LayerKind::Hue => Self {
                hue: follow(self.hue),
                ..self
            },
            LayerKind::Shade => Self {
                shade: follow(self.shade),
                ..self
            },
        }
    }
}
