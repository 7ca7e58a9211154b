// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Layers are the row (hue) and column (shade) definitions of the palette grid. They
//! carry no colours themselves, only an id, a display name, and an optional
//! representative value used when new cells have to be invented for the layer.

use strum_macros::{AsRefStr, Display, EnumString};

use crate::{EntityId, IdAllocator, IdPrefix, InlineString};

/// Which axis of the grid an action addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
pub enum LayerKind {
    #[strum(serialize = "hue")]
    Hue,
    #[strum(serialize = "shade")]
    Shade,
}

/// A row of the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct HueLayer {
    pub id: EntityId,
    pub name: InlineString,
    /// Representative angle of the row, in degrees. Used to place new hue layers and to
    /// colour the cells of a new shade layer.
    pub avg_hue: Option<f64>,
}

/// A column of the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadeLayer {
    pub id: EntityId,
    pub name: InlineString,
    /// Representative lightness of the column. Used to colour the cells of a new hue
    /// layer.
    pub avg_value: Option<f64>,
}

impl HueLayer {
    #[must_use]
    pub fn new(
        name: impl Into<InlineString>,
        avg_hue: Option<f64>,
        ids: &impl IdAllocator,
    ) -> Self {
        Self {
            id: ids.next_id(IdPrefix::Hue),
            name: name.into(),
            avg_hue,
        }
    }
}

impl ShadeLayer {
    #[must_use]
    pub fn new(
        name: impl Into<InlineString>,
        avg_value: Option<f64>,
        ids: &impl IdAllocator,
    ) -> Self {
        Self {
            id: ids.next_id(IdPrefix::Shade),
            name: name.into(),
            avg_value,
        }
    }
}

/// Display name for the `count`th layer of `kind`, eg: `Hue 4`.
#[must_use]
pub fn layer_name(kind: LayerKind, count: usize) -> InlineString {
    use std::fmt::Write as _;
    let mut acc = InlineString::new();
    _ = match kind {
        LayerKind::Hue => write!(acc, "Hue {count}"),
        LayerKind::Shade => write!(acc, "Shade {count}"),
    };
    acc
}
