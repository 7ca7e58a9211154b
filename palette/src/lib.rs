// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_palette
//!
//! The state engine behind a colour palette authoring tool. A palette is a dense grid of
//! colours indexed by *hue layer* (rows) and *shade layer* (columns). This crate owns:
//!
//! 1. The data model: [`PaletteState`], [`HueLayer`], [`ShadeLayer`], [`Colour`].
//! 2. The perceptual colour math: CIE HCL (cylindrical Lab) to sRGB hex and back, with the
//!    *realized* colour derived by round tripping the gamut clamped hex value. See
//!    [`Colour`].
//! 3. Circular statistics over hue angles, used to place new hue layers in the widest
//!    free gap of the hue wheel. See [`circular_mean`] and [`find_widest_hue_gap`].
//! 4. Immutable grid surgery with structural sharing: unchanged rows and cells keep their
//!    [`std::sync::Arc`] identity across edits. See [`replace_cell`].
//! 5. A redux style [`PaletteReducer`] that turns a [`PaletteAction`] into a new
//!    [`PaletteState`], and a [`PaletteStore`] that holds the current snapshot.
//!
//! ```
//! use r3bl_palette::{GridCoord, HclProperty, LayerKind, PaletteAction, PaletteStore};
//!
//! let mut store = PaletteStore::default();
//! store.dispatch_action(PaletteAction::add_layer(LayerKind::Hue));
//! store.dispatch_action(PaletteAction::set_value(
//!     GridCoord::new(0, 0),
//!     HclProperty::L,
//!     150.0,
//! ));
//!
//! let state = store.get_state();
//! assert!(state.is_consistent());
//! let colour = state.colour_at(GridCoord::new(0, 0)).unwrap();
//! assert_eq!(colour.l(), 150.0);
//! assert!(colour.realized().l <= 100.0);
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod color_model;
pub mod common;
pub mod layer_manager;
pub mod log;
pub mod math;
pub mod redux;
pub mod state;

// Re-export.
pub use color_model::*;
pub use common::*;
pub use layer_manager::*;
pub use math::*;
pub use redux::*;
pub use state::*;

/// Set to `true` to log every accepted transition at `debug` level. Rejected actions are
/// always logged at `warn` level.
pub const DEBUG_PALETTE_REDUCER: bool = true;
