// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The single entry point for state transitions. The reducer is a pure function of the
//! action, the previous state, the config, and the id allocator: it never fails and
//! never mutates its input. Anything it can't do (an index that no longer exists, say
//! because a layer was removed while an edit targeting it was in flight) leaves the state
//! unchanged and is logged at `warn` level.

use crate::{Colour, DEBUG_PALETTE_REDUCER, IdAllocator, PaletteAction, PaletteConfig,
            PaletteState, add_layer, rearrange_layer, recompute_averages, remove_layer,
            replace_cell};

/// Turns an action and the current state into the next state.
pub trait Reducer<S, A> {
    fn run(&self, action: &A, state: &S) -> S;
}

/// [`Reducer`] for [`PaletteState`]. Borrows the config and the id allocator from its
/// owner (usually [`crate::PaletteStore`]) so that a test can drive it with its own
/// deterministic allocator.
#[derive(Debug)]
pub struct PaletteReducer<'a, I: IdAllocator> {
    pub config: &'a PaletteConfig,
    pub ids: &'a I,
}

impl<'a, I: IdAllocator> PaletteReducer<'a, I> {
    #[must_use]
    pub fn new(config: &'a PaletteConfig, ids: &'a I) -> Self { Self { config, ids } }
}

impl<I: IdAllocator> Reducer<PaletteState, PaletteAction> for PaletteReducer<'_, I> {
    fn run(&self, action: &PaletteAction, state: &PaletteState) -> PaletteState {
        let maybe_new_state = match action {
            PaletteAction::SetValue {
                coord,
                property,
                value,
            } => replace_cell(&state.colours, *coord, |colour| {
                colour.recompute((*property, *value))
            })
            .map(|colours| PaletteState {
                colours,
                ..state.clone()
            }),

            PaletteAction::SetColour { coord, colour } => {
                replace_cell(&state.colours, *coord, |old| {
                    Colour::calculate(colour, old.id().clone())
                })
                .map(|colours| PaletteState {
                    colours,
                    ..state.clone()
                })
            }

            PaletteAction::AddLayer(kind) => {
                Some(add_layer(state, *kind, self.config, self.ids))
            }

            PaletteAction::RemoveLayer { kind, index } => {
                remove_layer(state, *kind, *index)
            }

            PaletteAction::RearrangeLayer { kind, from, to } => {
                rearrange_layer(state, *kind, *from, *to)
            }

            PaletteAction::SelectColour(selection) => {
                let (hue_count, shade_count) = state.dimensions();
                selection
                    .fits(hue_count, shade_count)
                    .then(|| PaletteState {
                        selected: *selection,
                        ..state.clone()
                    })
            }

            PaletteAction::RecomputeAverages => Some(recompute_averages(state)),

            PaletteAction::Noop => return state.clone(),
        };

        match maybe_new_state {
            Some(new_state) => {
                DEBUG_PALETTE_REDUCER.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "🎨 Applied action",
                        action = %action.name(),
                        dimensions = ?new_state.dimensions(),
                        selected = ?new_state.selected,
                    );
                });
                new_state
            }
            None => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "🎨 Rejected action, index out of range",
                    action = ?action,
                    dimensions = ?state.dimensions(),
                );
                state.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use test_case::test_case;

    use super::*;
    use crate::{GridCoord, Hcl, HclProperty, LayerKind, MonotonicIdAllocator, Selection,
                assert_eq2};

    fn seed(ids: &MonotonicIdAllocator) -> PaletteState {
        PaletteState::new(&PaletteConfig::default(), ids)
    }

    #[test]
    fn test_set_value_keeps_id_and_shares_structure() {
        let ids = MonotonicIdAllocator::new();
        let config = PaletteConfig::default();
        let reducer = PaletteReducer::new(&config, &ids);
        let state = seed(&ids);

        let coord = GridCoord::new(1, 2);
        let new_state = reducer.run(
            &PaletteAction::set_value(coord, HclProperty::C, 10.0),
            &state,
        );

        let old_cell = state.colour_at(coord).unwrap();
        let new_cell = new_state.colour_at(coord).unwrap();
        assert_eq2!(new_cell.id(), old_cell.id());
        assert_eq2!(new_cell.c(), 10.0);
        assert_eq2!(new_cell.h(), old_cell.h());
        assert_eq2!(new_cell.l(), old_cell.l());

        assert!(Arc::ptr_eq(&new_state.colours[0], &state.colours[0]));
        assert!(Arc::ptr_eq(&new_state.colours[2], &state.colours[2]));
        for shade in 0..2 {
            assert!(Arc::ptr_eq(
                &new_state.colours[1][shade],
                &state.colours[1][shade]
            ));
        }
        assert!(!Arc::ptr_eq(new_cell, old_cell));
    }

    #[test]
    fn test_set_colour_by_hex_and_hcl() {
        let ids = MonotonicIdAllocator::new();
        let config = PaletteConfig::default();
        let reducer = PaletteReducer::new(&config, &ids);
        let state = seed(&ids);
        let coord = GridCoord::new(0, 1);
        let id = state.colour_at(coord).unwrap().id().clone();

        let by_hex = reducer.run(&PaletteAction::set_colour(coord, "#FF8800"), &state);
        let cell = by_hex.colour_at(coord).unwrap();
        assert_eq2!(cell.hex(), "#ff8800");
        assert_eq2!(cell.id(), &id);

        let by_hcl = reducer.run(
            &PaletteAction::set_colour(coord, Hcl::new(200.0, 20.0, 70.0)),
            &state,
        );
        let cell = by_hcl.colour_at(coord).unwrap();
        assert_eq2!(cell.requested(), Hcl::new(200.0, 20.0, 70.0));
        assert!(cell.is_light());
        assert_eq2!(cell.id(), &id);
    }

    #[test_case("red" ; "named")]
    #[test_case("rgb(255, 0, 0)" ; "rgb function")]
    #[test_case("hsl(0, 100%, 50%)" ; "hsl function")]
    fn test_set_colour_with_css_string(input: &str) {
        let ids = MonotonicIdAllocator::new();
        let config = PaletteConfig::default();
        let reducer = PaletteReducer::new(&config, &ids);
        let state = seed(&ids);
        let coord = GridCoord::new(0, 0);

        let new_state = reducer.run(&PaletteAction::set_colour(coord, input), &state);
        assert_eq2!(new_state.colour_at(coord).unwrap().hex(), "#ff0000");
    }

    #[test]
    fn test_set_colour_with_bad_hex_falls_back() {
        let ids = MonotonicIdAllocator::new();
        let config = PaletteConfig::default();
        let reducer = PaletteReducer::new(&config, &ids);
        let state = seed(&ids);
        let coord = GridCoord::new(2, 2);

        let new_state = reducer.run(&PaletteAction::set_colour(coord, "not a colour"), &state);
        let cell = new_state.colour_at(coord).unwrap();
        assert_eq2!(cell.hex(), "#000000");
        assert_eq2!(cell.id(), state.colour_at(coord).unwrap().id());
        assert!(new_state.is_consistent());
    }

    #[test_case(PaletteAction::set_value((3, 0), HclProperty::H, 1.0) ; "set value hue past end")]
    #[test_case(PaletteAction::set_value((0, 3), HclProperty::H, 1.0) ; "set value shade past end")]
    #[test_case(PaletteAction::set_colour((9, 9), "#ffffff") ; "set colour past end")]
    #[test_case(PaletteAction::remove_layer(LayerKind::Shade, 3) ; "remove past end")]
    #[test_case(PaletteAction::rearrange_layer(LayerKind::Hue, 0, 7) ; "rearrange past end")]
    #[test_case(PaletteAction::select_colour(3, 0) ; "select past end")]
    #[test_case(PaletteAction::Noop ; "noop")]
    fn test_rejected_actions_leave_state_unchanged(action: PaletteAction) {
        let ids = MonotonicIdAllocator::new();
        let config = PaletteConfig::default();
        let reducer = PaletteReducer::new(&config, &ids);
        let state = seed(&ids);

        let new_state = reducer.run(&action, &state);
        assert_eq2!(new_state, state);
        for (old, new) in state.colours.iter().zip(new_state.colours.iter()) {
            assert!(Arc::ptr_eq(old, new));
        }
    }

    #[test]
    fn test_select_colour() {
        let ids = MonotonicIdAllocator::new();
        let config = PaletteConfig::default();
        let reducer = PaletteReducer::new(&config, &ids);
        let state = seed(&ids);

        let selected = reducer.run(&PaletteAction::select_colour(1, 2), &state);
        assert_eq2!(selected.selected, Selection::from(GridCoord::new(1, 2)));
        assert_eq2!(
            selected.selected_hex(),
            state.colour_at(GridCoord::new(1, 2)).unwrap().hex()
        );
        assert!(Arc::ptr_eq(&selected.colours[1], &state.colours[1]));

        let cleared = reducer.run(&PaletteAction::select_colour(-1, -1), &selected);
        assert_eq2!(cleared.selected, Selection::NONE);
        assert_eq2!(cleared.selected_hex(), "#ffffff");
    }

    #[test]
    fn test_add_layers_use_the_injected_allocator() {
        let ids = MonotonicIdAllocator::starting_at(1_000);
        let config = PaletteConfig::default();
        let reducer = PaletteReducer::new(&config, &ids);
        let state = PaletteState::default();

        let state = reducer.run(&PaletteAction::add_layer(LayerKind::Shade), &state);
        let state = reducer.run(&PaletteAction::add_layer(LayerKind::Hue), &state);

        assert_eq2!(state.dimensions(), (1, 1));
        assert_eq2!(state.shades[0].id.as_str(), "shade-1000");
        assert_eq2!(
            state.colour_at(GridCoord::new(0, 0)).unwrap().id().as_str(),
            "col-1001"
        );
        assert_eq2!(state.hues[0].id.as_str(), "hue-1002");
    }
}
