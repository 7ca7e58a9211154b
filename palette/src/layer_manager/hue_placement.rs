// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Where does a new hue layer go, and what do existing layers "stand for" when cells
//! have to be invented for a new layer.

use crate::{Colour, FULL_TURN, InlineVec, PaletteConfig, PaletteState, circular_mean,
            normalize_degrees};

/// Angle used when there are no hue layers at all.
pub const EMPTY_WHEEL_ANGLE: f64 = 0.0;

/// Midpoint of the widest free arc between `angles` on the hue wheel.
///
/// The angles are wrapped into `[0, 360)` and sorted. Gaps are directed: the gap after
/// an angle is the counter-clockwise distance to the next one, and the gap after the last
/// angle wraps around to the first. Each angle is visited in ascending order, looking at
/// the gap ahead of it and then the gap behind it. A gap only replaces the best one so
/// far when it is strictly wider, so the first widest gap found wins a tie.
///
/// Gaps are not measured with [`crate::circular_distance`]: it tops out at 180°, so it
/// can't see a gap wider than half the wheel.
///
/// | input           | result                    |
/// | :-------------- | :------------------------ |
/// | `[]`            | `0`                       |
/// | `[30]`          | `210` (the whole wheel)   |
/// | `[0, 90, 180]`  | `270`                     |
///
/// ```
/// use r3bl_palette::find_widest_hue_gap;
///
/// assert_eq!(find_widest_hue_gap(&[0.0, 90.0, 180.0]), 270.0);
/// assert_eq!(find_widest_hue_gap(&[]), 0.0);
/// ```
#[must_use]
pub fn find_widest_hue_gap(angles: &[f64]) -> f64 {
    let mut sorted = angles
        .iter()
        .map(|it| normalize_degrees(*it))
        .collect::<InlineVec<_>>();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let gap_after = |index: usize| {
        let here = sorted[index];
        match sorted.get(index + 1) {
            Some(next) => next - here,
            None => sorted[0] + FULL_TURN - here,
        }
    };

    let mut best: Option<(f64, f64)> = None;
    let mut consider = |half_gap: f64, angle: f64| {
        if best.is_none_or(|(best_half_gap, _)| half_gap > best_half_gap) {
            best = Some((half_gap, angle));
        }
    };

    for (index, angle) in sorted.iter().enumerate() {
        let forward_half = gap_after(index) / 2.0;
        consider(forward_half, angle + forward_half);

        let backward_half = gap_after((index + count - 1) % count) / 2.0;
        consider(backward_half, angle - backward_half);
    }

    best.map_or(EMPTY_WHEEL_ANGLE, |(_, angle)| normalize_degrees(angle))
}

/// Representative angle of hue row `index`: its `avg_hue`, otherwise the circular mean
/// of the row's requested hues, otherwise `0`.
#[must_use]
pub fn representative_hue(state: &PaletteState, index: usize) -> f64 {
    if let Some(avg_hue) = state.hues.get(index).and_then(|it| it.avg_hue) {
        return normalize_degrees(avg_hue);
    }
    let row_hues = state
        .colours
        .get(index)
        .map(|row| row.iter().map(|it| it.h()).collect::<InlineVec<_>>())
        .unwrap_or_default();
    circular_mean(&row_hues).unwrap_or(EMPTY_WHEEL_ANGLE)
}

/// Representative lightness of shade column `index`: its `avg_value`, otherwise the mean
/// requested lightness of the column, otherwise [`PaletteConfig::new_shade_lightness`].
#[must_use]
pub fn representative_lightness(
    state: &PaletteState,
    config: &PaletteConfig,
    index: usize,
) -> f64 {
    state
        .shades
        .get(index)
        .and_then(|it| it.avg_value)
        .or_else(|| column_mean(state, index, |colour| colour.l()))
        .unwrap_or(config.new_shade_lightness)
}

/// Arithmetic mean of `value` over shade column `index`, or [`None`] if the column has
/// no cells.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn column_mean(
    state: &PaletteState,
    index: usize,
    value: impl Fn(&Colour) -> f64,
) -> Option<f64> {
    let values = state
        .colours
        .iter()
        .filter_map(|row| row.get(index))
        .map(|colour| value(colour))
        .collect::<InlineVec<_>>();
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Angles fed to [`find_widest_hue_gap`]: one representative angle per hue row.
#[must_use]
pub fn representative_hues(state: &PaletteState) -> InlineVec<f64> {
    (0..state.hues.len())
        .map(|index| representative_hue(state, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{GridCoord, HclProperty, MonotonicIdAllocator, assert_eq2, replace_cell};

    #[test_case(&[], 0.0 ; "empty wheel")]
    #[test_case(&[30.0], 210.0 ; "single hue goes opposite")]
    #[test_case(&[0.0, 90.0, 180.0], 270.0 ; "equal gaps first wins")]
    #[test_case(&[180.0, 0.0, 90.0], 270.0 ; "input order does not matter")]
    #[test_case(&[0.0, 120.0, 240.0], 60.0 ; "seed wheel")]
    #[test_case(&[10.0, 20.0], 195.0 ; "wide gap wraps")]
    #[test_case(&[350.0, 10.0], 180.0 ; "gap opposite to wraparound pair")]
    #[test_case(&[0.0, 0.0], 180.0 ; "duplicates")]
    #[test_case(&[-90.0, 450.0], 180.0 ; "angles are wrapped first")]
    fn test_find_widest_hue_gap(angles: &[f64], expected: f64) {
        assert_eq2!(find_widest_hue_gap(angles), expected);
    }

    #[test]
    fn test_gap_wider_than_half_the_wheel() {
        // The free arc from 20 back round to 10 is 350 wide, but the undirected
        // distance between the two hues is only 10.
        assert_eq2!(crate::circular_distance(20.0, 10.0), 10.0);
        assert_eq2!(find_widest_hue_gap(&[10.0, 20.0]), 195.0);
    }

    #[test]
    fn test_gap_tie_break_is_backward_gap_of_first_angle() {
        // Four equal gaps. The forward gap of 0 (midpoint 45) is seen first. Its backward
        // gap (midpoint 315) is just as wide, so it does not replace it.
        assert_eq2!(find_widest_hue_gap(&[0.0, 90.0, 180.0, 270.0]), 45.0);
    }

    #[test]
    fn test_representative_hue_fallbacks() {
        let ids = MonotonicIdAllocator::new();
        let mut state = PaletteState::new(&PaletteConfig::default(), &ids);
        assert_eq2!(representative_hue(&state, 1), 120.0);

        // Without an avg_hue the row's own hues are used.
        state.hues[1].avg_hue = None;
        let mean = representative_hue(&state, 1);
        assert!((mean - 120.0).abs() < 1e-9);

        state.colours = replace_cell(&state.colours, GridCoord::new(1, 0), |it| {
            it.recompute((HclProperty::H, 100.0))
        })
        .unwrap();
        let mean = representative_hue(&state, 1);
        assert!(mean > 100.0 && mean < 120.0);

        assert_eq2!(representative_hue(&state, 99), 0.0);
    }

    #[test]
    fn test_representative_lightness_fallbacks() {
        let ids = MonotonicIdAllocator::new();
        let config = PaletteConfig::default();
        let mut state = PaletteState::new(&config, &ids);
        assert_eq2!(representative_lightness(&state, &config, 0), 25.0);

        state.shades[0].avg_value = None;
        let mean = representative_lightness(&state, &config, 0);
        assert!((mean - 25.0).abs() < 1e-9);

        assert_eq2!(
            representative_lightness(&state, &config, 99),
            config.new_shade_lightness
        );
    }
}
