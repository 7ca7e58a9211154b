// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Statistics over periodic angle data, in degrees. Hue angles wrap at 360°, so the
//! arithmetic mean of `350°` and `10°` (`180°`) is exactly wrong; these functions work on
//! the circle instead.

/// Degrees in a full turn of the hue wheel.
pub const FULL_TURN: f64 = 360.0;

/// Wrap any finite angle into `[0, 360)`.
///
/// [`f64::rem_euclid`] can return exactly `360.0` for tiny negative inputs (the result
/// rounds up), which is folded back to `0.0`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let it = degrees.rem_euclid(FULL_TURN);
    if it >= FULL_TURN { 0.0 } else { it }
}

/// Mean direction of `angles`: each angle becomes a unit vector, the sine and cosine
/// components are averaged independently, and the angle of the mean vector is recovered
/// with the two argument arctangent. Returns [`None`] for an empty input.
///
/// [`f64::atan2`] is required here. A plain `atan(sin / cos)` loses the quadrant (the
/// mean of `260°` and `280°` would come out as `90°`), and blows up when the cosine
/// component is zero.
///
/// ```
/// use r3bl_palette::{circular_distance, circular_mean};
///
/// let mean = circular_mean(&[350.0, 10.0]).unwrap();
/// assert!(circular_distance(mean, 0.0) < 1e-9);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn circular_mean(angles: &[f64]) -> Option<f64> {
    if angles.is_empty() {
        return None;
    }

    let count = angles.len() as f64;
    let (sin_sum, cos_sum) =
        angles
            .iter()
            .fold((0.0_f64, 0.0_f64), |(sin_acc, cos_acc), degrees| {
                let radians = degrees.to_radians();
                (sin_acc + radians.sin(), cos_acc + radians.cos())
            });

    let mean = (sin_sum / count).atan2(cos_sum / count);
    Some(normalize_degrees(mean.to_degrees()))
}

/// Counter-clockwise distance travelling from `from` to `to`, in `[0, 360)`.
#[must_use]
pub fn forward_distance(from: f64, to: f64) -> f64 { normalize_degrees(to - from) }

/// Shorter of the two arcs between `a` and `b`, in `[0, 180]`.
///
/// ```
/// use r3bl_palette::circular_distance;
///
/// assert_eq!(circular_distance(10.0, 350.0), 20.0);
/// ```
#[must_use]
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let forward = forward_distance(a, b);
    forward.min(FULL_TURN - forward)
}
