// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! HCL (hue, chroma, lightness) is CIE LCh(ab), the cylindrical form of CIE Lab,
//! relative to the D50 white point. sRGB is the display space. The conversions are done
//! by [`palette`]; since sRGB is a D65 space, XYZ is adapted between the two white points
//! with the Bradford method.
//!
//! ```text
//!   Hcl ──▶ Lch<D50> ──▶ Xyz<D50> ──adapt──▶ Xyz<D65> ──▶ Srgb<f64> ──clamp──▶ Srgb<u8>
//!   Hcl ◀── Lch<D50> ◀── Xyz<D50> ◀──adapt── Xyz<D65> ◀── Srgb<f64> ◀───────── Srgb<u8>
//! ```
//!
//! Converting to sRGB can produce channels outside `0.0..=1.0`; those colours are out of
//! gamut and get clamped. Converting a clamped [`RgbValue`] back to [`Hcl`] gives the
//! *realized* colour.

use palette::{Clamp as _, Lch, Srgb, Xyz,
              chromatic_adaptation::AdaptInto as _,
              convert::FromColorUnclamped as _,
              white_point::{D50, D65}};

use crate::{RgbValue, normalize_degrees};

type LchD50 = Lch<D50, f64>;
type XyzD50 = Xyz<D50, f64>;
type XyzD65 = Xyz<D65, f64>;

/// Highest lightness any displayable colour can have (white).
pub const LIGHTNESS_CEILING: f64 = 100.0;

/// Below this chroma a converted colour is treated as a gray. Grays come back from the
/// white point adaptation with rounding noise in the a/b plane.
pub const ACHROMATIC_CHROMA: f64 = 1e-6;

/// Cylindrical colour coordinates. `h` in degrees, `c` is the radius in the a/b plane,
/// `l` is CIE lightness.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Hcl {
    pub h: f64,
    pub c: f64,
    pub l: f64,
}

impl Hcl {
    #[must_use]
    pub fn new(h: f64, c: f64, l: f64) -> Self { Self { h, c, l } }

    /// Makes any triple usable as an input:
    /// - non-finite channels become `0`.
    /// - `h` is normalized into `[0, 360)`.
    /// - negative `c` is clamped to `0`.
    /// - finite `l` is kept as is; the display space clamps it.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let finite_or_zero = |it: f64| if it.is_finite() { it } else { 0.0 };
        Self {
            h: normalize_degrees(finite_or_zero(self.h)),
            c: finite_or_zero(self.c).max(0.0),
            l: finite_or_zero(self.l),
        }
    }

    /// Project into sRGB and clamp to the gamut.
    #[must_use]
    pub fn to_rgb(self) -> RgbValue {
        RgbValue::from(self.to_srgb_unclamped().clamp().into_format::<u8>())
    }

    /// `true` if the colour can be displayed without clamping (within half a step of
    /// the 8 bit channel range).
    #[must_use]
    pub fn is_in_gamut(self) -> bool {
        const HALF_STEP: f64 = 0.5 / 255.0;
        let (red, green, blue) = self.to_srgb_unclamped().into_components();
        [red, green, blue]
            .iter()
            .all(|channel| (-HALF_STEP..=1.0 + HALF_STEP).contains(channel))
    }

    /// sRGB channels in `0.0..=1.0` space, before gamut clamping.
    #[must_use]
    pub fn to_srgb_unclamped(self) -> Srgb<f64> {
        let xyz_d50 = XyzD50::from_color_unclamped(LchD50::new(self.l, self.c, self.h));
        let xyz_d65: XyzD65 = xyz_d50.adapt_into();
        Srgb::<f64>::from_color_unclamped(xyz_d65)
    }
}

impl From<LchD50> for Hcl {
    fn from(lch: LchD50) -> Self {
        // Achromatic: the hue is undefined, report 0.
        if lch.chroma < ACHROMATIC_CHROMA {
            return Self {
                h: 0.0,
                c: 0.0,
                l: lch.l,
            };
        }
        Self {
            h: normalize_degrees(lch.hue.into_positive_degrees()),
            c: lch.chroma,
            l: lch.l,
        }
    }
}

impl From<RgbValue> for Hcl {
    /// The realized colour. Lightness is clamped to [`LIGHTNESS_CEILING`] to absorb
    /// floating point noise around white.
    fn from(rgb: RgbValue) -> Self {
        let srgb = Srgb::<u8>::from(rgb).into_format::<f64>();
        let xyz_d65 = XyzD65::from_color_unclamped(srgb);
        let xyz_d50: XyzD50 = xyz_d65.adapt_into();
        let hcl = Hcl::from(LchD50::from_color_unclamped(xyz_d50));
        Self {
            l: hcl.l.clamp(0.0, LIGHTNESS_CEILING),
            ..hcl
        }
    }
}
