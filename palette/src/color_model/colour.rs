// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A single palette entry. A [`Colour`] stores three views of the same colour:
//!
//! | view      | fields            | source                                          |
//! | :-------- | :---------------- | :---------------------------------------------- |
//! | requested | `h`, `c`, `l`     | what the user asked for (sanitized)             |
//! | display   | `hex`             | requested HCL projected into sRGB, gamut clamped|
//! | realized  | `r`               | `hex` converted back to HCL                     |
//!
//! The realized view is the only source of truth for what is actually shown. It differs
//! from the requested view whenever the request is outside the sRGB gamut.
//!
//! A [`Colour`] is immutable. Edits produce a new value through [`Colour::recompute`] or
//! [`Colour::calculate`], which keep the id.

use std::fmt::{Display, Formatter};

use strum_macros::{AsRefStr, Display as StrumDisplay, EnumString};

use crate::{EntityId, Hcl, IdAllocator, IdPrefix, InlineString, PaletteResult,
            RgbValue};

/// Colour shown when a colour string can't be parsed.
pub const FALLBACK_HCL: Hcl = Hcl {
    h: 0.0,
    c: 0.0,
    l: 0.0,
};

/// Lightness at (and above) which a colour counts as light.
pub const LIGHT_THRESHOLD: f64 = 50.0;

/// One scalar channel of the requested HCL coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, StrumDisplay, EnumString)]
pub enum HclProperty {
    #[strum(serialize = "h")]
    H,
    #[strum(serialize = "c")]
    C,
    #[strum(serialize = "l")]
    L,
}

/// Partial update of the requested HCL coordinates. [`None`] keeps the current value.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct HclPatch {
    pub h: Option<f64>,
    pub c: Option<f64>,
    pub l: Option<f64>,
}

impl HclPatch {
    #[must_use]
    pub fn apply_to(self, base: Hcl) -> Hcl {
        Hcl {
            h: self.h.unwrap_or(base.h),
            c: self.c.unwrap_or(base.c),
            l: self.l.unwrap_or(base.l),
        }
    }
}

impl From<(HclProperty, f64)> for HclPatch {
    fn from((property, value): (HclProperty, f64)) -> Self {
        match property {
            HclProperty::H => Self {
                h: Some(value),
                ..Default::default()
            },
            HclProperty::C => Self {
                c: Some(value),
                ..Default::default()
            },
            HclProperty::L => Self {
                l: Some(value),
                ..Default::default()
            },
        }
    }
}

/// The two ways to specify a colour wholesale: a colour string, or an explicit HCL
/// triple. Exactly one of them is carried.
#[derive(Clone, Debug, PartialEq)]
pub enum ColourInput {
    /// Any CSS colour string, see [`RgbValue::try_from_color_str`].
    Css(InlineString),
    Hcl(Hcl),
}

impl From<&str> for ColourInput {
    fn from(value: &str) -> Self { Self::Css(value.into()) }
}

impl From<Hcl> for ColourInput {
    fn from(value: Hcl) -> Self { Self::Hcl(value) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Colour {
    id: EntityId,
    h: f64,
    c: f64,
    l: f64,
    rgb: RgbValue,
    hex: InlineString,
    light: bool,
    r: Hcl,
}

impl Colour {
    /// Build a colour from requested HCL coordinates, keeping `id`.
    ///
    /// The input is [`Hcl::sanitized`] first: negative chroma is clamped to `0`, hue is
    /// wrapped into `[0, 360)`, and non-finite channels become `0`. Lightness outside
    /// `0..=100` is stored as requested and only clamped in the realized view.
    #[must_use]
    pub fn from_hcl(requested: Hcl, id: EntityId) -> Self {
        let requested = requested.sanitized();
        let rgb = requested.to_rgb();
        Self {
            id,
            h: requested.h,
            c: requested.c,
            l: requested.l,
            rgb,
            hex: rgb.to_hex(),
            light: requested.l >= LIGHT_THRESHOLD,
            r: Hcl::from(rgb),
        }
    }

    /// Same as [`Colour::from_hcl`] but mints a fresh [`IdPrefix::Colour`] id.
    #[must_use]
    pub fn new(requested: Hcl, ids: &impl IdAllocator) -> Self {
        Self::from_hcl(requested, ids.next_id(IdPrefix::Colour))
    }

    /// Build a colour from a CSS colour string (hex, name, `rgb()`, `hsl()`, ..). The
    /// requested coordinates are those of the parsed colour, so they equal the realized
    /// ones.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PaletteError::InvalidColorString`] if `input` is not a CSS colour.
    pub fn try_from_color_str(input: &str, id: EntityId) -> PaletteResult<Self> {
        let rgb = RgbValue::try_from_color_str(input)?;
        let realized = Hcl::from(rgb);
        Ok(Self {
            id,
            h: realized.h,
            c: realized.c,
            l: realized.l,
            rgb,
            hex: rgb.to_hex(),
            light: realized.l >= LIGHT_THRESHOLD,
            r: realized,
        })
    }

    /// Like [`Colour::try_from_color_str`] but a malformed string produces [`FALLBACK_HCL`]
    /// (black) instead of an error, so one bad edit can't take down the grid.
    #[must_use]
    pub fn from_color_str_or_fallback(input: &str, id: EntityId) -> Self {
        match Self::try_from_color_str(input, id.clone()) {
            Ok(colour) => colour,
            Err(report) => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "Malformed colour string, using fallback colour",
                    input = %input,
                    error = %report,
                );
                Self::from_hcl(FALLBACK_HCL, id)
            }
        }
    }

    /// Build a colour from either kind of [`ColourInput`], keeping `id`. Never fails.
    #[must_use]
    pub fn calculate(input: &ColourInput, id: EntityId) -> Self {
        match input {
            ColourInput::Css(input) => Self::from_color_str_or_fallback(input, id),
            ColourInput::Hcl(hcl) => Self::from_hcl(*hcl, id),
        }
    }

    /// New colour with `patch` applied over the requested coordinates. The id is kept and
    /// `hex`, `light` and `r` are derived again.
    #[must_use]
    pub fn recompute(&self, patch: impl Into<HclPatch>) -> Self {
        Self::from_hcl(patch.into().apply_to(self.requested()), self.id.clone())
    }

    #[must_use]
    pub fn id(&self) -> &EntityId { &self.id }

    #[must_use]
    pub fn h(&self) -> f64 { self.h }

    #[must_use]
    pub fn c(&self) -> f64 { self.c }

    #[must_use]
    pub fn l(&self) -> f64 { self.l }

    #[must_use]
    pub fn get(&self, property: HclProperty) -> f64 {
        match property {
            HclProperty::H => self.h,
            HclProperty::C => self.c,
            HclProperty::L => self.l,
        }
    }

    /// The requested coordinates.
    #[must_use]
    pub fn requested(&self) -> Hcl { Hcl::new(self.h, self.c, self.l) }

    /// The realized coordinates: what [`Colour::hex`] actually displays as.
    #[must_use]
    pub fn realized(&self) -> Hcl { self.r }

    /// Lower case `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> &str { self.hex.as_str() }

    #[must_use]
    pub fn rgb(&self) -> RgbValue { self.rgb }

    /// `true` iff the requested lightness is at least [`LIGHT_THRESHOLD`].
    #[must_use]
    pub fn is_light(&self) -> bool { self.light }

    /// `true` if the requested colour had to be clamped to be displayed.
    #[must_use]
    pub fn is_clamped(&self) -> bool {
        const TOLERANCE: f64 = 0.5;
        (self.r.c - self.c).abs() > TOLERANCE || (self.r.l - self.l).abs() > TOLERANCE
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{hex} (h={h:.1} c={c:.1} l={l:.1})",
            hex = self.hex,
            h = self.h,
            c = self.c,
            l = self.l
        )
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;
    use crate::{LIGHTNESS_CEILING, MonotonicIdAllocator, assert_eq2};
    use test_case::test_case;

    fn id() -> EntityId { EntityId::from("col-test") }

    #[test]
    fn test_from_hcl_derives_everything() {
        let red = Colour::try_from_color_str("#ff0000", id()).unwrap();
        let colour = Colour::from_hcl(red.realized(), id());
        assert_eq2!(colour.hex(), "#ff0000");
        assert_eq2!(colour.id(), &id());
        assert!(colour.is_light());
        assert!(!colour.is_clamped());
    }

    #[test]
    fn test_realized_round_trip_is_idempotent() {
        let ids = MonotonicIdAllocator::new();
        for (h, c, l) in [
            (10.0, 30.0, 40.0),
            (140.0, 200.0, 60.0),
            (275.0, 80.0, 20.0),
            (0.0, 0.0, 150.0),
            (200.0, 10.0, -20.0),
        ] {
            let colour = Colour::new(Hcl::new(h, c, l), &ids);
            let again = Colour::new(colour.realized(), &ids);
            assert_eq2!(again.hex(), colour.hex());
        }
    }

    #[test]
    fn test_gamut_is_enforced_on_realized_only() {
        let colour = Colour::from_hcl(Hcl::new(140.0, 200.0, 150.0), id());
        assert_eq2!(colour.l(), 150.0);
        assert_eq2!(colour.c(), 200.0);
        assert!(colour.realized().l <= LIGHTNESS_CEILING);
        assert!(colour.realized().c < 200.0);
        assert!(colour.is_clamped());
    }

    #[test_case(49.999, false)]
    #[test_case(50.0, true)]
    #[test_case(150.0, true)]
    #[test_case(-3.0, false)]
    fn test_light_threshold(l: f64, expected: bool) {
        assert_eq2!(Colour::from_hcl(Hcl::new(0.0, 0.0, l), id()).is_light(), expected);
    }

    #[test]
    fn test_negative_chroma_is_clamped() {
        let colour = Colour::from_hcl(Hcl::new(120.0, -25.0, 60.0), id());
        assert_eq2!(colour.c(), 0.0);
        assert_eq2!(colour.realized().c, 0.0);
    }

    #[test]
    fn test_hue_is_normalized() {
        let colour = Colour::from_hcl(Hcl::new(-45.0, 20.0, 60.0), id());
        assert_eq2!(colour.h(), 315.0);
    }

    #[test]
    fn test_non_finite_channels_fall_back_to_zero() {
        let colour = Colour::from_hcl(Hcl::new(f64::NAN, f64::INFINITY, f64::NAN), id());
        assert_eq2!(colour.requested(), Hcl::new(0.0, 0.0, 0.0));
        assert_eq2!(colour.hex(), "#000000");
    }

    #[test]
    fn test_color_str_input() {
        let colour = Colour::try_from_color_str("#FF8800", id()).unwrap();
        assert_eq2!(colour.hex(), "#ff8800");
        assert_eq2!(colour.requested(), colour.realized());

        assert!(Colour::try_from_color_str("#ff888", id()).is_err());

        let fallback = Colour::from_color_str_or_fallback("not a colour", id());
        assert_eq2!(fallback.hex(), "#000000");
        assert_eq2!(fallback.id(), &id());
    }

    #[test_case("red", "#ff0000")]
    #[test_case("Navy", "#000080")]
    #[test_case("rgb(255, 0, 0)", "#ff0000")]
    #[test_case("hsl(0, 100%, 50%)", "#ff0000")]
    #[test_case("hsl(120, 100%, 50%)", "#00ff00")]
    #[test_case("#f80", "#ff8800")]
    #[test_case(" #ff8800 ", "#ff8800")]
    #[test_case("not a colour", "#000000")]
    #[test_case("rgb(300", "#000000")]
    fn test_calculate_css_strings(input: &str, expected_hex: &str) {
        let colour = Colour::calculate(&ColourInput::from(input), id());
        assert_eq2!(colour.hex(), expected_hex);
        assert_eq2!(colour.id(), &id());
    }

    #[test]
    fn test_recompute_keeps_id() {
        let colour = Colour::from_hcl(Hcl::new(200.0, 30.0, 40.0), id());
        let edited = colour.recompute((HclProperty::L, 70.0));
        assert_eq2!(edited.id(), colour.id());
        assert_eq2!(edited.requested(), Hcl::new(200.0, 30.0, 70.0));
        assert!(edited.is_light());
        assert!(!colour.is_light());
    }

    #[test]
    fn test_calculate_both_inputs() {
        let from_hex = Colour::calculate(&ColourInput::from("#123456"), id());
        let from_hcl = Colour::calculate(&ColourInput::from(from_hex.realized()), id());
        assert_eq2!(from_hex.hex(), from_hcl.hex());
    }

    #[test]
    fn test_property_round_trip_through_strings() {
        assert_eq2!(HclProperty::from_str("c").unwrap(), HclProperty::C);
        assert_eq2!(HclProperty::L.as_ref(), "l");
        assert!(HclProperty::from_str("x").is_err());
    }
}
