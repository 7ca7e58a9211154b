// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation. This is the display safe form of a
//! palette colour: whatever the requested HCL coordinates are, the colour that is
//! actually shown is one of these.

use std::fmt::{Display, Formatter};

use palette::Srgb;

use crate::{InlineString, PaletteError, PaletteResult, parse_hex_color};

#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<Srgb<u8>> for RgbValue {
    fn from(srgb: Srgb<u8>) -> Self {
        let (red, green, blue) = srgb.into_components();
        Self::from_u8(red, green, blue)
    }
}

impl From<RgbValue> for Srgb<u8> {
    fn from(rgb: RgbValue) -> Self { Srgb::new(rgb.red, rgb.green, rgb.blue) }
}

impl RgbValue {
    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Parse any CSS colour string, ignoring surrounding whitespace:
    /// - `#rgb` and `#rrggbb` go through [`parse_hex_color`].
    /// - everything else (names like `red`, `rgb(..)`, `hsl(..)`, `hwb(..)`, `#rgba`,
    ///   ..) goes through [`csscolorparser`]. Alpha is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidColorString`] if the input is not a CSS colour.
    pub fn try_from_color_str(input: &str) -> PaletteResult<RgbValue> {
        let trimmed = input.trim();
        if let Ok(("", color)) = parse_hex_color(trimmed) {
            return Ok(color);
        }
        match csscolorparser::parse(trimmed) {
            Ok(color) => {
                let [red, green, blue, _alpha] = color.to_rgba8();
                Ok(Self::from_u8(red, green, blue))
            }
            Err(_) => PaletteError::InvalidColorString {
                input: input.to_string(),
            }
            .into_result(),
        }
    }

    /// Lower case `#rrggbb`.
    #[must_use]
    pub fn to_hex(&self) -> InlineString {
        use std::fmt::Write as _;
        let mut acc = InlineString::new();
        _ = write!(acc, "{self}");
        acc
    }

    #[must_use]
    pub fn is_gray(&self) -> bool { self.red == self.green && self.green == self.blue }

    #[must_use]
    pub fn channels(&self) -> [u8; 3] { [self.red, self.green, self.blue] }
}

impl Display for RgbValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test]
    fn test_new() {
        let value = RgbValue::from_u8(1, 2, 3);
        assert_eq2!((value.red, value.green, value.blue), (1, 2, 3));
    }

    #[test_case("#ff0000", [255, 0, 0])]
    #[test_case("  #0F0 ", [0, 255, 0])]
    #[test_case("red", [255, 0, 0])]
    #[test_case("RebeccaPurple", [102, 51, 153])]
    #[test_case("rgb(255, 136, 0)", [255, 136, 0])]
    #[test_case("rgba(0, 0, 255, 0.5)", [0, 0, 255])]
    #[test_case("hsl(0, 100%, 50%)", [255, 0, 0])]
    #[test_case("hsl(240, 100%, 50%)", [0, 0, 255])]
    #[test_case("#ff000080", [255, 0, 0])]
    fn test_try_from_color_str_valid(input: &str, expected: [u8; 3]) {
        let value = RgbValue::try_from_color_str(input).unwrap();
        assert_eq2!(value.channels(), expected);
    }

    #[test_case("#ff000")]
    #[test_case("#ff00000")]
    #[test_case("not a colour")]
    #[test_case("rgb(255, 0)")]
    #[test_case("")]
    fn test_try_from_color_str_invalid(input: &str) {
        assert!(RgbValue::try_from_color_str(input).is_err());
    }

    #[test_case(RgbValue::from_u8(0, 0, 0), "#000000")]
    #[test_case(RgbValue::from_u8(255, 136, 0), "#ff8800")]
    #[test_case(RgbValue::from_u8(10, 11, 12), "#0a0b0c")]
    fn test_to_hex(rgb: RgbValue, expected: &str) {
        assert_eq2!(rgb.to_hex().as_str(), expected);
    }

    #[test]
    fn test_srgb_conversions() {
        let rgb = RgbValue::from_u8(1, 2, 3);
        let srgb = Srgb::<u8>::from(rgb);
        assert_eq2!(srgb.into_components(), (1, 2, 3));
        assert_eq2!(RgbValue::from(srgb), rgb);
    }
}
