// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The hex color string can be in the following formats:
//! - `#RRGGBB`, eg: `#FF0000` for red.
//! - `#RGB`, eg: `#F00` for red (each digit is doubled).

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, take_while_m_n},
          combinator::map_res};

use crate::RgbValue;

/// Parse function that generates an [`RgbValue`] struct from a hex color string. Any
/// input following the color is returned as the remainder.
///
/// # Errors
///
/// Returns a nom error if the input does not start with `#` followed by 3 or 6 hex
/// digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, _) = tag("#").parse(input)?;
    // The long form must be tried first, otherwise `#ff0000` parses as `#ff0`.
    alt((parse_long_form, parse_short_form)).parse(input)
}

fn parse_long_form(input: &str) -> IResult<&str, RgbValue> {
    let (input, (red, green, blue)) =
        (helper_fns::parse_hex_seg, helper_fns::parse_hex_seg, helper_fns::parse_hex_seg)
            .parse(input)?;
    Ok((input, RgbValue::from_u8(red, green, blue)))
}

fn parse_short_form(input: &str) -> IResult<&str, RgbValue> {
    let (input, (red, green, blue)) = (
        helper_fns::parse_hex_digit,
        helper_fns::parse_hex_digit,
        helper_fns::parse_hex_digit,
    )
        .parse(input)?;
    Ok((input, RgbValue::from_u8(red, green, blue)))
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true`
    /// items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }

    /// `f` is shorthand for `ff`, so the nibble is repeated.
    pub fn parse_hex_digit(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(1, 1, match_is_hex_digit), |it: &str| {
            parse_str_to_hex_num(it).map(|nibble| nibble * 17)
        })
        .parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn parse_valid_color() {
        let mut input = String::new();
        input.push_str("#2F14DF");
        input.push('🔅');

        let result = dbg!(parse_hex_color(&input));

        let Ok((remainder, color)) = result else {
            panic!();
        };
        assert_eq2!(remainder, "🔅");
        assert_eq2!(color, RgbValue::from_u8(47, 20, 223));
    }

    #[test]
    fn parse_valid_short_color() {
        let (remainder, color) = parse_hex_color("#f80").unwrap();
        assert_eq2!(remainder, "");
        assert_eq2!(color, RgbValue::from_u8(255, 136, 0));
    }

    #[test]
    fn parse_five_digits_leaves_a_remainder() {
        // The short form matches the first 3 digits; callers that need the whole
        // input to be a color must check the remainder.
        let (remainder, _) = parse_hex_color("#ff000").unwrap();
        assert_eq2!(remainder, "00");
    }

    #[test]
    fn parse_invalid_color() {
        assert!(parse_hex_color("🔅#2F14DF").is_err());
        assert!(parse_hex_color("2F14DF").is_err());
        assert!(parse_hex_color("#zz").is_err());
    }
}
