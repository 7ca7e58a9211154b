// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq!`] so that test failures print a readable
/// diff of large palette snapshots.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Unwrap the `$value` into `Ok($value)`. If no `$value` is passed, `Ok(())` is returned.
///
/// ```
/// use r3bl_palette::{ok, PaletteResult};
///
/// fn nothing() -> PaletteResult<()> { ok!() }
/// fn something() -> PaletteResult<u8> { ok!(42) }
///
/// assert!(nothing().is_ok());
/// assert_eq!(something().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
