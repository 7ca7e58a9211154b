// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Build a palette from the command line and print the resulting grid.
//!
//! ```text
//! palette --hues 4 --shades 5 --set 0,2,c,80 --hex 1,1,#ff8800 --hex "2,0,hsl(30, 80%, 40%)"
//! ```
//!
//! `--set` and `--hex` edits are applied in the order they appear on the command line.

use std::str::FromStr as _;

use clap::{ArgMatches, Args, CommandFactory, FromArgMatches, Parser};
use r3bl_palette::{GridCoord, HclProperty, LIGHTNESS_CEILING, PaletteAction, PaletteConfig,
                   PaletteState, PaletteStore, RgbValue, FULL_TURN, ok,
                   log::{DEFAULT_LOG_FILE_NAME, TracingConfig, WriterConfig,
                         try_initialize_logging_global}};

#[derive(Debug, Parser)]
#[command(
    bin_name = "palette",
    about = "Build a colour palette on a hue x shade grid and print it 🎨",
    version
)]
pub struct CLIArg {
    #[arg(
        long,
        default_value_t = 3,
        help = "Number of hue layers, spread evenly around the hue wheel"
    )]
    pub hues: usize,

    #[arg(
        long,
        default_value_t = 3,
        help = "Number of shade layers, spread evenly between black and white"
    )]
    pub shades: usize,

    #[arg(
        long = "set",
        value_name = "HUE,SHADE,PROP,VALUE",
        value_parser = parse_set_value,
        help = "Set one of h, c, l of a cell, eg: `0,1,l,80`. Can be repeated"
    )]
    pub set_values: Vec<PaletteAction>,

    #[arg(
        long = "hex",
        value_name = "HUE,SHADE,COLOR",
        value_parser = parse_set_hex,
        help = "Replace the colour of a cell with a hex or CSS colour, eg: `1,2,#ff8800` or \
                `1,2,rgb(255, 136, 0)`. Can be repeated"
    )]
    pub set_hexes: Vec<PaletteAction>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log debug output to a file for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "PATH",
        help = "Log file to use with --enable-logging [default: palette_log.txt]"
    )]
    pub log_file: Option<String>,
}

fn main() -> miette::Result<()> {
    let matches = CLIArg::command().get_matches();
    let cli_arg = CLIArg::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        let log_file = cli_arg
            .global_options
            .log_file
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());
        try_initialize_logging_global(TracingConfig {
            level_filter: tracing_core::LevelFilter::DEBUG,
            writer_config: WriterConfig::File(log_file),
        })?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let config = PaletteConfig::default()
        .with_seed_hue_angles(evenly_spaced_hues(cli_arg.hues))
        .with_seed_shade_lightness(evenly_spaced_lightness(cli_arg.shades));
    let mut store = PaletteStore::try_new(config)?;

    for action in edits_in_command_line_order(cli_arg.set_values, cli_arg.set_hexes, &matches)
    {
        store.dispatch_action(action);
    }

    print!("{}", render_grid(store.get_state()));

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    ok!()
}

/// `count` angles starting at 0, evenly spaced around the wheel.
#[allow(clippy::cast_precision_loss)]
fn evenly_spaced_hues(count: usize) -> Vec<f64> {
    (0..count)
        .map(|index| index as f64 * FULL_TURN / count as f64)
        .collect()
}

/// `count` lightness values strictly between 0 and 100, eg: `[25, 50, 75]` for 3.
#[allow(clippy::cast_precision_loss)]
fn evenly_spaced_lightness(count: usize) -> Vec<f64> {
    (1..=count)
        .map(|index| index as f64 * LIGHTNESS_CEILING / (count + 1) as f64)
        .collect()
}

/// Interleave the `--set` and `--hex` edits by their position on the command line. clap
/// collects each repeated flag into its own `Vec`, so the positions come from `matches`.
fn edits_in_command_line_order(
    set_values: Vec<PaletteAction>,
    set_hexes: Vec<PaletteAction>,
    matches: &ArgMatches,
) -> Vec<PaletteAction> {
    let indices_of = |id: &str| matches.indices_of(id).into_iter().flatten();
    let mut edits = indices_of("set_values")
        .zip(set_values)
        .chain(indices_of("set_hexes").zip(set_hexes))
        .collect::<Vec<_>>();
    edits.sort_by_key(|(index, _)| *index);
    edits.into_iter().map(|(_, action)| action).collect()
}

fn parse_coord(hue: &str, shade: &str) -> Result<GridCoord, String> {
    let hue = hue
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("bad hue index {hue:?}: {err}"))?;
    let shade = shade
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("bad shade index {shade:?}: {err}"))?;
    Ok(GridCoord::new(hue, shade))
}

fn parse_set_value(arg: &str) -> Result<PaletteAction, String> {
    let parts = arg.split(',').collect::<Vec<_>>();
    let [hue, shade, property, value] = parts[..] else {
        return Err(format!("expected HUE,SHADE,PROP,VALUE, got {arg:?}"));
    };
    let coord = parse_coord(hue, shade)?;
    let property = HclProperty::from_str(property.trim())
        .map_err(|_| format!("property must be one of h, c, l, got {property:?}"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("bad value {value:?}: {err}"))?;
    Ok(PaletteAction::set_value(coord, property, value))
}

/// The colour part may itself contain commas, eg: `0,1,rgb(255, 136, 0)`.
fn parse_set_hex(arg: &str) -> Result<PaletteAction, String> {
    let parts = arg.splitn(3, ',').collect::<Vec<_>>();
    let [hue, shade, color] = parts[..] else {
        return Err(format!("expected HUE,SHADE,COLOR, got {arg:?}"));
    };
    let coord = parse_coord(hue, shade)?;
    RgbValue::try_from_color_str(color).map_err(|report| report.to_string())?;
    Ok(PaletteAction::set_colour(coord, color.trim()))
}

/// One line per hue layer. Each cell shows its hex followed by the realized HCL, the
/// coordinates the hex actually displays. Cells whose requested colour had to be
/// clamped to be displayed are marked with `*`.
fn render_grid(state: &PaletteState) -> String {
    use std::fmt::Write as _;

    const CELL_WIDTH: usize = 26;

    let mut acc = String::new();
    _ = write!(acc, "{:<12}", "");
    for shade in &state.shades {
        _ = write!(acc, " {:<CELL_WIDTH$}", shade.name.as_str());
    }
    _ = writeln!(acc);

    for (hue, row) in state.hues.iter().zip(state.colours.iter()) {
        _ = write!(acc, "{:<12}", hue.name.as_str());
        for colour in row.iter() {
            let mark = if colour.is_clamped() { "*" } else { " " };
            let realized = colour.realized();
            _ = write!(
                acc,
                " {}{mark} {:>5.1} {:>5.1} {:>5.1}",
                colour.hex(),
                realized.h,
                realized.c,
                realized.l
            );
        }
        _ = writeln!(acc);
    }
    acc
}

#[cfg(test)]
mod tests {
    use r3bl_palette::{ColourInput, MonotonicIdAllocator, assert_eq2};

    use super::*;

    #[test]
    fn test_evenly_spaced() {
        assert_eq2!(evenly_spaced_hues(4), vec![0.0, 90.0, 180.0, 270.0]);
        assert_eq2!(evenly_spaced_lightness(3), vec![25.0, 50.0, 75.0]);
        assert!(evenly_spaced_hues(0).is_empty());
    }

    #[test]
    fn test_parse_set_value() {
        assert_eq2!(
            parse_set_value("1, 2, l, 80.5").unwrap(),
            PaletteAction::set_value((1, 2), HclProperty::L, 80.5)
        );
        assert!(parse_set_value("1,2,x,80").is_err());
        assert!(parse_set_value("1,2,l").is_err());
        assert!(parse_set_value("-1,2,l,3").is_err());
    }

    #[test]
    fn test_parse_set_hex() {
        assert_eq2!(
            parse_set_hex("0,1,#FF8800").unwrap(),
            PaletteAction::SetColour {
                coord: GridCoord::new(0, 1),
                colour: ColourInput::Css("#FF8800".into()),
            }
        );
        assert_eq2!(
            parse_set_hex("0,1, rgb(255, 136, 0)").unwrap(),
            PaletteAction::set_colour((0, 1), "rgb(255, 136, 0)")
        );
        assert_eq2!(
            parse_set_hex("2,0,red").unwrap(),
            PaletteAction::set_colour((2, 0), "red")
        );
        assert!(parse_set_hex("0,1,#ff888").is_err());
        assert!(parse_set_hex("0,1,not a colour").is_err());
        assert!(parse_set_hex("0,1").is_err());
    }

    fn edits_from(args: &[&str]) -> Vec<PaletteAction> {
        let matches = CLIArg::command()
            .try_get_matches_from(args.iter().copied())
            .unwrap();
        let cli_arg = CLIArg::from_arg_matches(&matches).unwrap();
        edits_in_command_line_order(cli_arg.set_values, cli_arg.set_hexes, &matches)
    }

    #[test]
    fn test_edits_keep_command_line_order() {
        let edits = edits_from(&[
            "palette", "--hex", "0,0,#fff", "--set", "0,0,l,10", "--hex", "1,1,red",
            "--set", "1,1,c,5",
        ]);
        assert_eq2!(
            edits,
            vec![
                PaletteAction::set_colour((0, 0), "#fff"),
                PaletteAction::set_value((0, 0), HclProperty::L, 10.0),
                PaletteAction::set_colour((1, 1), "red"),
                PaletteAction::set_value((1, 1), HclProperty::C, 5.0),
            ]
        );
    }

    #[test]
    fn test_set_after_hex_wins() {
        let mut store = PaletteStore::default();
        for action in edits_from(&["palette", "--hex", "0,0,#fff", "--set", "0,0,l,10"]) {
            store.dispatch_action(action);
        }
        let colour = store.get_state().colour_at(GridCoord::new(0, 0)).unwrap();
        assert_eq2!(colour.l(), 10.0);
        assert!(!colour.is_light());
    }

    #[test]
    fn test_cli_parse() {
        let cli_arg = CLIArg::parse_from([
            "palette", "--hues", "2", "--set", "0,0,c,10", "--set", "1,0,h,5", "--hex",
            "0,0,#000",
        ]);
        assert_eq2!(cli_arg.hues, 2);
        assert_eq2!(cli_arg.shades, 3);
        assert_eq2!(cli_arg.set_values.len(), 2);
        assert_eq2!(cli_arg.set_hexes.len(), 1);
        assert!(!cli_arg.global_options.enable_logging);
    }

    #[test]
    fn test_render_grid() {
        let state =
            PaletteState::new(&PaletteConfig::default(), &MonotonicIdAllocator::new());
        let output = render_grid(&state);
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq2!(lines.len(), 4);
        assert!(lines[0].contains("Shade 1"));
        assert!(lines[1].starts_with("Hue 1"));
        assert_eq2!(lines[1].matches('#').count(), 3);

        let colour = state.colour_at(GridCoord::new(0, 0)).unwrap();
        let realized = colour.realized();
        let mark = if colour.is_clamped() { "*" } else { " " };
        let cell = format!(
            "{}{mark} {:>5.1} {:>5.1} {:>5.1}",
            colour.hex(),
            realized.h,
            realized.c,
            realized.l
        );
        assert!(lines[1].contains(&cell), "{cell:?} not in {:?}", lines[1]);
    }
}
