// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "palette_log.txt";

/// Where to send log output, and at what level.
///
/// Many types convert into a [`TracingConfig`], and two configs can be merged with `+`,
/// so the init functions take a single `impl Into<TracingConfig>`:
///
/// ```
/// use r3bl_palette::log::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let level: TracingConfig = tracing::Level::WARN.into();
/// let display: TracingConfig = DisplayPreference::Stderr.into();
/// let both = level + display;
///
/// assert_eq!(both.level_filter, tracing_core::LevelFilter::DEBUG);
/// assert_eq!(
///     both.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "palette_log.txt".into())
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    /// Logging turned off.
    #[must_use]
    pub fn off() -> Self {
        Self {
            level_filter: LevelFilter::OFF,
            writer_config: WriterConfig::None,
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self {
        Self {
            level_filter: level.into(),
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(preferred_display),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// The more verbose of the two levels wins, and the writers are merged with
/// [`WriterConfig`]'s `+`.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// A display and a file merge into [`WriterConfig::DisplayAndFile`]. On a collision the
/// `rhs` value wins, since it is the more specific one.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            // No collision.
            (None, rhs) => rhs,
            (lhs, None) => lhs,
            (Display(display), File(file)) | (File(file), Display(display)) => {
                DisplayAndFile(display, file)
            }

            // Collision on the display.
            (Display(_), Display(display)) => Display(display),
            (DisplayAndFile(_, file), Display(display)) => DisplayAndFile(display, file),

            // Collision on the file.
            (File(_), File(file)) => File(file),
            (DisplayAndFile(display, _), File(file)) => DisplayAndFile(display, file),

            // Collision on both.
            (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(display, file)) => {
                DisplayAndFile(display, file)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_add_writer_configs() {
        let file = WriterConfig::File("a.log".into());
        let other_file = WriterConfig::File("b.log".into());
        let stdout = WriterConfig::Display(DisplayPreference::Stdout);
        let stderr = WriterConfig::Display(DisplayPreference::Stderr);
        let stdout_and_file =
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "a.log".into());

        assert_eq2!(WriterConfig::None + WriterConfig::None, WriterConfig::None);
        assert_eq2!(WriterConfig::None + file.clone(), file);
        assert_eq2!(stdout.clone() + WriterConfig::None, stdout);
        assert_eq2!(stdout.clone() + file.clone(), stdout_and_file);
        assert_eq2!(file.clone() + stdout.clone(), stdout_and_file);
        assert_eq2!(stdout.clone() + stderr.clone(), stderr);
        assert_eq2!(file.clone() + other_file.clone(), other_file);
        assert_eq2!(
            stdout_and_file.clone() + stderr.clone(),
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "a.log".into())
        );
        assert_eq2!(
            stdout_and_file.clone() + other_file,
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "b.log".into())
        );
        assert_eq2!(stderr + stdout_and_file.clone(), stdout_and_file);
    }

    #[test]
    fn test_add_tracing_configs() {
        let it = TracingConfig::from(tracing::Level::ERROR)
            + TracingConfig::from(LevelFilter::TRACE);
        assert_eq2!(it.get_level_filter(), LevelFilter::TRACE);
        assert_eq2!(
            it.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.into())
        );

        let it = TracingConfig::off() + TracingConfig::from(DisplayPreference::Stdout);
        assert_eq2!(it.get_level_filter(), LevelFilter::DEBUG);
        assert_eq2!(
            it.get_writer_config(),
            WriterConfig::Display(DisplayPreference::Stdout)
        );
    }
}
