// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;
use tracing_core::LevelFilter;

use crate::{log::TracingConfig, ok};

/// Install a process wide subscriber. Meant for binaries. Logging is **disabled** unless
/// this (or [`try_initialize_logging_thread_local`]) is called with a level other than
/// [`LevelFilter::OFF`]; for `OFF` this is a no-op.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is already
/// installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    if it.get_level_filter() == LevelFilter::OFF {
        return ok!();
    }

    it.install_global()
}

/// Install a subscriber for the current thread only. Meant for tests. Returns [`None`]
/// for [`LevelFilter::OFF`], otherwise a guard that uninstalls the subscriber when it is
/// dropped.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    if it.get_level_filter() == LevelFilter::OFF {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
