// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt in [`tracing`] setup for binaries and tests. The engine itself only emits events
//! (`debug` for accepted transitions, `warn` for rejected ones and bad colour strings);
//! nothing is printed unless a subscriber is installed with
//! [`try_initialize_logging_global`] or [`try_initialize_logging_thread_local`].

// Attach sources.
pub mod public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use public_api::*;
pub use tracing_config::*;
pub use tracing_init::*;
