#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared CLI utilities for the resource directory tools.
//!
//! Provides [`init_logger`], which configures `pretty_env_logger` from
//! `RUST_LOG`, and small `dialoguer` wrappers where Escape means "back".

use std::fmt::Display;

use dialoguer::{Confirm, Select};

/// Initializes the global `pretty_env_logger` logger from `RUST_LOG`,
/// defaulting to `info` when the variable is unset.
///
/// Safe to call more than once (e.g. from tests); later calls are ignored.
pub fn init_logger() {
    let mut builder = pretty_env_logger::formatted_builder();
    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_env("RUST_LOG");
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }

    builder.try_init().ok(); // Ignore error if logger was already set (e.g., in tests)
}

/// Prompts the user to pick one of `items`.
///
/// Returns `None` if the user pressed Escape or `q`.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read.
pub fn select<T: Display>(
    prompt: &str,
    items: &[T],
    default: usize,
) -> Result<Option<usize>, dialoguer::Error> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default.min(items.len().saturating_sub(1)))
        .interact_opt()
}

/// Asks a yes/no question. Escape counts as "no".
///
/// # Errors
///
/// Returns an error if the terminal cannot be read.
pub fn confirm(prompt: &str, default: bool) -> Result<bool, dialoguer::Error> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact_opt()?
        .unwrap_or(false))
}
