//! User-visible message text.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Shown after a companion file is written.
pub const FILE_CREATED: &str = "File has been created successfully.";

/// Label of the synthetic "none" prompt option.
pub const NONE_LABEL: &str = "none";

/// Description of the synthetic "none" prompt option.
pub const NONE_DESCRIPTION: &str = "- no option will be passed to the arguments";

/// Shown when an argument's path does not exist.
#[must_use]
pub fn unable_to_locate(arg: &str) -> String {
    format!("Unable to locate {arg}")
}
