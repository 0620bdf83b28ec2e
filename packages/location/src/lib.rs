//! Companion file location for filegen.
//!
//! Given a source file and a [`Configuration`](filegen_config::Configuration),
//! this crate computes:
//!
//! * the base directory relative paths are measured from
//! * the directory and name of the companion file
//! * the source a companion file was derived from
//! * the rendered content template
//!
//! All of it is computed without touching the disk beyond the upward root
//! marker search. Creating directories and files is left to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use filegen_location::LocationResolver;
//!
//! let resolver = LocationResolver::new(&config, &variables);
//! let target = resolver.resolve(&source);
//! println!("{}", target.absolute_path);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod base;
mod file_name;
mod resolver;
mod target;
mod template;

pub use file_name::compose_file_name;
pub use resolver::{LocationResolver, TargetLocation};
pub use template::{import_path, render_template};
