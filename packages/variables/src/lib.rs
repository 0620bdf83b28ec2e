//! Macro substitution for filegen.
//!
//! Command lines and file templates carry `${...}` tokens. This crate
//! rewrites deprecated token names, substitutes the root-directory tokens,
//! and resolves the canonical file and workspace tokens.
//!
//! ```rust,ignore
//! use filegen_paths::Workspace;
//! use filegen_variables::VariableResolver;
//!
//! let workspace = Workspace::new(["/workspace"]);
//! let resolver = VariableResolver::new(&workspace);
//! let command = resolver.resolve(
//!     "/workspace/tests/Button.test.ts",
//!     "jest ${relativeFile}",
//!     "/workspace",
//! );
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod canonical;
mod legacy;
mod resolver;

pub use canonical::CANONICAL_VARIABLES;
pub use legacy::{LEGACY_ALIASES, normalize_legacy_aliases};
pub use resolver::VariableResolver;
