//! Template placeholder filling.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use filegen_paths::{SourceFile, directory_path, relative, to_forward_slashes};

use crate::resolver::LocationResolver;

/// Fill `${moduleName}` and `${modulePath}` in `lines` and join them with
/// newlines.
///
/// No lines render to an empty string.
#[must_use]
pub fn render_template(lines: &[String], module_name: &str, module_path: &str) -> String {
    if lines.is_empty() {
        return String::new();
    }

    lines
        .join("\n")
        .replace("${moduleName}", module_name)
        .replace("${modulePath}", module_path)
}

/// The import path from the target's directory to the source module.
///
/// Both paths are relative to the same base directory. The result uses `/`
/// and starts with `./` when both files share a directory.
#[must_use]
pub fn import_path(source_relative_path: &str, target_relative_path: &str, module_name: &str) -> String {
    let source_dir = directory_path(source_relative_path);
    let target_dir = directory_path(target_relative_path);
    let relative_dir = to_forward_slashes(&relative(&target_dir, &source_dir));

    if relative_dir.is_empty() {
        format!("./{module_name}")
    } else {
        format!("{relative_dir}/{module_name}")
    }
}

impl LocationResolver<'_> {
    /// Render template lines for the companion at `target_path` of `source`.
    #[must_use]
    pub fn render_template(&self, source: &SourceFile, target_path: &str, lines: &[String]) -> String {
        if lines.is_empty() {
            return String::new();
        }

        let base = self.base_directory(source);
        let module_name = source.name_without_extension();
        let module_path = import_path(
            &self.relative_file_path(source),
            &relative(&base, target_path),
            module_name,
        );

        log::debug!("Rendering template with module {module_name} at {module_path}");

        render_template(lines, module_name, &module_path)
    }
}
