//! Creation planning - resolve the companion file and its content without
//! touching the disk.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use filegen_config::Template;
use filegen_location::{LocationResolver, TargetLocation};
use filegen_paths::{SourceFile, relative};

use crate::ui::{Ui, items_from_labels};

/// A planned companion file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationPlan {
    /// Where the file goes.
    pub target: TargetLocation,
    /// Target path relative to the base directory, for messages.
    pub display_path: String,
    /// Rendered file content.
    pub content: String,
    /// Whether creation will be skipped.
    pub will_skip: bool,
    /// Reason for skipping (if applicable).
    pub skip_reason: Option<String>,
}

/// Plan the companion file for `source`.
///
/// The template lines are rendered for the target, then every `${...}`
/// token in the result is resolved against the source file with the base
/// directory as root.
#[must_use]
pub fn plan_creation(
    resolver: &LocationResolver<'_>,
    source: &SourceFile,
    template_lines: &[String],
) -> CreationPlan {
    let target = resolver.resolve(source);

    let rendered = resolver.render_template(source, &target.absolute_path, template_lines);
    let content = if rendered.is_empty() {
        rendered
    } else {
        resolver
            .variables()
            .resolve(source.absolute_path(), &rendered, &target.base_directory)
    };

    let display_path = relative(&target.base_directory, &target.absolute_path);

    let (will_skip, skip_reason) = if Path::new(&target.absolute_path).exists() {
        (true, Some("exists".to_string()))
    } else {
        (false, None)
    };

    log::debug!(
        "Planned {} (skip: {will_skip})",
        target.absolute_path
    );

    CreationPlan {
        target,
        display_path,
        content,
        will_skip,
        skip_reason,
    }
}

/// The template lines to render.
///
/// A named template set asks the user to choose one; cancelling yields no
/// lines.
pub fn choose_template(ui: &mut dyn Ui, template: Option<&Template>) -> Vec<String> {
    match template {
        None => Vec::new(),
        Some(Template::Lines(lines)) => lines.clone(),
        Some(Template::Named(named)) => {
            let names: Vec<&String> = named.keys().collect();
            let items = items_from_labels(names.iter().map(|n| n.as_str()));

            ui.pick("Select a template", &items)
                .and_then(|index| names.get(index))
                .and_then(|name| named.get(*name))
                .cloned()
                .unwrap_or_default()
        }
    }
}
