//! Companion file name composition.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use filegen_config::FileSuffixType;

/// Compose a companion file name from a source name and a suffix rule.
///
/// | suffix    | mode                | input       | output           |
/// |-----------|---------------------|-------------|------------------|
/// | `.test`   | append to file name | `Button.ts` | `Button.test.ts` |
/// | `test`    | extend extension    | `Button.ts` | `Button.test.ts` |
/// | `spec.js` | replace extension   | `Button.ts` | `Button.spec.js` |
/// | (none)    |                     | `Button.ts` | `Button.ts`      |
#[must_use]
pub fn compose_file_name(
    name_without_extension: &str,
    extension: &str,
    suffix: &str,
    suffix_type: Option<FileSuffixType>,
) -> String {
    let mut base = name_without_extension.to_string();
    let mut tail: Vec<&str> = Vec::with_capacity(2);

    match (suffix.is_empty(), suffix_type) {
        (false, Some(FileSuffixType::AppendToFileName)) => {
            base.push_str(suffix);
            tail.push(extension);
        }
        (false, Some(FileSuffixType::ExtendExtension)) => {
            tail.push(suffix);
            tail.push(extension);
        }
        (false, Some(FileSuffixType::ReplaceExtension)) => tail.push(suffix),
        _ => tail.push(extension),
    }

    format!("{base}.{}", tail.join("."))
}
