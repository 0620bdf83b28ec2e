//! Deprecated token names and their canonical replacements.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Deprecated tokens, in the order they are rewritten.
pub const LEGACY_ALIASES: [(&str, &str); 7] = [
    ("${outputFilePath}", "${file}"),
    ("${relativeFilePath}", "${relativeFile}"),
    ("${relativeFileDir}", "${relativeFileDirname}"),
    ("${fileDirPath}", "${fileDirname}"),
    ("${fileExtension}", "${fileExtname}"),
    ("${fileNameWithExt}", "${fileBasename}"),
    ("${fileNameWithoutExt}", "${fileBasenameNoExtension}"),
];

/// Rewrite every deprecated token to its canonical name.
///
/// Replacement is literal; no pattern characters are interpreted.
#[must_use]
pub fn normalize_legacy_aliases(text: &str) -> String {
    LEGACY_ALIASES
        .iter()
        .fold(text.to_string(), |acc, (legacy, canonical)| {
            if acc.contains(legacy) {
                log::debug!("Rewriting legacy token {legacy} to {canonical}");
                acc.replace(legacy, canonical)
            } else {
                acc
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_is_rewritten() {
        for (legacy, canonical) in LEGACY_ALIASES {
            assert_eq!(normalize_legacy_aliases(legacy), canonical);
        }
    }

    #[test]
    fn test_all_occurrences_are_rewritten() {
        assert_eq!(
            normalize_legacy_aliases("cp ${outputFilePath} ${outputFilePath}.bak"),
            "cp ${file} ${file}.bak"
        );
    }

    #[test]
    fn test_relative_file_dir_is_not_confused_with_relative_file_path() {
        assert_eq!(
            normalize_legacy_aliases("${relativeFilePath} ${relativeFileDir}"),
            "${relativeFile} ${relativeFileDirname}"
        );
    }

    #[test]
    fn test_other_text_is_untouched() {
        assert_eq!(
            normalize_legacy_aliases("jest ${file} --ci"),
            "jest ${file} --ci"
        );
    }
}
