//! The path model for source and target files.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt;
use std::path::Path;

use crate::error::PathError;
use crate::path_utils::{basename, directory_path};

/// A file path plus the facts derived from it.
///
/// The same model describes both the originating source file and the
/// companion file to be created. It is immutable once constructed; derived
/// values are computed on access.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFile {
    absolute_path: String,
}

impl SourceFile {
    /// Create a path model from a file path.
    ///
    /// # Errors
    ///
    /// * If the path is empty
    pub fn new(path: impl Into<String>) -> Result<Self, PathError> {
        let absolute_path = path.into();
        if absolute_path.is_empty() {
            return Err(PathError::EmptyPath);
        }

        Ok(Self { absolute_path })
    }

    /// Create a path model from a [`Path`].
    ///
    /// # Errors
    ///
    /// * If the path is empty
    /// * If the path is not valid UTF-8
    pub fn from_path(path: &Path) -> Result<Self, PathError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| PathError::NonUtf8Path(path.to_path_buf()))?;
        Self::new(path_str)
    }

    /// The full path this model was built from.
    #[must_use]
    pub fn absolute_path(&self) -> &str {
        &self.absolute_path
    }

    /// The path as a [`Path`].
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.absolute_path)
    }

    /// The file name including its extension.
    #[must_use]
    pub fn name(&self) -> &str {
        basename(&self.absolute_path)
    }

    /// The text after the last `.` of the file name.
    ///
    /// A file name without any `.` yields the whole name, so `Makefile` has
    /// the extension `Makefile`. Dots in directory names are never part of
    /// the extension. Configurations match `supportedExtension` against this
    /// exact value.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.name().rsplit('.').next().unwrap_or("")
    }

    /// The file name without its final extension.
    ///
    /// A leading dot does not start an extension, so `.eslintrc` keeps its
    /// whole name.
    #[must_use]
    pub fn name_without_extension(&self) -> &str {
        let name = self.name();
        match name.rfind('.') {
            Some(index) if index > 0 => &name[..index],
            _ => name,
        }
    }

    /// The parent directory of the file.
    #[must_use]
    pub fn directory_path(&self) -> String {
        directory_path(&self.absolute_path)
    }

    /// Whether the file currently exists on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.as_path().exists()
    }
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.absolute_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_is_rejected() {
        assert!(matches!(SourceFile::new(""), Err(PathError::EmptyPath)));
    }

    #[test]
    fn test_derived_facts() {
        let file = SourceFile::new("/workspace/src/components/Button.ts").unwrap();

        assert_eq!(file.name(), "Button.ts");
        assert_eq!(file.extension(), "ts");
        assert_eq!(file.name_without_extension(), "Button");
        assert_eq!(file.directory_path(), "/workspace/src/components");
    }

    #[test]
    fn test_multi_dot_name() {
        let file = SourceFile::new("/workspace/src/Button.test.ts").unwrap();

        assert_eq!(file.extension(), "ts");
        assert_eq!(file.name_without_extension(), "Button.test");
    }

    #[test]
    fn test_extensionless_name_is_its_own_extension() {
        let file = SourceFile::new("/workspace/Makefile").unwrap();

        assert_eq!(file.extension(), "Makefile");
        assert_eq!(file.name_without_extension(), "Makefile");
    }

    #[test]
    fn test_dotted_directory_does_not_leak_into_extension() {
        let file = SourceFile::new("/my.repo/Makefile").unwrap();

        assert_eq!(file.extension(), "Makefile");
        assert_eq!(file.name_without_extension(), "Makefile");
    }

    #[test]
    fn test_dotfile_keeps_whole_name() {
        let file = SourceFile::new("/workspace/.eslintrc").unwrap();

        assert_eq!(file.extension(), "eslintrc");
        assert_eq!(file.name_without_extension(), ".eslintrc");
    }

    #[test]
    fn test_exists() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("present.ts");
        std::fs::write(&path, "").unwrap();

        assert!(SourceFile::from_path(&path).unwrap().exists());
        assert!(!SourceFile::from_path(&dir.path().join("absent.ts")).unwrap().exists());
    }
}
