//! Companion file placement.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use filegen_config::DefaultLocation;
use filegen_paths::{
    PathError, SEPARATOR, SourceFile, directory_path, is_absolute, is_companion_dir_present,
    join, replace_source_dir,
};

use crate::file_name::compose_file_name;
use crate::resolver::LocationResolver;

impl LocationResolver<'_> {
    /// Whether `source` already is a companion file.
    ///
    /// True when its name ends with `<suffix>.<extension>`; never true
    /// without a suffix.
    #[must_use]
    pub fn is_companion_file(&self, source: &SourceFile) -> bool {
        let suffix = self.config.files_suffix();
        !suffix.is_empty()
            && source
                .name()
                .ends_with(&format!("{suffix}.{}", source.extension()))
    }

    /// The directory companion files go in, before the companion
    /// directory name is enforced.
    ///
    /// A companion file stays where it is. A custom location wins over the
    /// default placement strategy.
    #[must_use]
    pub fn files_location(&self, source: &SourceFile) -> String {
        if self.is_companion_file(source) {
            return source.directory_path();
        }

        let dir_name = self.config.directory_name();
        let custom = self.config.custom_files_location();

        if !custom.is_empty() {
            let mut location = if is_absolute(custom) {
                custom.to_string()
            } else {
                join(&[&self.base_directory(source), custom])
            };

            let relative_path = self.relative_file_path(source);
            if relative_path.contains(SEPARATOR) || !dir_name.is_empty() {
                let mirrored = if self.config.ignore_directories() {
                    String::new()
                } else {
                    directory_path(&relative_path)
                };
                location = join(&[&location, dir_name, &mirrored]);
            }

            return replace_source_dir(&location, self.config.source_dir());
        }

        match self.config.default_location() {
            DefaultLocation::SameAsSourceFile => {
                let directory = source.directory_path();
                if !dir_name.is_empty() && !is_companion_dir_present(dir_name, &directory) {
                    join(&[&directory, dir_name])
                } else {
                    directory
                }
            }
            DefaultLocation::ProjectRoot => {
                let relative_path = self.relative_file_path(source);
                if relative_path.contains(SEPARATOR) {
                    self.mirrored_directory(source, &relative_path)
                } else {
                    self.base_directory(source)
                }
            }
            DefaultLocation::SameAsSourceFileWithNewDirectory => {
                let new_directory = if dir_name.is_empty() {
                    source.name_without_extension()
                } else {
                    dir_name
                };
                join(&[&source.directory_path(), new_directory])
            }
        }
    }

    /// The source's relative directory chain rebuilt under
    /// `base/directoryName`, with the source directory stripped.
    fn mirrored_directory(&self, source: &SourceFile, relative_path: &str) -> String {
        let directory = join(&[
            &self.base_directory(source),
            self.config.directory_name(),
            &directory_path(relative_path),
        ]);

        replace_source_dir(&directory, self.config.source_dir())
    }

    /// The directory the companion file is created in.
    ///
    /// The companion directory name is appended when it is not already part
    /// of the location and the source is not itself a companion.
    #[must_use]
    pub fn files_directory(&self, source: &SourceFile) -> String {
        let location = self.files_location(source);
        let dir_name = self.config.directory_name();

        if dir_name.is_empty()
            || self.is_companion_file(source)
            || is_companion_dir_present(dir_name, &location)
        {
            return location;
        }

        join(&[&location, dir_name])
    }

    /// The companion file name; a companion keeps its own name.
    #[must_use]
    pub fn file_name(&self, source: &SourceFile) -> String {
        if self.is_companion_file(source) {
            return source.name().to_string();
        }

        compose_file_name(
            source.name_without_extension(),
            source.extension(),
            self.config.files_suffix(),
            self.config.file_suffix_type(),
        )
    }

    /// Full path of the companion file.
    #[must_use]
    pub fn absolute_path(&self, source: &SourceFile) -> String {
        join(&[&self.files_directory(source), &self.file_name(source)])
    }

    /// The source file a companion was derived from.
    ///
    /// For a companion file the companion directory is removed from its
    /// directory and the suffix from its stem. Any other file is its own
    /// source.
    ///
    /// # Errors
    ///
    /// * If the derived path is empty
    pub fn parent_source(&self, source: &SourceFile) -> Result<SourceFile, PathError> {
        if !self.is_companion_file(source) {
            return Ok(source.clone());
        }

        let suffix = self.config.files_suffix();
        let stem = source.name_without_extension();
        let stem = stem.strip_suffix(suffix).unwrap_or(stem);
        let stem = stem.strip_suffix('.').unwrap_or(stem);

        let dir_name = self.config.directory_name();
        let directory = source.directory_path();
        let directory = if dir_name.is_empty() {
            directory
        } else {
            directory.replacen(dir_name, "", 1)
        };

        let parent = join(&[&directory, &format!("{stem}.{}", source.extension())]);
        log::debug!("Parent source of {} is {parent}", source.absolute_path());

        SourceFile::new(parent)
    }
}
