//! Base directory resolution.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use filegen_paths::{
    SEPARATOR, SEPARATOR_STR, SourceFile, directory_path, find_file_dir_upwards, is_absolute,
    join, last_segment, relative,
};

use crate::resolver::LocationResolver;

/// Leading segments of the relative path skipped under a suffixed root.
const ROOT_PATH_SEGMENTS_TO_SKIP: usize = 2;

impl LocationResolver<'_> {
    /// The directory relative paths and mirrored structures are measured from.
    ///
    /// Starts at the workspace folder containing the file (empty when there
    /// is none). For project-root placement with a root marker, the nearest
    /// ancestor holding the marker replaces it. Finally the last segment is
    /// renamed per [`root_dir_name`](Self::root_dir_name).
    #[must_use]
    pub fn base_directory(&self, source: &SourceFile) -> String {
        let workspace_root = self.workspace().root_for_file(source.absolute_path());
        let mut base = workspace_root.unwrap_or_default().to_string();

        let marker = self.config.root_filename_or_extension();
        if self.config.should_create_files_in_project_root() && !marker.is_empty() {
            let search = find_file_dir_upwards(&source.directory_path(), marker, workspace_root);
            if let Some(found) = search.found() {
                base = found.to_string();
            }
        }

        if base.is_empty() {
            return base;
        }

        let name = self.root_dir_name(&base);
        if !name.is_empty() && !is_absolute(&name) {
            let renamed = join(&[&directory_path(&base), &name]);
            log::debug!("Renamed base directory {base} to {renamed}");
            base = renamed;
        }

        base
    }

    /// The name the base directory's last segment is replaced with.
    ///
    /// A directory already ending with the directory suffix is returned
    /// unchanged (an absolute path, so no rename happens). Every directory
    /// ends with an empty suffix, so without one nothing is renamed. Otherwise the
    /// templated `rootDirName`, or the current last segment, gets the suffix
    /// appended.
    #[must_use]
    pub fn root_dir_name(&self, root_dir: &str) -> String {
        if self.config.ends_with_directory_suffix(root_dir) {
            return root_dir.to_string();
        }

        let suffix = self.config.directory_suffix();

        match self.config.root_dir_name() {
            Some(template) => {
                let name = self.variables.resolve(root_dir, template, root_dir);
                format!("{name}{suffix}")
            }
            None => format!("{}{suffix}", last_segment(root_dir)),
        }
    }

    /// Path of `source` relative to the base directory.
    ///
    /// Without a directory name but with a directory suffix, the suffix is
    /// appended to the base first. With both a root marker and a suffix the
    /// first two segments are skipped. A leading directory-name segment is
    /// stripped.
    #[must_use]
    pub fn relative_file_path(&self, source: &SourceFile) -> String {
        let mut base = self.base_directory(source);
        let dir_name = self.config.directory_name();
        let dir_suffix = self.config.directory_suffix();

        if dir_name.is_empty() && !dir_suffix.is_empty() {
            base.push_str(dir_suffix);
        }

        let mut relative_path = relative(&base, source.absolute_path());

        if !self.config.root_filename_or_extension().is_empty() && !dir_suffix.is_empty() {
            relative_path = relative_path
                .split(SEPARATOR)
                .skip(ROOT_PATH_SEGMENTS_TO_SKIP)
                .collect::<Vec<_>>()
                .join(SEPARATOR_STR);
        }

        if !dir_name.is_empty() && relative_path.split(SEPARATOR).next() == Some(dir_name) {
            relative_path = relative_path[dir_name.len()..]
                .trim_start_matches(SEPARATOR)
                .to_string();
        }

        relative_path
    }
}

#[cfg(test)]
mod tests {
    use crate::LocationResolver;
    use filegen_config::{ConfigEntry, Configuration, DefaultLocation};
    use filegen_paths::{SourceFile, Workspace};
    use filegen_variables::VariableResolver;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn variables(workspace: &Workspace) -> VariableResolver<'_> {
        VariableResolver::new(workspace).with_env(HashMap::new())
    }

    #[test]
    fn test_base_directory_is_workspace_root() {
        let workspace = Workspace::new(["/workspace"]);
        let variables = variables(&workspace);
        let config = Configuration::new(&ConfigEntry::default(), None);
        let resolver = LocationResolver::new(&config, &variables);
        let source = SourceFile::new("/workspace/src/components/Button.ts").unwrap();

        assert_eq!(resolver.base_directory(&source), "/workspace");
        assert_eq!(
            resolver.relative_file_path(&source),
            "src/components/Button.ts"
        );
    }

    #[test]
    fn test_base_directory_outside_workspace_is_empty() {
        let workspace = Workspace::new(["/workspace"]);
        let variables = variables(&workspace);
        let config = Configuration::new(&ConfigEntry::default(), None);
        let resolver = LocationResolver::new(&config, &variables);
        let source = SourceFile::new("/elsewhere/a.ts").unwrap();

        assert_eq!(resolver.base_directory(&source), "");
    }

    #[test]
    fn test_base_directory_uses_root_marker() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_string_lossy().into_owned();
        let package = dir.path().join("packages/web");
        fs::create_dir_all(package.join("src")).unwrap();
        fs::write(package.join("package.json"), "{}").unwrap();
        let file = package.join("src/index.ts");

        let workspace = Workspace::new([root.as_str()]);
        let variables = variables(&workspace);
        let config = Configuration::new(
            &ConfigEntry {
                default_location_for_files: Some(DefaultLocation::ProjectRoot),
                root_filename_or_extension: Some("package.json".to_string()),
                ..Default::default()
            },
            None,
        );
        let resolver = LocationResolver::new(&config, &variables);
        let source = SourceFile::from_path(&file).unwrap();

        assert_eq!(
            resolver.base_directory(&source),
            package.to_string_lossy()
        );
        assert_eq!(resolver.relative_file_path(&source), "src/index.ts");
    }

    #[test]
    fn test_missing_root_marker_keeps_workspace_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_string_lossy().into_owned();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        let file = dir.path().join("src/index.ts");

        let workspace = Workspace::new([root.as_str()]);
        let variables = variables(&workspace);
        let config = Configuration::new(
            &ConfigEntry {
                default_location_for_files: Some(DefaultLocation::ProjectRoot),
                root_filename_or_extension: Some("definitely-missing.marker".to_string()),
                ..Default::default()
            },
            None,
        );
        let resolver = LocationResolver::new(&config, &variables);

        assert_eq!(
            resolver.base_directory(&SourceFile::from_path(&file).unwrap()),
            root
        );
    }

    #[test]
    fn test_directory_suffix_renames_base() {
        let workspace = Workspace::new(["/repo/app"]);
        let variables = variables(&workspace);
        let config = Configuration::new(
            &ConfigEntry {
                directory_suffix: Some(".Tests".to_string()),
                ..Default::default()
            },
            None,
        );
        let resolver = LocationResolver::new(&config, &variables);
        let source = SourceFile::new("/repo/app/src/a.cs").unwrap();

        assert_eq!(resolver.root_dir_name("/repo/app"), "app.Tests");
        assert_eq!(resolver.base_directory(&source), "/repo/app.Tests");
    }

    #[test]
    fn test_base_already_ending_with_suffix_is_kept() {
        let workspace = Workspace::new(["/repo/app.Tests"]);
        let variables = variables(&workspace);
        let config = Configuration::new(
            &ConfigEntry {
                directory_suffix: Some(".Tests".to_string()),
                ..Default::default()
            },
            None,
        );
        let resolver = LocationResolver::new(&config, &variables);
        let source = SourceFile::new("/repo/app.Tests/a.cs").unwrap();

        assert_eq!(resolver.base_directory(&source), "/repo/app.Tests");
    }

    #[test]
    fn test_templated_root_dir_name() {
        let workspace = Workspace::new(["/repo/app"]);
        let variables = variables(&workspace);
        let config = Configuration::new(
            &ConfigEntry {
                root_dir_name: Some("${rootDirNam}-specs".to_string()),
                directory_suffix: Some(".Tests".to_string()),
                ..Default::default()
            },
            None,
        );
        let resolver = LocationResolver::new(&config, &variables);
        let source = SourceFile::new("/repo/app/lib/a.ts").unwrap();

        assert_eq!(resolver.base_directory(&source), "/repo/app-specs.Tests");
    }

    #[test]
    fn test_root_dir_name_without_suffix_keeps_base() {
        let workspace = Workspace::new(["/repo/app"]);
        let variables = variables(&workspace);
        let config = Configuration::new(
            &ConfigEntry {
                root_dir_name: Some("renamed".to_string()),
                ..Default::default()
            },
            None,
        );
        let resolver = LocationResolver::new(&config, &variables);
        let source = SourceFile::new("/repo/app/lib/a.ts").unwrap();

        assert_eq!(resolver.root_dir_name("/repo/app"), "/repo/app");
        assert_eq!(resolver.base_directory(&source), "/repo/app");
        assert_eq!(resolver.relative_file_path(&source), "lib/a.ts");
    }

    #[test]
    fn test_relative_path_strips_leading_directory_name() {
        let workspace = Workspace::new(["/workspace"]);
        let variables = variables(&workspace);
        let config = Configuration::new(
            &ConfigEntry {
                directory_name: Some("__tests__".to_string()),
                ..Default::default()
            },
            None,
        );
        let resolver = LocationResolver::new(&config, &variables);
        let source = SourceFile::new("/workspace/__tests__/components/Button.test.ts").unwrap();

        assert_eq!(
            resolver.relative_file_path(&source),
            "components/Button.test.ts"
        );
    }

    #[test]
    fn test_relative_path_skips_segments_under_suffixed_root() {
        let workspace = Workspace::new(["/repo"]);
        let variables = variables(&workspace);
        let config = Configuration::new(
            &ConfigEntry {
                directory_suffix: Some(".Tests".to_string()),
                root_filename_or_extension: Some("*.csproj".to_string()),
                ..Default::default()
            },
            None,
        );
        let resolver = LocationResolver::new(&config, &variables);
        let source = SourceFile::new("/repo/Services/Orders/Api/Handler.cs").unwrap();

        // `../repo` leads the relative path and is skipped.
        assert_eq!(resolver.base_directory(&source), "/repo.Tests");
        assert_eq!(
            resolver.relative_file_path(&source),
            "Services/Orders/Api/Handler.cs"
        );
    }
}
