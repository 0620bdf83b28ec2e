//! The variable resolver and its root-directory tokens.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::HashMap;

use filegen_paths::{Workspace, directory_path, last_segment, relative};

use crate::legacy::normalize_legacy_aliases;

/// Resolves `${...}` tokens against a file, a root directory and the
/// workspace.
///
/// Holds the workspace folders, an environment snapshot for `${env:NAME}`
/// and the working directory for `${cwd}`.
#[derive(Debug, Clone)]
pub struct VariableResolver<'a> {
    pub(crate) workspace: &'a Workspace,
    pub(crate) env: HashMap<String, String>,
    pub(crate) cwd: String,
}

impl<'a> VariableResolver<'a> {
    /// Create a resolver using the process environment and working directory.
    #[must_use]
    pub fn new(workspace: &'a Workspace) -> Self {
        let cwd = std::env::current_dir()
            .map(|p| p.to_string_lossy().into_owned())
            .ok()
            .or_else(|| workspace.default_folder().map(|f| f.path.clone()))
            .unwrap_or_default();

        Self {
            workspace,
            env: std::env::vars().collect(),
            cwd,
        }
    }

    /// Replace the environment snapshot.
    #[must_use]
    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = env;
        self
    }

    /// Replace the working directory used for `${cwd}`.
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl Into<String>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// The workspace this resolver looks folders up in.
    #[must_use]
    pub const fn workspace(&self) -> &'a Workspace {
        self.workspace
    }

    /// Resolve every supported token in `text`.
    ///
    /// Deprecated token names are rewritten first, then the root-directory
    /// tokens are substituted, and the remaining canonical tokens are
    /// resolved against `file_path`:
    ///
    /// * `${rootDirNam}` - last segment of `root_dir`
    /// * `${rootDirPath}` - `root_dir` itself
    /// * `${filePathFromRoot}` - `file_path` relative to `root_dir`
    /// * `${fileDirPathFromRoot}` - the file's directory relative to `root_dir`
    /// * `${relativeRootDirPath}` - `root_dir` relative to the file's workspace folder
    /// * `${workspaceToFileDir}` - the file's directory relative to its workspace folder
    ///
    /// Unknown tokens are left as they are.
    #[must_use]
    pub fn resolve(&self, file_path: &str, text: &str, root_dir: &str) -> String {
        let mut resolved = normalize_legacy_aliases(text);

        substitute(&mut resolved, "${rootDirNam}", || {
            last_segment(root_dir).to_string()
        });

        substitute(&mut resolved, "${rootDirPath}", || root_dir.to_string());

        substitute(&mut resolved, "${filePathFromRoot}", || {
            relative(root_dir, file_path)
        });

        substitute(&mut resolved, "${fileDirPathFromRoot}", || {
            relative(root_dir, &directory_path(file_path))
        });

        substitute(&mut resolved, "${relativeRootDirPath}", || {
            self.workspace
                .root_for_file(file_path)
                .map_or_else(|| root_dir.to_string(), |root| relative(root, root_dir))
        });

        substitute(&mut resolved, "${workspaceToFileDir}", || {
            let file_dir = directory_path(file_path);
            self.workspace
                .root_for_file(file_path)
                .map_or_else(|| file_dir.clone(), |root| relative(root, &file_dir))
        });

        self.resolve_canonical(file_path, &resolved)
    }
}

/// Replace every literal occurrence of `token`, computing the value only
/// when the token is present.
fn substitute(text: &mut String, token: &str, value: impl FnOnce() -> String) {
    if text.contains(token) {
        let value = value();
        log::debug!("Resolved {token} to {value}");
        *text = text.replace(token, &value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(workspace: &Workspace) -> VariableResolver<'_> {
        VariableResolver::new(workspace)
            .with_env(HashMap::new())
            .with_cwd("/workspace")
    }

    #[test]
    fn test_root_dir_tokens() {
        let workspace = Workspace::new(["/workspace"]);
        let resolver = resolver(&workspace);
        let file = "/workspace/packages/web/src/Button.ts";
        let root = "/workspace/packages/web";

        assert_eq!(resolver.resolve(file, "${rootDirNam}", root), "web");
        assert_eq!(resolver.resolve(file, "${rootDirPath}", root), root);
        assert_eq!(
            resolver.resolve(file, "${filePathFromRoot}", root),
            "src/Button.ts"
        );
        assert_eq!(resolver.resolve(file, "${fileDirPathFromRoot}", root), "src");
        assert_eq!(
            resolver.resolve(file, "${relativeRootDirPath}", root),
            "packages/web"
        );
        assert_eq!(
            resolver.resolve(file, "${workspaceToFileDir}", root),
            "packages/web/src"
        );
    }

    #[test]
    fn test_workspace_relative_tokens_fall_back_outside_workspace() {
        let workspace = Workspace::new(["/workspace"]);
        let resolver = resolver(&workspace);

        assert_eq!(
            resolver.resolve("/elsewhere/lib/a.ts", "${relativeRootDirPath}", "/elsewhere"),
            "/elsewhere"
        );
        assert_eq!(
            resolver.resolve("/elsewhere/lib/a.ts", "${workspaceToFileDir}", "/elsewhere"),
            "/elsewhere/lib"
        );
    }

    #[test]
    fn test_legacy_alias_matches_canonical() {
        let workspace = Workspace::new(["/workspace"]);
        let resolver = resolver(&workspace);
        let file = "/workspace/src/Button.ts";

        assert_eq!(
            resolver.resolve(file, "${outputFilePath}", "/workspace"),
            resolver.resolve(file, "${file}", "/workspace")
        );
        assert_eq!(
            resolver.resolve(file, "${fileNameWithoutExt}", "/workspace"),
            "Button"
        );
    }

    #[test]
    fn test_unknown_token_is_untouched() {
        let workspace = Workspace::new(["/workspace"]);
        let resolver = resolver(&workspace);

        assert_eq!(
            resolver.resolve("/workspace/a.ts", "${notAVariable}", "/workspace"),
            "${notAVariable}"
        );
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        let workspace = Workspace::new(["/workspace"]);
        let resolver = resolver(&workspace);

        assert_eq!(
            resolver.resolve("/workspace/a.ts", "${ROOTDIRPATH}", "/workspace"),
            "${ROOTDIRPATH}"
        );
    }

    #[test]
    fn test_mixed_command() {
        let workspace = Workspace::new(["/workspace"]);
        let resolver = resolver(&workspace);

        assert_eq!(
            resolver.resolve(
                "/workspace/tests/Button.test.ts",
                "jest ${relativeFilePath} --rootDir=${rootDirPath}",
                "/workspace"
            ),
            "jest tests/Button.test.ts --rootDir=/workspace"
        );
    }
}
