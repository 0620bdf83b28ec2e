//! Canonical `${...}` tokens resolved against a file and its workspace folder.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::LazyLock;

use filegen_paths::{SEPARATOR_STR, WorkspaceFolder, basename, directory_path, relative};
use regex::{Captures, Regex};

use crate::resolver::VariableResolver;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("Invalid regex"));

/// Token names understood by [`VariableResolver::resolve_canonical`].
///
/// `workspaceFolder:<name>`, `workspaceFolderBasename:<name>` and
/// `env:<NAME>` are accepted as well.
pub const CANONICAL_VARIABLES: [&str; 15] = [
    "workspaceFolder",
    "workspaceRoot",
    "workspaceFolderBasename",
    "fileWorkspaceFolder",
    "file",
    "relativeFile",
    "relativeFileDirname",
    "fileBasename",
    "fileBasenameNoExtension",
    "fileDirname",
    "fileDirnameBasename",
    "fileExtname",
    "cwd",
    "pathSeparator",
    "/",
];

impl VariableResolver<'_> {
    /// Resolve the canonical tokens in `text` against `file_path`.
    ///
    /// The workspace folder is the one containing the file, or the first
    /// folder when none does. Tokens that cannot be resolved (unknown names,
    /// unknown folder names, unset environment variables, file tokens with
    /// no file) stay in the text verbatim.
    #[must_use]
    pub fn resolve_canonical(&self, file_path: &str, text: &str) -> String {
        TOKEN_PATTERN
            .replace_all(text, |caps: &Captures<'_>| {
                let name = &caps[1];
                self.canonical_value(file_path, name).unwrap_or_else(|| {
                    log::debug!("Leaving unresolved token ${{{name}}}");
                    caps[0].to_string()
                })
            })
            .into_owned()
    }

    fn folder_for(&self, file_path: &str) -> Option<&WorkspaceFolder> {
        self.workspace
            .folder_for_file(file_path)
            .or_else(|| self.workspace.default_folder())
    }

    fn canonical_value(&self, file_path: &str, name: &str) -> Option<String> {
        if let Some((scope, argument)) = name.split_once(':') {
            return match scope {
                "env" => self.env.get(argument).cloned(),
                "workspaceFolder" => self
                    .workspace
                    .folder_by_name(argument)
                    .map(|f| f.path.clone()),
                "workspaceFolderBasename" => self
                    .workspace
                    .folder_by_name(argument)
                    .map(|f| f.name.clone()),
                _ => None,
            };
        }

        let has_file = !file_path.is_empty();

        match name {
            "workspaceFolder" | "workspaceRoot" => self.folder_for(file_path).map(|f| f.path.clone()),
            "workspaceFolderBasename" => self.folder_for(file_path).map(|f| f.name.clone()),
            "fileWorkspaceFolder" => self
                .workspace
                .folder_for_file(file_path)
                .map(|f| f.path.clone()),
            "cwd" => Some(self.cwd.clone()),
            "pathSeparator" | "/" => Some(SEPARATOR_STR.to_string()),
            _ if !has_file => None,
            "file" => Some(file_path.to_string()),
            "relativeFile" => Some(
                self.folder_for(file_path)
                    .map_or_else(|| file_path.to_string(), |f| relative(&f.path, file_path)),
            ),
            "relativeFileDirname" => {
                let dir = directory_path(file_path);
                Some(self.folder_for(file_path).map_or(dir.clone(), |f| {
                    let rel = relative(&f.path, &dir);
                    if rel.is_empty() { ".".to_string() } else { rel }
                }))
            }
            "fileBasename" => Some(basename(file_path).to_string()),
            "fileBasenameNoExtension" => {
                let name = basename(file_path);
                let ext = extname(name);
                Some(name[..name.len() - ext.len()].to_string())
            }
            "fileDirname" => Some(directory_path(file_path)),
            "fileDirnameBasename" => Some(basename(&directory_path(file_path)).to_string()),
            "fileExtname" => Some(extname(basename(file_path)).to_string()),
            _ => None,
        }
    }
}

/// The extension of a file name including its dot, or empty.
///
/// A leading dot (`.bashrc`) does not start an extension.
fn extname(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) if index > 0 => &name[index..],
        _ => "",
    }
}
