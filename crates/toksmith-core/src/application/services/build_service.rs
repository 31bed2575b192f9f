//! Build Service - main application orchestrator.
//!
//! This service coordinates one generation run:
//! 1. Validate the alias map against the token table
//! 2. Render every artifact to text
//! 3. Write to the filesystem
//!
//! Rendering is completed for *all* artifacts before the first byte is
//! written. A run either produces the full output set or touches nothing,
//! so a failed build can never leave a stylesheet whose names disagree with
//! the constants file next to it.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{AliasMap, NamingScheme, TokenTable},
    emit,
    error::TokResult,
};

/// Combined stylesheet file name under the output directory.
pub const COMBINED_FILE: &str = "variables.css";
/// Subdirectory holding one stylesheet per token group.
pub const GROUP_DIR: &str = "css";
/// Alias stylesheet file name.
pub const ALIAS_FILE: &str = "deprecated.css";
/// Constants source file name.
pub const CONSTANTS_FILE: &str = "tokens.rs";

/// Options for one build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory all artifacts are written under.
    pub out_dir: PathBuf,
    /// Active addressing scheme for every CSS artifact.
    pub scheme: NamingScheme,
    /// Version named in the alias stylesheet header.
    pub removal_version: String,
    /// Whether to emit the language-level constants source.
    pub emit_constants: bool,
}

impl BuildOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            scheme: NamingScheme::Flat,
            removal_version: "5.0.0".to_string(),
            emit_constants: true,
        }
    }
}

/// One rendered output file: path relative to the output directory plus its
/// full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub relative_path: PathBuf,
    pub content: String,
}

/// Summary of a completed (or dry) run, for CLI display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Absolute output paths in write order.
    pub files: Vec<PathBuf>,
    pub group_count: usize,
    pub variant_count: usize,
    pub alias_count: usize,
}

/// Main build service.
///
/// Owns the filesystem port; everything else arrives per call.
pub struct BuildService {
    filesystem: Box<dyn Filesystem>,
}

impl BuildService {
    /// Create a new build service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Run the full pipeline: validate, render, write.
    #[instrument(skip_all, fields(out_dir = %options.out_dir.display(), scheme = options.scheme.as_str()))]
    pub fn build(
        &self,
        table: &TokenTable,
        aliases: Option<&AliasMap>,
        options: &BuildOptions,
    ) -> TokResult<BuildReport> {
        info!(
            groups = table.len(),
            variants = table.variant_count(),
            "build started"
        );

        // 1. Validate. Alias targets must exist in the table before any
        //    rendering is worth doing.
        if let Some(aliases) = aliases {
            aliases.validate_against(table)?;
        }

        // 2. Render everything.
        let artifacts = render_artifacts(table, aliases, options);

        // 3. Write.
        self.filesystem.create_dir_all(&options.out_dir)?;
        if !table.is_empty() {
            self.filesystem.create_dir_all(&options.out_dir.join(GROUP_DIR))?;
        }

        let mut files = Vec::with_capacity(artifacts.len());
        for artifact in &artifacts {
            let path = options.out_dir.join(&artifact.relative_path);
            self.filesystem.write_file(&path, &artifact.content)?;
            debug!(path = %path.display(), bytes = artifact.content.len(), "wrote artifact");
            files.push(path);
        }

        info!(files = files.len(), "build completed");
        Ok(BuildReport {
            files,
            group_count: table.len(),
            variant_count: table.variant_count(),
            alias_count: aliases.map_or(0, AliasMap::retired_count),
        })
    }

    /// Validate and render without writing — the `--dry-run` path.
    pub fn plan(
        &self,
        table: &TokenTable,
        aliases: Option<&AliasMap>,
        options: &BuildOptions,
    ) -> TokResult<Vec<Artifact>> {
        if let Some(aliases) = aliases {
            aliases.validate_against(table)?;
        }
        Ok(render_artifacts(table, aliases, options))
    }
}

/// Render the full artifact set in write order.
fn render_artifacts(
    table: &TokenTable,
    aliases: Option<&AliasMap>,
    options: &BuildOptions,
) -> Vec<Artifact> {
    let mut artifacts = vec![Artifact {
        relative_path: PathBuf::from(COMBINED_FILE),
        content: emit::css::combined_stylesheet(table, &options.scheme),
    }];

    for group in table.groups() {
        artifacts.push(Artifact {
            relative_path: Path::new(GROUP_DIR).join(format!("{}.css", group.name())),
            content: emit::css::group_stylesheet(group, &options.scheme),
        });
    }

    if let Some(aliases) = aliases {
        artifacts.push(Artifact {
            relative_path: PathBuf::from(ALIAS_FILE),
            content: emit::css::alias_stylesheet(aliases, &options.removal_version),
        });
    }

    if options.emit_constants {
        artifacts.push(Artifact {
            relative_path: PathBuf::from(CONSTANTS_FILE),
            content: emit::constants::constants_module(table),
        });
    }

    artifacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TokenGroup;

    fn table() -> TokenTable {
        let mut table = TokenTable::new();
        let mut font = TokenGroup::new("fontSize").unwrap();
        font.push_variant("base", "16px").unwrap();
        table.push_group(font).unwrap();
        table
    }

    #[test]
    fn artifacts_cover_combined_groups_and_constants() {
        let options = BuildOptions::new("dist");
        let artifacts = render_artifacts(&table(), None, &options);
        let paths: Vec<_> = artifacts
            .iter()
            .map(|a| a.relative_path.to_string_lossy().into_owned())
            .collect();
        assert_eq!(paths, ["variables.css", "css/fontSize.css", "tokens.rs"]);
    }

    #[test]
    fn alias_artifact_appears_only_when_aliases_given() {
        let aliases = AliasMap::from_json(r#"{ "font-size-base": ["font-size-4"] }"#).unwrap();
        let options = BuildOptions::new("dist");
        let artifacts = render_artifacts(&table(), Some(&aliases), &options);
        assert!(artifacts
            .iter()
            .any(|a| a.relative_path == PathBuf::from(ALIAS_FILE)));
    }

    #[test]
    fn constants_can_be_disabled() {
        let mut options = BuildOptions::new("dist");
        options.emit_constants = false;
        let artifacts = render_artifacts(&table(), None, &options);
        assert!(!artifacts
            .iter()
            .any(|a| a.relative_path == PathBuf::from(CONSTANTS_FILE)));
    }
}
