//! Source loaders: read token and alias sources from disk and hand them to
//! the core parsers.
//!
//! Format selection is by extension: `.json` is parsed as a token document,
//! everything else as definitions text. The loaders own the file-existence
//! check so the core only ever sees source strings.

use std::path::Path;

use tracing::debug;

use toksmith_core::{
    application::ApplicationError,
    domain::{AliasMap, TokenTable, parse_definitions, parse_document},
    error::TokResult,
};

use crate::filesystem::map_io_error;

/// The two canonical token source shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Marker-and-assignment definitions text.
    Definitions,
    /// JSON token document.
    Document,
}

impl SourceFormat {
    /// Pick the parser for a path by its extension.
    pub fn sniff(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Document,
            _ => Self::Definitions,
        }
    }
}

/// Load and parse a token source file.
pub fn load_token_table(path: &Path) -> TokResult<TokenTable> {
    let source = read_source(path)?;
    let format = SourceFormat::sniff(path);
    debug!(path = %path.display(), ?format, "loading token source");

    let table = match format {
        SourceFormat::Definitions => parse_definitions(&source)?,
        SourceFormat::Document => parse_document(&source)?,
    };
    Ok(table)
}

/// Load and parse a deprecated-alias mapping file (always JSON).
pub fn load_alias_map(path: &Path) -> TokResult<AliasMap> {
    let source = read_source(path)?;
    debug!(path = %path.display(), "loading alias map");
    Ok(AliasMap::from_json(&source)?)
}

fn read_source(path: &Path) -> TokResult<String> {
    if !path.exists() {
        return Err(ApplicationError::SourceNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    std::fs::read_to_string(path).map_err(|e| map_io_error(path, &e, "read source file"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn sniff_picks_document_for_json() {
        assert_eq!(SourceFormat::sniff(Path::new("tokens.json")), SourceFormat::Document);
        assert_eq!(SourceFormat::sniff(Path::new("tokens.def")), SourceFormat::Definitions);
        assert_eq!(SourceFormat::sniff(Path::new("tokens")), SourceFormat::Definitions);
    }

    #[test]
    fn loads_definitions_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "tokens.def", "// Token: GAP\nGAP_BASE = 16px\n");
        let table = load_token_table(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.group("gap").is_some());
    }

    #[test]
    fn loads_document_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "tokens.json",
            r#"{ "fontSize": { "name": "font-size", "items": { "base": "16px" } } }"#,
        );
        let table = load_token_table(&path).unwrap();
        assert!(table.group("fontSize").is_some());
    }

    #[test]
    fn missing_source_is_not_found() {
        let err = load_token_table(Path::new("/nonexistent/tokens.def")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn loads_alias_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "deprecated.json", r#"{ "gap-base": ["gap-size-4"] }"#);
        let map = load_alias_map(&path).unwrap();
        assert_eq!(map.retired_count(), 1);
    }

    #[test]
    fn parse_errors_propagate_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "tokens.def", "GAP_BASE = 16px\n");
        let err = load_token_table(&path).unwrap_err();
        assert!(err.to_string().contains("before any group marker"));
    }
}
