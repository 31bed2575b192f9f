//! Command handlers.
//!
//! Each module translates CLI arguments into core calls and displays the
//! result. No business logic lives in this layer.

pub mod build;
pub mod check;
pub mod completions;
pub mod init;
pub mod list;
pub mod resolve;

use crate::cli::SchemeArg;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use toksmith_core::domain::NamingScheme;

/// Resolve the active naming scheme from flags and config.
///
/// Precedence: CLI flag, then `defaults.scheme` from config. The prefix for
/// the namespaced scheme follows the same rule; a namespaced selection with
/// no prefix anywhere is a user error.
pub(crate) fn resolve_scheme(
    flag: Option<SchemeArg>,
    prefix: Option<&str>,
    config: &AppConfig,
) -> CliResult<NamingScheme> {
    let scheme = match flag {
        Some(s) => s,
        None => match config.defaults.scheme.as_str() {
            "namespaced" => SchemeArg::Namespaced,
            "flat" => SchemeArg::Flat,
            other => {
                return Err(CliError::ConfigError {
                    message: format!("unknown defaults.scheme '{other}' (expected flat or namespaced)"),
                    source: None,
                });
            }
        },
    };

    match scheme {
        SchemeArg::Flat => Ok(NamingScheme::Flat),
        SchemeArg::Namespaced => {
            let prefix = prefix
                .map(str::to_owned)
                .or_else(|| config.defaults.prefix.clone())
                .ok_or(CliError::MissingPrefix)?;
            Ok(NamingScheme::namespaced(prefix).map_err(toksmith_core::error::TokError::from)?)
        }
    }
}
