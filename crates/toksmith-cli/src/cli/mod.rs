//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "toksmith",
    bin_name = "toksmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f528} Design-token pipeline",
    long_about = "Toksmith turns one design-token source into CSS custom \
                  properties, per-group stylesheets, deprecated-alias \
                  stylesheets, and code-level constants.",
    after_help = "EXAMPLES:\n\
        \x20 toksmith build tokens.def --out-dir dist\n\
        \x20 toksmith build tokens.json --scheme namespaced --prefix core\n\
        \x20 toksmith resolve tokens.def fontSize large\n\
        \x20 toksmith check tokens.def --aliases deprecated.json",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full pipeline and write every output artifact.
    #[command(
        visible_alias = "b",
        about = "Generate all outputs from a token source",
        after_help = "EXAMPLES:\n\
            \x20 toksmith build tokens.def\n\
            \x20 toksmith build tokens.json --aliases deprecated.json\n\
            \x20 toksmith build tokens.def --scheme namespaced --prefix core --out-dir dist"
    )]
    Build(BuildArgs),

    /// Validate sources without writing anything.
    #[command(
        about = "Validate a token source (and optional alias map)",
        after_help = "EXAMPLES:\n\
            \x20 toksmith check tokens.def\n\
            \x20 toksmith check tokens.json --aliases deprecated.json"
    )]
    Check(CheckArgs),

    /// Resolve one token to its CSS variable and value.
    #[command(
        about = "Resolve a (group, variant) pair",
        after_help = "EXAMPLES:\n\
            \x20 toksmith resolve tokens.def fontSize          # variant defaults to 'base'\n\
            \x20 toksmith resolve tokens.def fontSize large\n\
            \x20 toksmith resolve tokens.def gap base --scheme namespaced --prefix core"
    )]
    Resolve(ResolveArgs),

    /// List token groups in a source.
    #[command(
        visible_alias = "ls",
        about = "List token groups",
        after_help = "EXAMPLES:\n\
            \x20 toksmith list tokens.def\n\
            \x20 toksmith list tokens.json --format json"
    )]
    List(ListArgs),

    /// Write starter token sources into the current directory.
    #[command(
        about = "Create starter token sources",
        after_help = "EXAMPLES:\n\
            \x20 toksmith init                 # writes tokens.def\n\
            \x20 toksmith init --with-aliases  # also writes deprecated.json"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 toksmith completions bash > ~/.local/share/bash-completion/completions/toksmith\n\
            \x20 toksmith completions zsh  > ~/.zfunc/_toksmith\n\
            \x20 toksmith completions fish > ~/.config/fish/completions/toksmith.fish"
    )]
    Completions(CompletionsArgs),
}

// ── build ─────────────────────────────────────────────────────────────────────

/// Arguments for `toksmith build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Token source file. `.json` is parsed as a token document; anything
    /// else as definitions text.
    #[arg(value_name = "SOURCE", help = "Token source file")]
    pub source: PathBuf,

    /// Deprecated-alias mapping file (JSON).
    #[arg(
        short = 'a',
        long = "aliases",
        value_name = "FILE",
        help = "Deprecated-alias mapping (JSON)"
    )]
    pub aliases: Option<PathBuf>,

    /// Output directory.
    #[arg(
        short = 'o',
        long = "out-dir",
        value_name = "DIR",
        help = "Output directory (default: dist, or build.out_dir from config)"
    )]
    pub out_dir: Option<PathBuf>,

    /// Addressing scheme for CSS property names.
    #[arg(
        short = 's',
        long = "scheme",
        value_enum,
        help = "CSS naming scheme"
    )]
    pub scheme: Option<SchemeArg>,

    /// Namespace prefix; required with `--scheme namespaced`.
    #[arg(
        short = 'p',
        long = "prefix",
        value_name = "PREFIX",
        help = "Namespace prefix (e.g. core, icon)"
    )]
    pub prefix: Option<String>,

    /// Version named in the deprecated-stylesheet header.
    #[arg(
        long = "removal-version",
        value_name = "VERSION",
        help = "Version in which deprecated variables will be removed"
    )]
    pub removal_version: Option<String>,

    /// Skip the code-level constants artifact.
    #[arg(long = "no-constants", help = "Do not emit the constants source file")]
    pub no_constants: bool,

    /// Preview what would be written without writing any files.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `toksmith check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Token source file.
    #[arg(value_name = "SOURCE", help = "Token source file")]
    pub source: PathBuf,

    /// Deprecated-alias mapping file (JSON).
    #[arg(
        short = 'a',
        long = "aliases",
        value_name = "FILE",
        help = "Deprecated-alias mapping (JSON)"
    )]
    pub aliases: Option<PathBuf>,
}

// ── resolve ───────────────────────────────────────────────────────────────────

/// Arguments for `toksmith resolve`.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Token source file.
    #[arg(value_name = "SOURCE", help = "Token source file")]
    pub source: PathBuf,

    /// Token group, e.g. `fontSize`.
    #[arg(value_name = "GROUP", help = "Token group name")]
    pub group: String,

    /// Variant within the group; defaults to `base`.
    #[arg(value_name = "VARIANT", help = "Variant key (default: base)")]
    pub variant: Option<String>,

    /// Addressing scheme for the resolved property name.
    #[arg(short = 's', long = "scheme", value_enum, help = "CSS naming scheme")]
    pub scheme: Option<SchemeArg>,

    /// Namespace prefix; required with `--scheme namespaced`.
    #[arg(short = 'p', long = "prefix", value_name = "PREFIX", help = "Namespace prefix")]
    pub prefix: Option<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `toksmith list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Token source file.
    #[arg(value_name = "SOURCE", help = "Token source file")]
    pub source: PathBuf,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One group name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `toksmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Also write a starter deprecated-alias mapping.
    #[arg(long = "with-aliases", help = "Also create deprecated.json")]
    pub with_aliases: bool,

    /// Overwrite existing files.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `toksmith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// CSS property addressing schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SchemeArg {
    /// `--group-variant`
    Flat,
    /// `--prefix--group--variant`
    #[value(alias = "ns")]
    Namespaced,
}

impl std::fmt::Display for SchemeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Namespaced => write!(f, "namespaced"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
