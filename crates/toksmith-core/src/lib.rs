//! Toksmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the toksmith
//! design-token pipeline, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          toksmith-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (BuildService)               │
//! │   validate → render all → write all     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: Filesystem)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    toksmith-adapters (Infrastructure)   │
//! │  (LocalFilesystem, MemoryFilesystem,    │
//! │   source loaders)                       │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (TokenTable, Resolver, AliasMap,       │
//! │   case algebra, emitters)               │
//! │        No I/O, No Hidden State          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use toksmith_core::{
//!     application::{BuildOptions, BuildService},
//!     domain::parse_definitions,
//! };
//!
//! // 1. Build the token table from a source string
//! let table = parse_definitions("// Token: GAP\nGAP_BASE = 16px\n").unwrap();
//!
//! // 2. Run the pipeline (with an injected filesystem adapter)
//! # let filesystem: Box<dyn toksmith_core::application::Filesystem> = unimplemented!();
//! let service = BuildService::new(filesystem);
//! service.build(&table, None, &BuildOptions::new("dist")).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Emitters (pure serializers over domain values)
pub mod emit;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Artifact, BuildOptions, BuildReport, BuildService, ports::Filesystem,
    };
    pub use crate::domain::{
        AliasMap, NamingScheme, ResolvedToken, Resolver, TokenGroup, TokenTable, Variant,
        parse_definitions, parse_document,
    };
    pub use crate::error::{TokError, TokResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
