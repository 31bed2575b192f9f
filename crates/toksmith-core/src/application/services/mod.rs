//! Application services.

pub mod build_service;

pub use build_service::{Artifact, BuildOptions, BuildReport, BuildService};
