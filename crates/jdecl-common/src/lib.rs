//! Common types and utilities for the jdecl declaration emitter.
//!
//! This crate provides foundational types used across all jdecl crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticSink`, `DiagnosticCollector`)
//! - Source locations for reporting (`SourceLocation`)
//! - Emission options (`DeclarationOptions`)

// Diagnostics collected during synthesis (non-fatal)
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticCollector, DiagnosticMessage, DiagnosticSink,
};

// Position types for source locations
pub mod position;
pub use position::SourceLocation;

// Emission options and their JSON loading
pub mod options;
pub use options::{ConfigError, DeclarationOptions};
