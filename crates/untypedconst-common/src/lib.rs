//! Common types and utilities for the untypedconst analyzer.
//!
//! This crate provides foundational types used across all untypedconst crates:
//! - Source spans (`Span`)
//! - Line/column mapping for rendering (`LineMap`, `Position`)
//! - Diagnostic records and the message table
//! - Analyzer metadata

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, format_message};

/// Name under which the analysis pass is registered with a host driver.
pub const ANALYZER_NAME: &str = "untypedconst";

/// One-line description of the analysis pass.
pub const ANALYZER_DOC: &str =
    "checks if an untyped constant expression is used as a value of defined type";
