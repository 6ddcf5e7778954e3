//! Error types with rich diagnostics using miette
//!
//! Nothing here ever reaches the host from `translate`, `render` or
//! `finalize`: registry and teardown errors are collected into diagnostic
//! lists, paint errors are logged by the widget facade. Props parse errors
//! carry source spans so configuration mistakes get annotated reports.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::instruction::RendererId;

// ============================================================================
// Props Errors
// ============================================================================

/// Errors that occur while parsing the text props format
#[derive(Error, Diagnostic, Debug)]
pub enum PropsError {
    #[error("syntax error: {message}")]
    #[diagnostic(code(navgauge::props::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("invalid number: {text}")]
    #[diagnostic(code(navgauge::props::invalid_number))]
    InvalidNumber {
        text: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a number")]
        span: SourceSpan,
    },

    #[error("invalid escape sequence in string")]
    #[diagnostic(
        code(navgauge::props::invalid_escape),
        help("supported escapes are \\\" \\\\ \\n and \\t")
    )]
    InvalidEscape {
        #[source_code]
        src: NamedSource<String>,
        #[label("unsupported escape")]
        span: SourceSpan,
    },
}

// ============================================================================
// Registry Errors
// ============================================================================

/// A mapper module that was skipped while building the dispatch registry
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("mapper module listed as `{listed}` declares no cluster name")]
    #[diagnostic(code(navgauge::registry::missing_cluster))]
    MissingCluster { listed: String },

    #[error("mapper module for cluster `{cluster}` has no translate function")]
    #[diagnostic(code(navgauge::registry::missing_translate))]
    MissingTranslate { cluster: String },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while painting or tearing down a sub-renderer
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("invalid gauge range: min {min} must be below max {max}")]
    #[diagnostic(
        code(navgauge::render::invalid_range),
        help("check the <prefix>Min / <prefix>Max widget settings")
    )]
    InvalidRange { min: f64, max: f64 },

    #[error("canvas has no drawable area ({width} x {height})")]
    #[diagnostic(code(navgauge::render::empty_canvas))]
    EmptyCanvas { width: f64, height: f64 },

    #[error("{renderer} teardown failed: {message}")]
    #[diagnostic(code(navgauge::render::teardown))]
    Teardown { renderer: String, message: String },

    #[error("{renderer} panicked: {message}")]
    #[diagnostic(code(navgauge::render::panicked))]
    Panicked { renderer: String, message: String },
}

/// One failed teardown hook observed during finalize fan-out
#[derive(Debug, Clone, PartialEq)]
pub struct TeardownFailure {
    pub renderer: RendererId,
    pub error: RenderError,
}
