//! Diagnostics: non-fatal problems found while registering symbols.
//!
//! Nothing in this crate aborts a build: duplicate definitions and malformed
//! input surface as diagnostics on the domain (and as `tracing` warnings)
//! while registration continues.

use std::sync::Arc;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A diagnostic message tied to a document in the build.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// The document the diagnostic applies to.
    pub docname: String,
    /// Severity level.
    pub severity: Severity,
    /// Warning/error code (e.g. "W0001").
    pub code: Option<Arc<str>>,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// Another document involved in the problem (e.g. the previous owner of
    /// a duplicated name).
    pub related_docname: Option<String>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(docname: impl Into<String>, message: impl Into<Arc<str>>) -> Self {
        Self {
            docname: docname.into(),
            severity: Severity::Warning,
            code: None,
            message: message.into(),
            related_docname: None,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(docname: impl Into<String>, message: impl Into<Arc<str>>) -> Self {
        Self {
            docname: docname.into(),
            severity: Severity::Error,
            code: None,
            message: message.into(),
            related_docname: None,
        }
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach the other document involved in the problem.
    pub fn with_related_docname(mut self, docname: impl Into<String>) -> Self {
        self.related_docname = Some(docname.into());
        self
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Standard diagnostic codes emitted during registration.
pub mod codes {
    /// Duplicate object description (same fullname, different document).
    pub const DUPLICATE_OBJECT: &str = "W0001";
    /// Module re-registered from a different document.
    pub const DUPLICATE_MODULE: &str = "W0002";
}
