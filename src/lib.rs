//! # exref-base
//!
//! Core library for Elixir documentation domains: symbol registry,
//! cross-reference resolution, and module indexing.
//!
//! A documentation host feeds declarations (`function`, `callback`, `macro`,
//! `type`, `module`) into an [`ElixirDomain`], which maintains a build-wide
//! registry of declared names. References encountered in content are resolved
//! against that registry to a `(document, anchor)` pair, and at build
//! finalization the domain produces a letter-bucketed, collapsible module
//! index.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! domain      → host-facing facade: declare, resolve, invalidate, index
//!   ↓
//! resolver    → reference resolution against the registry
//! index       → module index construction (grouping, collapse heuristic)
//!   ↓
//! registry    → object / function-arity / module tables
//! signature   → declared-signature parsing (display vs. indexable names)
//!   ↓
//! diagnostics → build diagnostics (duplicate definitions)
//! base        → primitives: object types, reference roles, name splitting
//! ```

// ============================================================================
// MODULES (dependency order: base → registry/signature → resolver/index → domain)
// ============================================================================

/// Foundation types: object kinds, reference roles, name splitting
pub mod base;

/// Build diagnostics: severities, warning codes, duplicate reports
pub mod diagnostics;

/// Signature parsing: display names vs. indexable names
pub mod signature;

/// Symbol registry: object, function-arity, and module tables
pub mod registry;

/// Reference resolution: role-specific lookup against the registry
pub mod resolver;

/// Module index construction: grouping, prefix stripping, collapse heuristic
pub mod index;

/// Host-facing facade: declaration surface, ambient module context, lifecycle
pub mod domain;

// Re-export the types a host integration touches most often
pub use base::{ObjectType, RefRole, SearchOrder};
pub use diagnostics::{Diagnostic, Severity};
pub use domain::{DeclareError, DeclareOptions, Declared, DomainConfig, ElixirDomain};
pub use index::{IndexEntry, IndexEntryKind, IndexGroup, ModuleIndex, ModuleIndexBuilder};
pub use registry::{FunctionTarget, ModuleEntry, ObjectEntry, SymbolRegistry};
pub use resolver::{ResolvedRef, Resolver, process_link};
