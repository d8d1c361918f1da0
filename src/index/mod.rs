//! # Module index
//!
//! Builds the module index page content at build finalization: all
//! registered modules, sorted case-insensitively, letter-bucketed, with
//! configured common prefixes stripped, submodules grouped under their
//! parent, and a recommendation whether the index should start collapsed.
//!
//! The grouping itself is a pure function over an already-sorted list
//! ([`build_sorted`]) so it is testable without a registry.

mod builder;
mod entry;

pub use builder::{ModuleIndexBuilder, build_sorted};
pub use entry::{IndexEntry, IndexEntryKind, IndexGroup, ModuleIndex};
