//! # Reference resolution
//!
//! Resolves `role:target` references against the symbol registry. All
//! resolution logic lives here, keeping [`SymbolRegistry`] a pure data
//! structure. Resolution never fails the build: an unresolvable reference
//! yields `None` and the host renders the original text unlinked.
//!
//! [`SymbolRegistry`]: crate::registry::SymbolRegistry

mod link;
mod xref;

pub use link::process_link;
pub use xref::{ResolvedRef, Resolver};
