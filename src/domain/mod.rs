//! # Domain facade
//!
//! [`ElixirDomain`] is the host-facing surface: it owns the symbol
//! registry, the domain configuration, the ambient module context, and the
//! diagnostics collected during registration. The host feeds declarations
//! in (`declare`), resolves references against it (`resolve`), invalidates
//! rebuilt documents (`clear_doc`), and asks for the module index at build
//! finalization (`module_index`).

mod config;
mod core;
mod declare;
mod resolve;

pub use config::DomainConfig;
pub use core::{ElixirDomain, ObjectRecord};
pub use declare::{DeclareError, DeclareOptions, Declared};

#[cfg(test)]
mod tests;
