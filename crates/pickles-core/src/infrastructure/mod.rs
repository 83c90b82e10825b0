//! Collaborator seams used by the configuration store.
//!
//! Each sub-module defines a small trait plus a production implementation.
//! The file-system and diagnostics seams also ship an in-memory `mock`
//! implementation that is always compiled, so integration tests in `tests/`
//! can use them too.
//!
//! **Dependency rule**: this layer may depend on `domain`, but MUST NOT import
//! anything from `application`.

pub mod diagnostics;
pub mod features;
pub mod file_system;
pub mod language;
