//! pickles-cli library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! - **`settings`** – Optional TOML settings file.
//! - **`bootstrap`** – Merges command line and settings file into an
//!   [`Invocation`](bootstrap::Invocation) and applies it to a configuration.
//! - **`report`** – Renders the finished configuration as TOML or JSON.

pub mod bootstrap;
pub mod report;
pub mod settings;
