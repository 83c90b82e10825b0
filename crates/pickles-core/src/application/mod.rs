//! Application layer: the configuration store.
//!
//! - **`configuration`** – Accumulates settings from property assignment and
//!   the argument overlay, filters test-result files through the file-system
//!   seam, and drives the feature switch.  The rendering pipeline reads the
//!   result through the [`DocumentationSettings`](configuration::DocumentationSettings)
//!   trait.

pub mod configuration;
