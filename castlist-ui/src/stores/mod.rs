//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing. The web
//! crate owns the stores and mutates them; views only read.

pub mod gallery;

pub use gallery::*;
