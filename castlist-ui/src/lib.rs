//! castlist-ui - Display types, stores, and pure view components
//!
//! Views here never fetch or touch the document; the web crate owns the data
//! and hands it down through stores and callbacks.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
