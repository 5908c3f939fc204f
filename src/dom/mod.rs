// ============================================================================
// DOM MODULE - Helpers for building and wiring DOM elements
// ============================================================================

pub mod element;
pub mod builder;
pub mod events;

pub use element::*;
pub use builder::*;
pub use events::*;
