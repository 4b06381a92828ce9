// Tallgrass Schema - Shared type definitions
// This crate contains the core enums and static data tables that are shared
// between the main tallgrass crate and its binaries.

// Re-export the main types
pub use creature_types::*;
pub use item_data::*;
pub use species_data::*;

pub mod creature_types;
pub mod item_data;
pub mod species_data;
