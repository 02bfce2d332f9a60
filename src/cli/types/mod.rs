//! Type-safe wrappers and enums for FPL Nexus data.

pub mod ids;
pub mod status;

pub use ids::*;
pub use status::*;
