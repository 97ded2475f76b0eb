//! Core data models for the market scout.

mod competition;
mod entries;
mod ids;
mod profile;
mod result;
mod role;

pub use competition::*;
pub use entries::*;
pub use ids::*;
pub use profile::*;
pub use result::*;
pub use role::*;
