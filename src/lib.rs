//! # Market Scout
//!
//! A guided-form market value calculator for competitive Free Fire players.
//!
//! ## Architecture
//!
//! - **models**: player profile, competitions and valuation result types
//! - **calculate**: the pure scoring engine
//! - **wizard**: guided-form state machine and interactive driver
//! - **report**: text rendering of valuation results
//! - **storage**: profile and report file I/O
//! - **config**: configuration loading and validation

pub mod calculate;
pub mod config;
pub mod models;
pub mod report;
pub mod storage;
pub mod wizard;

pub use models::*;
