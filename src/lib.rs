//! Rollwright - Random Tabletop Character Generator
//!
//! Core library assembling character sheets from configurable data tables
//! and persisting favorites to a flat JSON file.

pub mod config;
pub mod core;


pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
