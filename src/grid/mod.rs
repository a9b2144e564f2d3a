//! Survey grid construction from declarative configuration
//!
//! This module contains grid-related functionality including:
//! - Configuration records and validation
//! - Cell tiling, rotation, and numbering
//! - The per-run coordinate registry and corner stitching

/// Cell geometry with named corners
pub mod cell;
/// Declarative grid configuration and validation
pub mod config;
/// Output records handed to the emitter
pub mod feature;
/// Cell tiling, classification, and run orchestration
pub mod generator;
/// Serpentine numbering policy
pub mod numbering;
/// Per-run registry of cells referenced by stitching rules
pub mod registry;
/// Corner-level adjacency stitching
pub mod stitch;

pub use config::GridConfig;
pub use generator::{SurveyOutput, generate};
