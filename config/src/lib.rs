//! # Config Crate
//!
//! Centralized configuration constants for the park geometry pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{COORDS_TO_UNITS, DEFAULT_SMOOTHING_RADIUS};
//!
//! // One tile edge is 32 engine coordinates
//! let tile_edge = 32.0 * COORDS_TO_UNITS;
//! assert_eq!(tile_edge, 1.0);
//!
//! // Position smoothing averages over 2 * radius + 1 nodes
//! assert_eq!(2 * DEFAULT_SMOOTHING_RADIUS + 1, 7);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Engine Compatible**: Scales and encodings match the simulation engine
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
