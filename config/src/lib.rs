//! # Config Crate
//!
//! Centralized configuration constants for the scankit geometry pipeline.
//! Buffer layout facts, wire-format sizes and streaming limits are defined
//! here so the geometry and session crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{StreamConfig, MAX_UPDATE_FREQUENCY_HZ, TRIANGLE_INDEX_COUNT};
//!
//! // Requests above the ceiling are clamped, not rejected
//! let stream = StreamConfig::clamped(120, true);
//! assert_eq!(stream.update_frequency_hz, MAX_UPDATE_FREQUENCY_HZ);
//!
//! // Triangles always carry three indices
//! let faces = 4;
//! assert_eq!(faces * TRIANGLE_INDEX_COUNT, 12);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Wire Stable**: Sizes and orders consumed by existing readers live here
//! - **No Dependencies**: Pure constants and small validated value types

pub mod constants;
