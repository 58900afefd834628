//! Shared types for the voidfall plugin: dimensions, block coordinates,
//! facing, and world borders.
//!
//! # Invariants
//! - Everything here is a plain value type; no handle in this crate borrows
//!   from the host.

pub mod types;

pub use types::{Block, BlockPos, Dimension, Look, WorldBorder};
