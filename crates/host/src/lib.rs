//! Host-engine seam: the world and player surfaces the crossing logic
//! consumes, as traits.
//!
//! # Invariants
//! - Every method is called synchronously from the host's simulation thread;
//!   nothing here suspends, blocks, or spawns work.
//! - A missing world is `None`, never an error. Crossing is best-effort.

pub mod mock;

use glam::DVec3;
use voidfall_common::{Block, BlockPos, Dimension, Look, WorldBorder};

/// One dimension's world, as exposed by the host.
pub trait DimensionWorld {
    /// This dimension's simulation tick counter.
    fn time(&self) -> u64;

    /// Horizontal playable bounds.
    fn border(&self) -> WorldBorder;

    fn block(&self, pos: BlockPos) -> Block;

    fn set_block(&mut self, pos: BlockPos, block: Block);

    /// Height of the highest motion-blocking surface in the given column.
    fn surface_height(&self, x: i32, z: i32) -> i32;
}

/// The server handle passed into the per-tick callback.
pub trait Host {
    type World: DimensionWorld;

    fn world(&self, dimension: Dimension) -> Option<&Self::World>;

    fn world_mut(&mut self, dimension: Dimension) -> Option<&mut Self::World>;
}

/// An opaque player handle, borrowed from the host for one evaluation and
/// never stored.
pub trait Player {
    fn position(&self) -> DVec3;

    fn look(&self) -> Look;

    fn dimension(&self) -> Dimension;

    fn is_alive(&self) -> bool;

    fn is_creative(&self) -> bool;

    /// True when this handle is a client-side view rather than the
    /// server-authoritative entity.
    fn is_remote(&self) -> bool;

    /// Move the player to a position in a (possibly different) dimension,
    /// keeping the given facing. Returns false when the handle cannot be
    /// relocated server-side.
    fn relocate(&mut self, destination: Dimension, position: DVec3, look: Look) -> bool;
}
