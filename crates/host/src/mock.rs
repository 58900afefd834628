//! In-memory host implementations for tests and the sim harness.
//!
//! `MockWorld` is a flat world with a sparse block map; `MockPlayer` records
//! every relocation applied to it so tests can assert on the result.

use std::collections::{BTreeMap, HashMap};

use glam::DVec3;
use voidfall_common::{Block, BlockPos, Dimension, Look, WorldBorder};

use crate::{DimensionWorld, Host, Player};

/// An in-memory world: a tick clock, a border, sparse blocks over a flat
/// surface of uniform height, with per-column height overrides.
#[derive(Debug, Clone)]
pub struct MockWorld {
    time: u64,
    border: WorldBorder,
    blocks: HashMap<BlockPos, Block>,
    heights: HashMap<(i32, i32), i32>,
    flat_height: i32,
}

impl MockWorld {
    pub fn new(border: WorldBorder, flat_height: i32) -> Self {
        Self {
            time: 0,
            border,
            blocks: HashMap::new(),
            heights: HashMap::new(),
            flat_height,
        }
    }

    /// Advance this world's clock.
    pub fn advance(&mut self, ticks: u64) {
        self.time += ticks;
    }

    pub fn put_block(&mut self, pos: BlockPos, block: Block) {
        self.blocks.insert(pos, block);
    }

    /// Override the surface height of a single column.
    pub fn set_surface(&mut self, x: i32, z: i32, height: i32) {
        self.heights.insert((x, z), height);
    }
}

impl DimensionWorld for MockWorld {
    fn time(&self) -> u64 {
        self.time
    }

    fn border(&self) -> WorldBorder {
        self.border
    }

    fn block(&self, pos: BlockPos) -> Block {
        self.blocks.get(&pos).copied().unwrap_or(Block::Air)
    }

    fn set_block(&mut self, pos: BlockPos, block: Block) {
        self.blocks.insert(pos, block);
    }

    fn surface_height(&self, x: i32, z: i32) -> i32 {
        self.heights.get(&(x, z)).copied().unwrap_or(self.flat_height)
    }
}

/// A host holding up to three mock dimensions.
///
/// Uses BTreeMap for deterministic iteration order.
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    worlds: BTreeMap<Dimension, MockWorld>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_world(mut self, dimension: Dimension, world: MockWorld) -> Self {
        self.worlds.insert(dimension, world);
        self
    }

    /// All three dimensions with vanilla-ish borders and flat terrain.
    pub fn standard() -> Self {
        let border = WorldBorder::centered(29_999_984.0);
        Self::new()
            .with_world(Dimension::Overworld, MockWorld::new(border, 63))
            .with_world(Dimension::Nether, MockWorld::new(border, 32))
            .with_world(Dimension::End, MockWorld::new(border, 60))
    }

    /// Advance every dimension clock by the same amount.
    pub fn advance_all(&mut self, ticks: u64) {
        for world in self.worlds.values_mut() {
            world.advance(ticks);
        }
    }
}

impl Host for MockHost {
    type World = MockWorld;

    fn world(&self, dimension: Dimension) -> Option<&MockWorld> {
        self.worlds.get(&dimension)
    }

    fn world_mut(&mut self, dimension: Dimension) -> Option<&mut MockWorld> {
        self.worlds.get_mut(&dimension)
    }
}

/// A scripted player handle that records every relocation applied to it.
#[derive(Debug, Clone)]
pub struct MockPlayer {
    position: DVec3,
    look: Look,
    dimension: Dimension,
    alive: bool,
    creative: bool,
    remote: bool,
    relocatable: bool,
    relocations: Vec<(Dimension, DVec3, Look)>,
}

impl MockPlayer {
    /// A living, survival-mode, server-side player at the given position.
    pub fn at(dimension: Dimension, x: f64, y: f64, z: f64) -> Self {
        Self {
            position: DVec3::new(x, y, z),
            look: Look::default(),
            dimension,
            alive: true,
            creative: false,
            remote: false,
            relocatable: true,
            relocations: Vec::new(),
        }
    }

    pub fn creative(mut self) -> Self {
        self.creative = true;
        self
    }

    pub fn dead(mut self) -> Self {
        self.alive = false;
        self
    }

    /// A client-side view of the player, not the authoritative entity.
    pub fn remote(mut self) -> Self {
        self.remote = true;
        self
    }

    /// A handle that refuses relocation (not a server player entity).
    pub fn non_relocatable(mut self) -> Self {
        self.relocatable = false;
        self
    }

    pub fn with_look(mut self, look: Look) -> Self {
        self.look = look;
        self
    }

    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    /// Every relocation applied so far, in order.
    pub fn relocations(&self) -> &[(Dimension, DVec3, Look)] {
        &self.relocations
    }
}

impl Player for MockPlayer {
    fn position(&self) -> DVec3 {
        self.position
    }

    fn look(&self) -> Look {
        self.look
    }

    fn dimension(&self) -> Dimension {
        self.dimension
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn is_creative(&self) -> bool {
        self.creative
    }

    fn is_remote(&self) -> bool {
        self.remote
    }

    fn relocate(&mut self, destination: Dimension, position: DVec3, look: Look) -> bool {
        if !self.relocatable {
            return false;
        }
        self.dimension = destination;
        self.position = position;
        self.look = look;
        self.relocations.push((destination, position, look));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_world_defaults_to_air() {
        let world = MockWorld::new(WorldBorder::centered(100.0), 63);
        assert_eq!(world.block(BlockPos::new(0, 90, 0)), Block::Air);
    }

    #[test]
    fn mock_world_stores_blocks_and_heights() {
        let mut world = MockWorld::new(WorldBorder::centered(100.0), 63);
        world.put_block(BlockPos::new(1, 126, 2), Block::Bedrock);
        world.set_surface(5, 5, 80);

        assert_eq!(world.block(BlockPos::new(1, 126, 2)), Block::Bedrock);
        assert_eq!(world.surface_height(5, 5), 80);
        assert_eq!(world.surface_height(0, 0), 63);
    }

    #[test]
    fn standard_host_has_all_three_dimensions() {
        let host = MockHost::standard();
        for dimension in Dimension::ALL {
            assert!(host.world(dimension).is_some());
        }
    }

    #[test]
    fn advance_all_moves_every_clock() {
        let mut host = MockHost::standard();
        host.advance_all(25);
        assert_eq!(host.world(Dimension::Nether).unwrap().time(), 25);
        assert_eq!(host.world(Dimension::End).unwrap().time(), 25);
    }

    #[test]
    fn mock_player_records_relocations() {
        let mut player = MockPlayer::at(Dimension::Overworld, 0.0, -70.0, 0.0);
        let target = DVec3::new(0.0, 125.0, 0.0);
        assert!(player.relocate(Dimension::Nether, target, Look::default()));
        assert_eq!(player.dimension(), Dimension::Nether);
        assert_eq!(player.relocations(), &[(Dimension::Nether, target, Look::default())]);
    }

    #[test]
    fn non_relocatable_player_refuses_and_stays_put() {
        let mut player = MockPlayer::at(Dimension::Overworld, 1.0, -70.0, 2.0).non_relocatable();
        let before = player.position();
        assert!(!player.relocate(Dimension::Nether, DVec3::ZERO, Look::default()));
        assert_eq!(player.position(), before);
        assert!(player.relocations().is_empty());
    }
}
