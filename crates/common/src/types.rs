use serde::{Deserialize, Serialize};

/// Identifier for one of the three standard dimensions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Dimension {
    Overworld,
    Nether,
    End,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Overworld, Dimension::Nether, Dimension::End];
}

/// Integer block coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Floor a floating position onto the block grid, the way the host maps
    /// entity positions to blocks.
    pub fn of_floored(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: x.floor() as i32,
            y: y.floor() as i32,
            z: z.floor() as i32,
        }
    }

    /// The position one block above this one.
    pub const fn up(self) -> Self {
        Self {
            y: self.y + 1,
            ..self
        }
    }
}

/// Facing (yaw/pitch), preserved across a relocation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Look {
    pub yaw: f32,
    pub pitch: f32,
}

impl Look {
    pub const fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }
}

/// Block kinds the plugin distinguishes.
///
/// Only `Air` and `Bedrock` carry crossing semantics (ceiling clearance);
/// the rest let an in-memory host hold recognizable terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Block {
    Air,
    Bedrock,
    Stone,
    Netherrack,
    EndStone,
}

/// Axis-aligned horizontal limit of one dimension's playable area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBorder {
    pub west: f64,
    pub east: f64,
    pub north: f64,
    pub south: f64,
}

impl WorldBorder {
    /// A border extending `radius` blocks from the origin on both horizontal
    /// axes.
    pub const fn centered(radius: f64) -> Self {
        Self {
            west: -radius,
            east: radius,
            north: -radius,
            south: radius,
        }
    }

    pub fn contains(&self, x: f64, z: f64) -> bool {
        x >= self.west && x <= self.east && z >= self.north && z <= self.south
    }

    /// Clamp a horizontal position into the border, inset by one block per
    /// axis so the result never sits exactly on a bound.
    pub fn clamp_inset(&self, x: f64, z: f64) -> (f64, f64) {
        (
            x.clamp(self.west + 1.0, self.east - 1.0),
            z.clamp(self.north + 1.0, self.south - 1.0),
        )
    }
}
