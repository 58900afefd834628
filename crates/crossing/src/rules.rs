use voidfall_common::Dimension;

/// Minimum ticks between crossing evaluations: one second at the 20 Hz tick
/// rate. Shared across all players.
pub const COOLDOWN_TICKS: u64 = 20;

/// Arrival height in the Nether, two blocks under the Y=127 ceiling bedrock.
pub const NETHER_ARRIVAL_Y: f64 = 125.0;

/// Lowest allowed Overworld arrival, one block above the bottom bedrock at
/// Y=-64.
pub const OVERWORLD_FLOOR_Y: i32 = -63;

/// Arrival height near the End's ceiling.
pub const END_ARRIVAL_Y: f64 = 255.0;

/// Overworld-to-Nether horizontal scale ratio.
pub const NETHER_SCALE: f64 = 8.0;

/// Vertical trigger for one crossing rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Fires when y drops below the threshold.
    Below(f64),
    /// Fires when y rises above the threshold.
    Above(f64),
}

impl Trigger {
    pub fn fires(self, y: f64) -> bool {
        match self {
            Trigger::Below(threshold) => y < threshold,
            Trigger::Above(threshold) => y > threshold,
        }
    }
}

/// Where a fired rule sends the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Under the Nether ceiling, clearing a bedrock block overhead if needed.
    NetherCeiling,
    /// Onto the Overworld's highest motion-blocking surface.
    OverworldSurface,
    /// Near the End ceiling.
    EndCeiling,
}

/// One row of the crossing decision table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub dimension: Dimension,
    pub trigger: Trigger,
    pub destination: Destination,
}

/// The crossing decision table.
///
/// Falling out of the End matches no row on purpose: the host's native
/// void-death handling applies there.
pub const RULES: [Rule; 4] = [
    Rule {
        dimension: Dimension::Overworld,
        trigger: Trigger::Below(-64.0),
        destination: Destination::NetherCeiling,
    },
    Rule {
        dimension: Dimension::Nether,
        trigger: Trigger::Above(128.0),
        destination: Destination::OverworldSurface,
    },
    Rule {
        dimension: Dimension::Nether,
        trigger: Trigger::Below(0.0),
        destination: Destination::EndCeiling,
    },
    Rule {
        dimension: Dimension::End,
        trigger: Trigger::Above(256.0),
        destination: Destination::NetherCeiling,
    },
];

/// First rule matching the player's dimension and height.
pub fn matching(dimension: Dimension, y: f64) -> Option<&'static Rule> {
    RULES
        .iter()
        .find(|rule| rule.dimension == dimension && rule.trigger.fires(y))
}
