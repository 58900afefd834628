//! Void crossing: relocates players who fall out of a dimension's playable
//! vertical range into the adjoining dimension.
//!
//! # Invariants
//! - O(1) work per player per tick; the whole evaluation runs synchronously
//!   inside the host's start-of-tick callback.
//! - Every failure path is a silent no-op. Nothing here may abort the host's
//!   tick loop.
//! - At most one crossing per cooldown window across all players.

mod cooldown;
mod evaluate;
mod resolver;
mod rules;

pub use cooldown::CooldownGate;
pub use evaluate::{Outcome, Skip, evaluate};
pub use rules::{
    COOLDOWN_TICKS, Destination, END_ARRIVAL_Y, NETHER_ARRIVAL_Y, NETHER_SCALE,
    OVERWORLD_FLOOR_Y, RULES, Rule, Trigger, matching,
};

use voidfall_host::{Host, Player};

/// The plugin: one shared cooldown gate plus the per-tick driver.
pub struct VoidCrossing {
    gate: CooldownGate,
}

impl VoidCrossing {
    /// Build with the standard one-second cooldown and announce startup.
    pub fn new() -> Self {
        Self::with_cooldown(COOLDOWN_TICKS)
    }

    /// Build with a custom cooldown window, in ticks.
    pub fn with_cooldown(window: u64) -> Self {
        tracing::info!(cooldown_ticks = window, "void crossing handler ready");
        Self {
            gate: CooldownGate::new(window),
        }
    }

    /// Body of the host's start-of-tick callback: evaluate every connected
    /// player in order.
    pub fn on_server_tick<'a, H: Host, P: Player + 'a>(
        &mut self,
        host: &mut H,
        players: impl IntoIterator<Item = &'a mut P>,
    ) {
        for player in players {
            if let Outcome::Relocated {
                destination,
                position,
            } = evaluate(&mut self.gate, host, player)
            {
                tracing::debug!(
                    ?destination,
                    x = position.x,
                    y = position.y,
                    z = position.z,
                    "crossed void boundary"
                );
            }
        }
    }
}

impl Default for VoidCrossing {
    fn default() -> Self {
        Self::new()
    }
}
