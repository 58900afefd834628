use glam::DVec3;
use voidfall_common::{Block, BlockPos, Dimension};
use voidfall_host::{DimensionWorld, Host, Player};

use crate::evaluate::{Outcome, Skip};
use crate::rules::{
    Destination, END_ARRIVAL_Y, NETHER_ARRIVAL_Y, NETHER_SCALE, OVERWORLD_FLOOR_Y,
};

/// Run the transfer routine for a fired rule's destination.
///
/// Each routine aborts silently when the destination world is missing or the
/// player handle cannot be relocated; no world state changes on those paths.
pub fn transfer<H: Host, P: Player>(
    host: &mut H,
    player: &mut P,
    destination: Destination,
) -> Outcome {
    match destination {
        Destination::NetherCeiling => to_nether_ceiling(host, player),
        Destination::OverworldSurface => to_overworld_surface(host, player),
        Destination::EndCeiling => to_end_ceiling(host, player),
    }
}

/// Overworld and End falls both land under the Nether ceiling. Overworld
/// coordinates shrink by the 1:8 ratio; End coordinates pass through.
fn to_nether_ceiling<H: Host, P: Player>(host: &mut H, player: &mut P) -> Outcome {
    let Some(border) = host.world(Dimension::Nether).map(|w| w.border()) else {
        return Outcome::Skipped(Skip::WorldUnavailable);
    };

    let pos = player.position();
    let (x, z) = if player.dimension() == Dimension::Overworld {
        (pos.x / NETHER_SCALE, pos.z / NETHER_SCALE)
    } else {
        (pos.x, pos.z)
    };
    let (x, z) = border.clamp_inset(x, z);

    let target = DVec3::new(x, NETHER_ARRIVAL_Y, z);
    if !player.relocate(Dimension::Nether, target, player.look()) {
        return Outcome::Skipped(Skip::NotRelocatable);
    }

    // Arrival is two blocks under the ceiling bedrock; pop the block overhead
    // open so the player is not sealed in.
    let head = BlockPos::of_floored(x, NETHER_ARRIVAL_Y, z).up();
    if let Some(world) = host.world_mut(Dimension::Nether) {
        if world.block(head) == Block::Bedrock {
            world.set_block(head, Block::Air);
        }
    }

    Outcome::Relocated {
        destination: Dimension::Nether,
        position: target,
    }
}

/// Nether ceiling breach lands on the Overworld's highest motion-blocking
/// surface at the 8x-scaled position.
fn to_overworld_surface<H: Host, P: Player>(host: &mut H, player: &mut P) -> Outcome {
    let Some(world) = host.world(Dimension::Overworld) else {
        return Outcome::Skipped(Skip::WorldUnavailable);
    };

    let pos = player.position();
    let raw_x = pos.x * NETHER_SCALE;
    let raw_z = pos.z * NETHER_SCALE;

    let mut height = world.surface_height(raw_x as i32, raw_z as i32);
    let (x, z) = world.border().clamp_inset(raw_x, raw_z);
    // Height is a function of the column; a clamped position needs a fresh
    // sample.
    if x != raw_x || z != raw_z {
        height = world.surface_height(x as i32, z as i32);
    }
    let y = f64::from(height.max(OVERWORLD_FLOOR_Y));

    let target = DVec3::new(x, y, z);
    if !player.relocate(Dimension::Overworld, target, player.look()) {
        return Outcome::Skipped(Skip::NotRelocatable);
    }

    Outcome::Relocated {
        destination: Dimension::Overworld,
        position: target,
    }
}

/// Nether void fall lands near the End ceiling, horizontal coordinates
/// unchanged.
fn to_end_ceiling<H: Host, P: Player>(host: &mut H, player: &mut P) -> Outcome {
    let Some(border) = host.world(Dimension::End).map(|w| w.border()) else {
        return Outcome::Skipped(Skip::WorldUnavailable);
    };

    let pos = player.position();
    let (x, z) = border.clamp_inset(pos.x, pos.z);

    let target = DVec3::new(x, END_ARRIVAL_Y, z);
    if !player.relocate(Dimension::End, target, player.look()) {
        return Outcome::Skipped(Skip::NotRelocatable);
    }

    Outcome::Relocated {
        destination: Dimension::End,
        position: target,
    }
}
