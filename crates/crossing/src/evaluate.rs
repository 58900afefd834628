use glam::DVec3;
use voidfall_common::Dimension;
use voidfall_host::{DimensionWorld, Host, Player};

use crate::cooldown::CooldownGate;
use crate::{resolver, rules};

/// Result of one per-player evaluation.
///
/// Every non-crossing path is a silent no-op at the plugin surface; the
/// variant records why for callers and tests that care.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Relocated {
        destination: Dimension,
        position: DVec3,
    },
    Skipped(Skip),
}

/// Why an evaluation did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// Remote view, dead, or creative-mode player.
    Precondition,
    /// The player's own or the destination dimension is not loaded.
    WorldUnavailable,
    /// The shared gate has not reopened yet.
    Cooldown,
    /// The player is inside its dimension's playable vertical range.
    NoRuleMatched,
    /// The handle is not a relocatable server-side entity.
    NotRelocatable,
}

/// Evaluate one player against the crossing table.
///
/// The gate is spent before rule dispatch, so an in-range player that passes
/// it still consumes the window.
pub fn evaluate<H: Host, P: Player>(
    gate: &mut CooldownGate,
    host: &mut H,
    player: &mut P,
) -> Outcome {
    if player.is_remote() || !player.is_alive() || player.is_creative() {
        return Outcome::Skipped(Skip::Precondition);
    }

    let Some(now) = host.world(player.dimension()).map(|w| w.time()) else {
        return Outcome::Skipped(Skip::WorldUnavailable);
    };
    if !gate.try_pass(now) {
        return Outcome::Skipped(Skip::Cooldown);
    }

    match rules::matching(player.dimension(), player.position().y) {
        Some(rule) => resolver::transfer(host, player, rule.destination),
        None => Outcome::Skipped(Skip::NoRuleMatched),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voidfall_host::mock::{MockHost, MockPlayer};

    fn open_host() -> MockHost {
        // Clocks past the first cooldown window so the gate opens.
        let mut host = MockHost::standard();
        host.advance_all(100);
        host
    }

    #[test]
    fn creative_player_is_untouched() {
        let mut host = open_host();
        let mut gate = CooldownGate::default();
        let mut player = MockPlayer::at(Dimension::Overworld, 100.0, -70.0, 50.0).creative();

        let outcome = evaluate(&mut gate, &mut host, &mut player);

        assert_eq!(outcome, Outcome::Skipped(Skip::Precondition));
        assert!(player.relocations().is_empty());
        // Preconditions fail before the gate; the window is not spent.
        assert_eq!(gate.last_pass(), 0);
    }

    #[test]
    fn dead_and_remote_players_are_untouched() {
        let mut host = open_host();
        let mut gate = CooldownGate::default();

        let mut dead = MockPlayer::at(Dimension::Overworld, 0.0, -70.0, 0.0).dead();
        assert_eq!(
            evaluate(&mut gate, &mut host, &mut dead),
            Outcome::Skipped(Skip::Precondition)
        );

        let mut remote = MockPlayer::at(Dimension::Overworld, 0.0, -70.0, 0.0).remote();
        assert_eq!(
            evaluate(&mut gate, &mut host, &mut remote),
            Outcome::Skipped(Skip::Precondition)
        );
    }

    #[test]
    fn missing_own_world_is_a_silent_skip() {
        let mut host = MockHost::new();
        let mut gate = CooldownGate::default();
        let mut player = MockPlayer::at(Dimension::Overworld, 0.0, -70.0, 0.0);

        assert_eq!(
            evaluate(&mut gate, &mut host, &mut player),
            Outcome::Skipped(Skip::WorldUnavailable)
        );
    }

    #[test]
    fn at_most_one_crossing_per_window() {
        let mut host = open_host();
        let mut gate = CooldownGate::default();
        let mut first = MockPlayer::at(Dimension::Overworld, 100.0, -70.0, 50.0);
        let mut second = MockPlayer::at(Dimension::Overworld, -40.0, -70.0, 8.0);

        assert!(matches!(
            evaluate(&mut gate, &mut host, &mut first),
            Outcome::Relocated { .. }
        ));
        assert_eq!(
            evaluate(&mut gate, &mut host, &mut second),
            Outcome::Skipped(Skip::Cooldown)
        );

        // The next window serves the waiting player.
        host.advance_all(rules::COOLDOWN_TICKS);
        assert!(matches!(
            evaluate(&mut gate, &mut host, &mut second),
            Outcome::Relocated { .. }
        ));
    }

    #[test]
    fn in_range_player_spends_the_window() {
        let mut host = open_host();
        let mut gate = CooldownGate::default();
        let mut grounded = MockPlayer::at(Dimension::Overworld, 0.0, 64.0, 0.0);
        let mut falling = MockPlayer::at(Dimension::Overworld, 0.0, -70.0, 0.0);

        assert_eq!(
            evaluate(&mut gate, &mut host, &mut grounded),
            Outcome::Skipped(Skip::NoRuleMatched)
        );
        // The grounded player consumed the window; the falling one waits.
        assert_eq!(
            evaluate(&mut gate, &mut host, &mut falling),
            Outcome::Skipped(Skip::Cooldown)
        );
    }

    #[test]
    fn end_void_fall_is_left_to_native_handling() {
        let mut host = open_host();
        let mut gate = CooldownGate::default();
        let mut player = MockPlayer::at(Dimension::End, 10.0, -5.0, 10.0);

        assert_eq!(
            evaluate(&mut gate, &mut host, &mut player),
            Outcome::Skipped(Skip::NoRuleMatched)
        );
        assert!(player.relocations().is_empty());
    }
}
