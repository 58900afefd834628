use crate::rules::COOLDOWN_TICKS;

/// Shared tick gate: at most one crossing evaluation per window.
///
/// Global across players, not per-player. When two players trigger in the
/// same window, the first is served and the rest wait for the next window;
/// this trades fairness under simultaneous triggers for O(1) per-tick cost.
///
/// `last` is monotonically non-decreasing for the life of the gate: a `now`
/// behind `last` (dimension clocks can disagree) fails the gate without
/// touching it.
#[derive(Debug, Clone)]
pub struct CooldownGate {
    window: u64,
    last: u64,
}

impl CooldownGate {
    pub fn new(window: u64) -> Self {
        Self { window, last: 0 }
    }

    /// Pass when a full window has elapsed since the last pass. Passing
    /// spends the gate by moving `last` forward to `now`.
    pub fn try_pass(&mut self, now: u64) -> bool {
        if now.saturating_sub(self.last) < self.window {
            return false;
        }
        self.last = now;
        true
    }

    pub fn window(&self) -> u64 {
        self.window
    }

    /// Tick of the most recent pass (0 before the first).
    pub fn last_pass(&self) -> u64 {
        self.last
    }
}

impl Default for CooldownGate {
    fn default() -> Self {
        Self::new(COOLDOWN_TICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_until_first_window_elapses() {
        let mut gate = CooldownGate::new(20);
        assert!(!gate.try_pass(0));
        assert!(!gate.try_pass(19));
        assert!(gate.try_pass(20));
    }

    #[test]
    fn passing_spends_the_window() {
        let mut gate = CooldownGate::new(20);
        assert!(gate.try_pass(100));
        assert!(!gate.try_pass(100));
        assert!(!gate.try_pass(119));
        assert!(gate.try_pass(120));
    }

    #[test]
    fn backwards_clock_fails_without_rewinding() {
        let mut gate = CooldownGate::new(20);
        assert!(gate.try_pass(100));
        assert!(!gate.try_pass(50));
        assert_eq!(gate.last_pass(), 100);
    }

    #[test]
    fn default_gate_uses_the_standard_window() {
        let gate = CooldownGate::default();
        assert_eq!(gate.window(), COOLDOWN_TICKS);
        assert_eq!(gate.last_pass(), 0);
    }

    #[test]
    fn zero_window_always_passes() {
        let mut gate = CooldownGate::new(0);
        assert!(gate.try_pass(0));
        assert!(gate.try_pass(0));
    }
}
