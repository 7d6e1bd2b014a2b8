use std::time::{Duration, Instant};

/// Fixed page-jump transition length.
const PAGE_JUMP_DURATION: Duration = Duration::from_millis(200);

/// One sample produced by [`Animator::tick`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tick {
    /// Interpolated fractional position for this frame.
    pub position: f32,
    /// True on the settling tick; the driver is idle afterwards.
    pub finished: bool,
}

#[derive(Debug, Copy, Clone)]
enum Phase {
    Idle,
    Running {
        start: f32,
        target: f32,
        started_at: Instant,
    },
}

/// Linear page-jump driver.
///
/// A small state machine (`Idle` → `Running` → `Idle`) that ramps a
/// fractional position from its rounded starting point to an integer target
/// over the fixed duration. Progress is measured wall-clock time, never tick
/// counts, and elapsed time is clamped to the duration so the driver settles
/// even after dropped frames.
#[derive(Debug)]
pub struct Animator {
    phase: Phase,
    /// Most recently requested target. Persists after settling, so
    /// re-requesting it stays a no-op until a different target intervenes.
    last_target: f32,
}

impl Animator {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            last_target: 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Starts (or supersedes) a jump toward `target`.
    ///
    /// Returns `false` without touching any state when `target` is already
    /// the pending one. A different target restarts the ramp from
    /// `current.round()` — the rounded in-flight position, not the original
    /// departure page.
    pub fn request(&mut self, current: f32, target: f32, now: Instant) -> bool {
        if target == self.last_target {
            return false;
        }

        let start = current.round();
        log::debug!("page jump {start} -> {target}");

        self.last_target = target;
        self.phase = Phase::Running {
            start,
            target,
            started_at: now,
        };

        true
    }

    /// Advances the animation to `now`. `None` while idle.
    ///
    /// The settling tick reports the exact target position and flips the
    /// driver back to `Idle`; ticks after that produce nothing.
    pub fn tick(&mut self, now: Instant) -> Option<Tick> {
        let Phase::Running {
            start,
            target,
            started_at,
        } = self.phase
        else {
            return None;
        };

        let mut elapsed = now.saturating_duration_since(started_at);
        let finished = elapsed >= PAGE_JUMP_DURATION;

        if finished {
            elapsed = PAGE_JUMP_DURATION;
            self.phase = Phase::Idle;
            log::trace!("page jump settled at {target}");
        }

        let progress = elapsed.as_secs_f32() / PAGE_JUMP_DURATION.as_secs_f32();

        Some(Tick {
            position: start + progress * (target - start),
            finished,
        })
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn at(t0: Instant, millis: u64) -> Instant {
        t0 + Duration::from_millis(millis)
    }

    // ── interpolation ─────────────────────────────────────────────────────

    #[test]
    fn ramps_linearly_and_settles_exactly_on_target() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        assert!(animator.request(0.0, 3.0, t0));

        let halfway = animator.tick(at(t0, 100)).unwrap();
        assert_abs_diff_eq!(halfway.position, 1.5, epsilon = 1e-4);
        assert!(!halfway.finished);

        let done = animator.tick(at(t0, 200)).unwrap();
        assert_eq!(done.position, 3.0);
        assert!(done.finished);
        assert!(!animator.is_running());
    }

    #[test]
    fn clamps_late_frames_to_the_target() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        animator.request(0.0, 2.0, t0);

        // Frame arrives long after the nominal duration.
        let done = animator.tick(at(t0, 5_000)).unwrap();
        assert_eq!(done.position, 2.0);
        assert!(done.finished);
    }

    #[test]
    fn ticks_after_settling_produce_nothing() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        animator.request(0.0, 1.0, t0);

        assert!(animator.tick(at(t0, 200)).unwrap().finished);
        assert_eq!(animator.tick(at(t0, 300)), None);
        assert_eq!(animator.tick(at(t0, 400)), None);
    }

    #[test]
    fn tick_before_start_stays_at_the_start_position() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        animator.request(4.0, 1.0, at(t0, 100));

        // A stale timestamp saturates to zero elapsed.
        let tick = animator.tick(t0).unwrap();
        assert_eq!(tick.position, 4.0);
        assert!(!tick.finished);
    }

    // ── request semantics ─────────────────────────────────────────────────

    #[test]
    fn superseding_restarts_from_the_rounded_inflight_position() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        animator.request(0.0, 2.0, t0);

        // Halfway through, position is 1.0; a new target restarts there.
        let inflight = animator.tick(at(t0, 100)).unwrap();
        assert_abs_diff_eq!(inflight.position, 1.0, epsilon = 1e-4);

        assert!(animator.request(inflight.position, 5.0, at(t0, 100)));

        // New ramp: 1 -> 5 over the full duration, measured from supersede.
        let halfway = animator.tick(at(t0, 200)).unwrap();
        assert_abs_diff_eq!(halfway.position, 3.0, epsilon = 1e-4);
    }

    #[test]
    fn rerequesting_the_pending_target_does_not_reset_the_clock() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        assert!(animator.request(0.0, 3.0, t0));

        // Same target again, later: refused, original start time stands.
        assert!(!animator.request(0.5, 3.0, at(t0, 100)));

        let tick = animator.tick(at(t0, 100)).unwrap();
        assert_abs_diff_eq!(tick.position, 1.5, epsilon = 1e-4);
    }

    #[test]
    fn rerequesting_the_settled_target_is_still_a_noop() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        animator.request(0.0, 2.0, t0);
        animator.tick(at(t0, 200));

        assert!(!animator.request(2.0, 2.0, at(t0, 300)));
        assert!(!animator.is_running());
    }

    #[test]
    fn initial_target_is_page_zero() {
        // A fresh driver treats page 0 as already requested.
        let t0 = Instant::now();
        let mut animator = Animator::new();
        assert!(!animator.request(0.0, 0.0, t0));
        assert!(!animator.is_running());
    }

    #[test]
    fn request_rounds_the_start_position() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        animator.request(1.6, 4.0, t0);

        let start = animator.tick(t0).unwrap();
        assert_eq!(start.position, 2.0);
    }
}
