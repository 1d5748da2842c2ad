use time::OffsetDateTime;

use crate::FlowError;

/// Entries shorter than this are rejected rather than silently truncated.
pub const MIN_ENTRY_SECONDS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerPhase {
    #[default]
    Idle,
    Running,
    Paused,
}

/// Elapsed-time tracker for the active work session.
///
/// Elapsed time is always recomputed from the wall clock
/// (`now - start_epoch`), never accumulated by incrementing a counter per
/// tick, so missed sampling ticks self-correct. Starting records
/// `start_epoch = now - elapsed_seconds`, which makes resuming after a
/// pause continue the count instead of restarting it.
///
/// Each operation has an `_at` variant taking an explicit `now`; the plain
/// variants sample `OffsetDateTime::now_utc()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerSession {
    phase: TimerPhase,
    elapsed_seconds: u64,
    start_epoch: Option<OffsetDateTime>,
}

impl TimerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Frozen value while Idle/Paused, last sampled value while Running.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn start(&mut self) {
        self.start_at(OffsetDateTime::now_utc());
    }

    pub fn start_at(&mut self, now: OffsetDateTime) {
        if self.phase == TimerPhase::Running {
            return;
        }
        self.start_epoch = Some(now - time::Duration::seconds(self.elapsed_seconds as i64));
        self.phase = TimerPhase::Running;
    }

    pub fn sample(&mut self) -> u64 {
        self.sample_at(OffsetDateTime::now_utc())
    }

    /// Recompute elapsed time from the wall clock. No-op unless Running.
    pub fn sample_at(&mut self, now: OffsetDateTime) -> u64 {
        if self.phase == TimerPhase::Running {
            if let Some(start) = self.start_epoch {
                self.elapsed_seconds = (now - start).whole_seconds().max(0) as u64;
            }
        }
        self.elapsed_seconds
    }

    pub fn pause(&mut self) {
        self.pause_at(OffsetDateTime::now_utc());
    }

    /// Freeze the elapsed count. No-op unless Running.
    pub fn pause_at(&mut self, now: OffsetDateTime) {
        if self.phase != TimerPhase::Running {
            return;
        }
        self.sample_at(now);
        self.phase = TimerPhase::Paused;
        self.start_epoch = None;
    }

    pub fn stop(&mut self) -> Result<u64, FlowError> {
        self.stop_at(OffsetDateTime::now_utc())
    }

    /// Finish the session and return the final elapsed seconds, resetting
    /// to Idle. Rejects sub-minute sessions with state unchanged.
    pub fn stop_at(&mut self, now: OffsetDateTime) -> Result<u64, FlowError> {
        let elapsed = self.sample_at(now);
        if elapsed < MIN_ENTRY_SECONDS {
            return Err(FlowError::validation("Time entry too short (< 1 minute)"));
        }
        self.phase = TimerPhase::Idle;
        self.elapsed_seconds = 0;
        self.start_epoch = None;
        Ok(elapsed)
    }

    /// Discard the session entirely (no entry, no validation).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn at(seconds: i64) -> OffsetDateTime {
        datetime!(2024-03-01 09:00 UTC) + time::Duration::seconds(seconds)
    }

    #[test]
    fn elapsed_is_recomputed_from_wall_clock() {
        let mut timer = TimerSession::new();
        timer.start_at(at(0));
        // Simulate a throttled tick: nothing sampled for 90 seconds.
        assert_eq!(timer.sample_at(at(90)), 90);
        assert_eq!(timer.elapsed_seconds(), 90);
    }

    #[test]
    fn pause_freezes_and_resume_continues() {
        let mut timer = TimerSession::new();
        timer.start_at(at(0));
        timer.pause_at(at(30));
        assert_eq!(timer.phase(), TimerPhase::Paused);
        assert_eq!(timer.elapsed_seconds(), 30);

        // Five minutes of wall clock pass while paused; the count is frozen.
        timer.start_at(at(330));
        assert_eq!(timer.sample_at(at(360)), 60);
    }

    #[test]
    fn repeated_pause_resume_preserves_total() {
        let mut timer = TimerSession::new();
        let mut clock = 0;
        // Ten cycles of 20s running / 100s paused.
        for _ in 0..10 {
            timer.start_at(at(clock));
            clock += 20;
            timer.pause_at(at(clock));
            clock += 100;
        }
        timer.start_at(at(clock));
        clock += 40;
        let total = timer.stop_at(at(clock)).expect("long enough to stop");
        assert_eq!(total, 10 * 20 + 40);
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.elapsed_seconds(), 0);
    }

    #[test]
    fn stop_rejects_sub_minute_sessions() {
        let mut timer = TimerSession::new();
        timer.start_at(at(0));
        let err = timer.stop_at(at(59)).unwrap_err();
        assert!(matches!(err, FlowError::Validation(_)));
        // State unchanged: still running, still counting.
        assert!(timer.is_running());
        assert_eq!(timer.sample_at(at(60)), 60);
        assert_eq!(timer.stop_at(at(60)), Ok(60));
    }

    #[test]
    fn stop_resets_to_a_reenterable_idle() {
        let mut timer = TimerSession::new();
        timer.start_at(at(0));
        timer.stop_at(at(90)).unwrap();
        // Post-stop is the same state as Idle; the machine restarts from 0.
        timer.start_at(at(100));
        assert_eq!(timer.sample_at(at(175)), 75);
    }

    #[test]
    fn sample_while_idle_or_paused_is_a_noop() {
        let mut timer = TimerSession::new();
        assert_eq!(timer.sample_at(at(500)), 0);
        timer.start_at(at(0));
        timer.pause_at(at(10));
        assert_eq!(timer.sample_at(at(999)), 10);
    }

    #[test]
    fn start_while_running_does_not_restart_the_count() {
        let mut timer = TimerSession::new();
        timer.start_at(at(0));
        timer.sample_at(at(40));
        timer.start_at(at(40));
        assert_eq!(timer.sample_at(at(50)), 50);
    }
}
