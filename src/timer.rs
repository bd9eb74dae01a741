use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::clock::Clock;
use crate::display::{DisplaySurface, Slot};
use crate::scheduler::{Scheduler, TaskHandle};
use crate::solve_time::Time;

/// Result of flipping the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    Stopped(Time),
}

impl Transition {
    /// The finalized time, present only when the timer stopped
    pub fn finished(&self) -> Option<Time> {
        match self {
            Transition::Started => None,
            Transition::Stopped(t) => Some(*t),
        }
    }
}

// The start instant and the refresh task only exist while running
enum Phase<H> {
    Idle,
    Running { started_at: Duration, refresh: H },
}

/// Two-state stopwatch. Elapsed time is always `now - started_at`; refresh
/// ticks only trigger a resample, they never accumulate.
pub struct Timer<C: Clock, S: Scheduler> {
    clock: C,
    scheduler: S,
    refresh_every: Duration,
    phase: Phase<S::Handle>,
    last_elapsed: Option<Time>,
}

impl<C: Clock, S: Scheduler> Timer<C, S> {
    pub fn new(clock: C, scheduler: S, refresh_every: Duration) -> Self {
        Self {
            clock,
            scheduler,
            refresh_every,
            phase: Phase::Idle,
            last_elapsed: None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// The last finalized time, if the timer has stopped at least once
    pub fn last_elapsed(&self) -> Option<Time> {
        self.last_elapsed
    }

    /// Current elapsed time while running
    pub fn elapsed(&self) -> Option<Time> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Running { started_at, .. } => {
                Some(Time::from(self.clock.now().saturating_sub(*started_at)))
            }
        }
    }

    pub fn toggle(&mut self, display: &mut impl DisplaySurface) -> Transition {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => {
                let started_at = self.clock.now();
                let refresh = self.scheduler.repeat(self.refresh_every);
                self.phase = Phase::Running {
                    started_at,
                    refresh,
                };
                display.set_text(Slot::Timer, &Time::ZERO.format());
                debug!(every_ms = self.refresh_every.as_millis() as u64, "timer started");
                Transition::Started
            }
            Phase::Running {
                started_at,
                refresh,
            } => {
                // sample first: task shutdown is not part of the solve
                let time = Time::from(self.clock.now().saturating_sub(started_at));
                refresh.cancel();
                self.last_elapsed = Some(time);
                display.set_text(Slot::Timer, &time.format());
                debug!(ms = time.milliseconds(), "timer stopped");
                Transition::Stopped(time)
            }
        }
    }

    /// Resample and push the running time. No-op when idle, which covers a
    /// refresh that was already queued when the timer stopped.
    pub fn refresh(&self, display: &mut impl DisplaySurface) {
        if let Some(time) = self.elapsed() {
            display.set_text(Slot::Timer, &time.format());
        }
    }
}

impl<C: Clock, S: Scheduler> fmt::Debug for Timer<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("running", &self.is_running())
            .field("refresh_every", &self.refresh_every)
            .field("last_elapsed", &self.last_elapsed)
            .finish()
    }
}
