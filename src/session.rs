use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::display::{DisplaySurface, Slot};
use crate::scheduler::Scheduler;
use crate::scramble::ScrambleSource;
use crate::solve_time::Time;
use crate::stats::Summary;
use crate::timer::{Timer, Transition};

/// One timed attempt and the scramble that preceded it
#[derive(Debug, Clone, PartialEq)]
pub struct SolveRecord {
    time: Time,
    scramble: String,
    recorded_at: DateTime<Local>,
}

impl SolveRecord {
    pub fn new(time: Time, scramble: impl Into<String>) -> Self {
        Self {
            time,
            scramble: scramble.into(),
            recorded_at: Local::now(),
        }
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn scramble(&self) -> &str {
        &self.scramble
    }

    pub fn recorded_at(&self) -> DateTime<Local> {
        self.recorded_at
    }
}

/// Ordered solve history plus the statistics derived from it
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    records: Vec<SolveRecord>,
    summary: Option<Summary>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a solve, recompute the summary and push it to the display
    pub fn record(&mut self, record: SolveRecord, display: &mut impl DisplaySurface) {
        let sequence = self.records.len() + 1;
        display.append_row(&[
            sequence.to_string(),
            record.time().format(),
            record.scramble().to_string(),
        ]);
        self.records.push(record);

        self.summary = Summary::compute(&self.times());
        if let Some(summary) = &self.summary {
            summary.publish(display);
            debug!(
                count = sequence,
                best_ms = summary.best.milliseconds(),
                mean_ms = summary.mean_ms,
                "session stats recomputed"
            );
        }
    }

    pub fn records(&self) -> &[SolveRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// None until the first solve is recorded
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn times(&self) -> Vec<Time> {
        self.records.iter().map(SolveRecord::time).collect()
    }
}

/// A timing session: the timer, its solve history and the scramble source.
/// Constructing one starts a session; dropping it ends it.
pub struct Session<C: Clock, S: Scheduler, G: ScrambleSource> {
    timer: Timer<C, S>,
    stats: SessionStats,
    scrambles: G,
    current_scramble: String,
    started_at: DateTime<Local>,
}

impl<C: Clock, S: Scheduler, G: ScrambleSource> Session<C, S, G> {
    pub fn new(timer: Timer<C, S>, mut scrambles: G, display: &mut impl DisplaySurface) -> Self {
        let current_scramble = scrambles.next_scramble();
        display.set_text(Slot::Scramble, &current_scramble);
        display.set_text(Slot::Timer, &Time::ZERO.format());
        info!("session started");

        Self {
            timer,
            stats: SessionStats::new(),
            scrambles,
            current_scramble,
            started_at: Local::now(),
        }
    }

    /// Flip the timer. A stop records the solve against the scramble that
    /// was showing, then draws the next scramble.
    pub fn toggle(&mut self, display: &mut impl DisplaySurface) -> Transition {
        let transition = self.timer.toggle(display);

        if let Transition::Stopped(time) = transition {
            let scramble = std::mem::replace(
                &mut self.current_scramble,
                self.scrambles.next_scramble(),
            );
            self.stats.record(SolveRecord::new(time, scramble), display);
            display.set_text(Slot::Scramble, &self.current_scramble);
            info!(
                solve = self.stats.len(),
                time = %time,
                "solve recorded"
            );
        }

        transition
    }

    pub fn refresh(&self, display: &mut impl DisplaySurface) {
        self.timer.refresh(display);
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn timer(&self) -> &Timer<C, S> {
        &self.timer
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn current_scramble(&self) -> &str {
        &self.current_scramble
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }
}
