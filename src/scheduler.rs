use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::trace;

use crate::runtime::AppEvent;

/// Handle to a running repeating task. Cancelling consumes the handle, so a
/// task can only be cancelled once; dropping it stops the task as well.
pub trait TaskHandle {
    fn cancel(self);
}

/// Starts repeating tasks on behalf of the timer
pub trait Scheduler {
    type Handle: TaskHandle;

    fn repeat(&self, every: Duration) -> Self::Handle;
}

/// Pushes `AppEvent::Refresh` into the event queue from a background thread
#[derive(Debug, Clone)]
pub struct ChannelScheduler {
    tx: Sender<AppEvent>,
}

impl ChannelScheduler {
    pub fn new(tx: Sender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl Scheduler for ChannelScheduler {
    type Handle = ChannelTask;

    fn repeat(&self, every: Duration) -> ChannelTask {
        let (stop, stopped) = mpsc::channel::<()>();
        let tx = self.tx.clone();

        // the stop channel doubles as the interval wait, so cancel wakes it at once
        let join = thread::spawn(move || {
            while let Err(RecvTimeoutError::Timeout) = stopped.recv_timeout(every) {
                if tx.send(AppEvent::Refresh).is_err() {
                    break;
                }
            }
            trace!("refresh task exited");
        });

        ChannelTask {
            stop: Some(stop),
            join: Some(join),
        }
    }
}

#[derive(Debug)]
pub struct ChannelTask {
    stop: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl ChannelTask {
    fn shutdown(&mut self) {
        // closing the stop channel disconnects the receiver the thread waits on
        drop(self.stop.take());
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

impl TaskHandle for ChannelTask {
    fn cancel(mut self) {
        self.shutdown();
    }
}

impl Drop for ChannelTask {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[derive(Debug, Default)]
struct Counters {
    started: Cell<usize>,
    cancelled: Cell<usize>,
    last_interval: Cell<Option<Duration>>,
}

/// Bookkeeping scheduler for tests: runs nothing, counts task lifecycles
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    counters: Rc<Counters>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> usize {
        self.counters.started.get()
    }

    pub fn cancelled(&self) -> usize {
        self.counters.cancelled.get()
    }

    pub fn active(&self) -> usize {
        self.started() - self.cancelled()
    }

    pub fn last_interval(&self) -> Option<Duration> {
        self.counters.last_interval.get()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTask;

    fn repeat(&self, every: Duration) -> ManualTask {
        self.counters.started.set(self.counters.started.get() + 1);
        self.counters.last_interval.set(Some(every));
        ManualTask {
            counters: Rc::clone(&self.counters),
            live: true,
        }
    }
}

#[derive(Debug)]
pub struct ManualTask {
    counters: Rc<Counters>,
    live: bool,
}

impl ManualTask {
    fn release(&mut self) {
        if self.live {
            self.live = false;
            self.counters.cancelled.set(self.counters.cancelled.get() + 1);
        }
    }
}

impl TaskHandle for ManualTask {
    fn cancel(mut self) {
        self.release();
    }
}

impl Drop for ManualTask {
    fn drop(&mut self) {
        self.release();
    }
}
