use itertools::{Itertools, MinMaxResult};

use crate::display::{DisplaySurface, Slot};
use crate::solve_time::Time;
use crate::util::{mean, median};

/// Aggregate statistics over every solve in a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub best: Time,
    pub worst: Time,
    /// Arithmetic mean in milliseconds, fractional
    pub mean_ms: f64,
    /// Median in milliseconds; fractional when the two central values differ by an odd amount
    pub median_ms: f64,
}

impl Summary {
    /// Returns None for an empty slice
    pub fn compute(times: &[Time]) -> Option<Self> {
        let (best, worst) = match times.iter().copied().minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(t) => (t, t),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };

        let values = times
            .iter()
            .map(|t| t.milliseconds() as f64)
            .collect::<Vec<f64>>();

        Some(Self {
            best,
            worst,
            mean_ms: mean(&values)?,
            median_ms: median(&values)?,
        })
    }

    /// Mean as a displayable time, truncated to whole milliseconds
    pub fn mean(&self) -> Time {
        Time::from_millis(self.mean_ms as u64)
    }

    /// Median as a displayable time, truncated to whole milliseconds
    pub fn median(&self) -> Time {
        Time::from_millis(self.median_ms as u64)
    }

    pub fn value(&self, slot: Slot) -> Option<Time> {
        match slot {
            Slot::Best => Some(self.best),
            Slot::Worst => Some(self.worst),
            Slot::Mean => Some(self.mean()),
            Slot::Median => Some(self.median()),
            Slot::Timer | Slot::Scramble => None,
        }
    }

    /// Write the four formatted values to their slots
    pub fn publish(&self, display: &mut impl DisplaySurface) {
        for slot in Slot::STATS {
            if let Some(t) = self.value(slot) {
                display.set_text(slot, &t.format());
            }
        }
    }
}
