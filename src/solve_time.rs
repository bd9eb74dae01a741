use std::fmt;
use std::time::Duration;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;

/// An immutable solve duration with millisecond resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Time(u64);

impl Time {
    pub const ZERO: Time = Time(0);

    pub fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub fn milliseconds(&self) -> u64 {
        self.0
    }

    /// Render as `S.mmm` below one minute, `MM:SS.mmm` from one minute up
    pub fn format(&self) -> String {
        let minutes = self.0 / MS_PER_MINUTE;
        let seconds = (self.0 / MS_PER_SECOND) % 60;
        let millis = self.0 - minutes * MS_PER_MINUTE - seconds * MS_PER_SECOND;

        if self.0 < MS_PER_MINUTE {
            format!("{seconds}.{millis:03}")
        } else {
            format!("{minutes:02}:{seconds:02}.{millis:03}")
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl From<Duration> for Time {
    fn from(d: Duration) -> Self {
        Time(d.as_millis() as u64)
    }
}
