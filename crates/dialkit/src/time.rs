use chrono::{DateTime, FixedOffset, Local, Timelike};

/// Wall-clock reading taken at one instant. A new one is produced on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSnapshot {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub timestamp: DateTime<FixedOffset>,
}

impl TimeSnapshot {
    pub fn from_datetime(timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            hour: timestamp.hour(),
            minute: timestamp.minute(),
            second: timestamp.second(),
            timestamp,
        }
    }
}

/// Source of time snapshots.
pub trait TimeSampler: Send + 'static {
    fn sample(&self) -> TimeSnapshot;
}

/// Samples the host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSampler for LocalClock {
    fn sample(&self) -> TimeSnapshot {
        TimeSnapshot::from_datetime(Local::now().fixed_offset())
    }
}

#[cfg(test)]
pub(crate) fn snapshot_at(hour: u32, minute: u32, second: u32) -> TimeSnapshot {
    use chrono::TimeZone;

    let offset = FixedOffset::east_opt(3 * 3600).unwrap();
    TimeSnapshot::from_datetime(
        offset
            .with_ymd_and_hms(2026, 10, 19, hour, minute, second)
            .unwrap(),
    )
}
