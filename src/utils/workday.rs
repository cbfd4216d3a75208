//! Resolves which calendar day a check-in belongs to.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

/// Calendar used to map instants onto workdays.
///
/// Workdays are computed in a fixed UTC offset so that the result does not
/// depend on the host timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkdayCalendar {
    offset: FixedOffset,
}

impl WorkdayCalendar {
    /// Builds a calendar from an offset in minutes east of UTC.
    ///
    /// Returns `None` if the offset is outside ±24h.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(|offset| Self { offset })
    }

    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    /// Workday that contains the given instant.
    pub fn workday_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }

    /// Workday that contains the current instant.
    pub fn today(&self) -> NaiveDate {
        self.workday_of(Utc::now())
    }
}

impl Default for WorkdayCalendar {
    fn default() -> Self {
        Self::utc()
    }
}
