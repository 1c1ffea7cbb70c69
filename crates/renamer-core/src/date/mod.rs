pub mod exif;
pub mod fs_times;

use chrono::NaiveDateTime;

pub use fs_times::FileTimes;

/// Which tier produced a resolved date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Exif,
    Created,
    Modified,
}

/// Result of date resolution: date + the tier it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateResult {
    pub date: NaiveDateTime,
    pub source: DateSource,
}

/// Pick a date using all tiers in priority order.
pub fn resolve_date(exif_date: Option<NaiveDateTime>, times: FileTimes) -> Option<DateResult> {
    // 1. Embedded capture time
    if let Some(date) = exif_date {
        return Some(DateResult { date, source: DateSource::Exif });
    }

    // 2. Filesystem creation time
    if let Some(date) = times.created {
        return Some(DateResult { date, source: DateSource::Created });
    }

    // 3. Filesystem modification time
    times.modified.map(|date| DateResult { date, source: DateSource::Modified })
}
