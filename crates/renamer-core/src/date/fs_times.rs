use chrono::{DateTime, Local, NaiveDateTime, Timelike};
use std::fs::Metadata;
use std::time::SystemTime;

/// Filesystem timestamps of one file, each independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTimes {
    pub created: Option<NaiveDateTime>,
    pub modified: Option<NaiveDateTime>,
}

impl FileTimes {
    /// Collect creation/modification times from a stat result.
    /// A failed stat, or a platform without birth time, leaves the field empty.
    pub fn from_metadata(meta: Option<&Metadata>) -> Self {
        let Some(meta) = meta else {
            return Self::default();
        };
        Self {
            created: meta.created().ok().and_then(to_local_naive),
            modified: meta.modified().ok().and_then(to_local_naive),
        }
    }
}

/// Convert to local wall-clock time, truncated to whole seconds.
fn to_local_naive(time: SystemTime) -> Option<NaiveDateTime> {
    let local: DateTime<Local> = time.into();
    local.naive_local().with_nanosecond(0)
}
