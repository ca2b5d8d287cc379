//! Completion stamp formats.

use chrono::{DateTime, FixedOffset, Utc};

/// Text layout of a completion stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampFormat {
    /// `dd/mm/yyyy`.
    Date,
    /// `dd/mm/yyyy, hh:mm:ss`.
    DateTime,
    /// `dd/mm/yyyy hh:mm:ss`, used by the service sheet.
    CompactDateTime,
}

impl StampFormat {
    const fn pattern(self) -> &'static str {
        match self {
            Self::Date => "%d/%m/%Y",
            Self::DateTime => "%d/%m/%Y, %H:%M:%S",
            Self::CompactDateTime => "%d/%m/%Y %H:%M:%S",
        }
    }

    /// Renders `instant` in the local time of `offset`.
    #[must_use]
    pub fn render(self, instant: DateTime<Utc>, offset: FixedOffset) -> String {
        instant
            .with_timezone(&offset)
            .format(self.pattern())
            .to_string()
    }
}
