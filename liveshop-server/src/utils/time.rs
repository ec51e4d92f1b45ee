//! Record timestamp helpers
//!
//! Every stored document carries both a human-readable date string and a
//! numeric epoch stamp in seconds. The string form follows the long-hand
//! style the API has always emitted, e.g. `June 8, 2023, 4:05 pm UTC`.

use chrono::{DateTime, Utc};

const DATE_FORMAT: &str = "%B %-d, %Y, %-I:%M %P UTC";

/// Current time formatted for the `created` / `updated` / `dateOrdered` fields.
pub fn formatted_date() -> String {
    format_date(Utc::now())
}

/// Format an explicit instant the same way as [`formatted_date`].
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// Current epoch time in whole seconds, as stored in the `*Timestamp` fields.
pub fn timestamp() -> i64 {
    Utc::now().timestamp()
}
