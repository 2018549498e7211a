//! Timezone-aware timestamps for transaction records.
//!
//! A date string is valid iff it is an ISO-8601 calendar date-time
//! (`YYYY-MM-DDThh:mm...`) with an explicit UTC offset. Local times without
//! an offset are ambiguous and rejected, as are week and ordinal dates. The
//! parsed instant keeps the input's own offset and millisecond precision.
//! Serialization is canonical: milliseconds are always written, and a zero
//! offset is written as `Z` whether the input used `Z` or `+00:00`.

use serde_json::Value;
use time::format_description::well_known::Iso8601;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::error::ModelError;

/// Whether `input` is a string holding a parseable, offset-bearing timestamp.
pub fn is_valid_date_time_string(input: &Value) -> bool {
    input.as_str().is_some_and(|s| parse_date_time(s).is_ok())
}

/// Parse an ISO-8601 calendar timestamp, preserving its offset.
pub fn parse_date_time(input: &str) -> Result<OffsetDateTime, ModelError> {
    let invalid = || ModelError::InvalidDate {
        value: input.to_string(),
    };
    if !is_calendar_form(input) {
        return Err(invalid());
    }
    OffsetDateTime::parse(input, &Iso8601::DEFAULT)
        .map(truncate_to_millis)
        .map_err(|_| invalid())
}

/// `YYYY-MM-DDT` prefix of the extended calendar form.
fn is_calendar_form(input: &str) -> bool {
    let b = input.as_bytes();
    b.len() > 10
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[5..7].iter().all(u8::is_ascii_digit)
        && b[7] == b'-'
        && b[8..10].iter().all(u8::is_ascii_digit)
        && b[10] == b'T'
}

/// Format as `YYYY-MM-DDTHH:MM:SS.mmm±HH:MM`, or with `Z` for UTC.
pub fn format_date_time(value: OffsetDateTime) -> String {
    let formatted = if value.offset().is_utc() {
        value.format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        ))
    } else {
        value.format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3][offset_hour sign:mandatory]:[offset_minute]"
        ))
    };
    formatted.unwrap_or_else(|_| value.to_string())
}

/// The current instant in UTC, at millisecond precision.
pub fn now() -> OffsetDateTime {
    truncate_to_millis(OffsetDateTime::now_utc())
}

/// Drop sub-millisecond precision; serialized timestamps carry only milliseconds.
pub fn truncate_to_millis(value: OffsetDateTime) -> OffsetDateTime {
    let nanos = u32::from(value.millisecond()) * 1_000_000;
    value.replace_nanosecond(nanos).unwrap_or(value)
}
