//! Conversions between booking dates and `<input type="date">` values.

use jiff::{Zoned, civil};

/// Today's date in the browser's time zone.
pub fn today() -> civil::Date {
    Zoned::now().date()
}

/// Parse the value of a date input. Inputs report `""` when cleared, and
/// a chosen day is booked from midnight.
pub fn parse_date_input(value: &str) -> Option<civil::DateTime> {
    value
        .parse::<civil::Date>()
        .ok()
        .map(|date| date.to_datetime(civil::Time::midnight()))
}

/// The `value` attribute for a date input showing `datetime`.
pub fn date_input_value(datetime: Option<civil::DateTime>) -> String {
    datetime
        .map(|datetime| datetime.date().to_string())
        .unwrap_or_default()
}
