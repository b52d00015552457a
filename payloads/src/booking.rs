//! Date-range rules for new bookings.
//!
//! All functions here are pure so the form and the backend agree on the
//! same answers. Dates are wall-clock [`civil::DateTime`] values: a booking
//! spans nights at the property, so daylight saving transitions in some
//! viewer's time zone never change the night count.

use jiff::civil;

use crate::responses::Settings;

/// Format used for both dates of a submitted booking.
pub const BOOKING_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SECONDS_PER_DAY: i64 = 86_400;

/// Outcome of validating a single booking field.
pub type ValidationResult = Result<(), ValidationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Start date is required")]
    StartRequired,
    #[error("End date is required")]
    EndRequired,
    #[error("This field is required")]
    NightsRequired,
    #[error("Start date and end date are required")]
    DatesRequired,
    #[error("End date must be after start date")]
    EndNotAfterStart,
    #[error("Minimum booking is {minimum} days")]
    BelowMinimumStay { minimum: u32 },
    #[error(
        "Number of nights must match the difference between start and end \
         dates ({expected} nights)"
    )]
    NightsMismatch { expected: u32 },
}

/// Broad category of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MissingField,
    OrderingViolation,
    PolicyViolation,
    MismatchViolation,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::StartRequired
            | Self::EndRequired
            | Self::NightsRequired
            | Self::DatesRequired => ValidationErrorKind::MissingField,
            Self::EndNotAfterStart => ValidationErrorKind::OrderingViolation,
            Self::BelowMinimumStay { .. } => {
                ValidationErrorKind::PolicyViolation
            }
            Self::NightsMismatch { .. } => {
                ValidationErrorKind::MismatchViolation
            }
        }
    }
}

/// Minimum-stay policy. Zero means any length is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StayPolicy {
    pub minimum_nights: u32,
}

impl StayPolicy {
    pub fn new(minimum_nights: u32) -> Self {
        Self { minimum_nights }
    }

    /// Missing settings, or settings without a minimum, impose no minimum.
    pub fn from_settings(settings: Option<&Settings>) -> Self {
        Self::new(
            settings
                .and_then(|settings| settings.min_booking_length)
                .unwrap_or(0),
        )
    }

    fn check(&self, nights: u32) -> ValidationResult {
        if self.minimum_nights > 0 && nights < self.minimum_nights {
            return Err(ValidationError::BelowMinimumStay {
                minimum: self.minimum_nights,
            });
        }
        Ok(())
    }
}

/// The in-progress booking. `num_nights` keeps the text as typed so that
/// non-numeric input can be reported instead of silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub start_date: Option<civil::DateTime>,
    pub end_date: Option<civil::DateTime>,
    pub num_nights: String,
}

impl BookingDraft {
    /// The night count as an integer, if the field holds one.
    pub fn nights(&self) -> Option<i64> {
        parse_nights(&self.num_nights)
    }

    pub fn validate_start(&self) -> ValidationResult {
        validate_start(self.start_date)
    }

    pub fn validate_end(&self, policy: StayPolicy) -> ValidationResult {
        validate_end(self.start_date, self.end_date, policy)
    }

    pub fn validate_num_nights(&self, policy: StayPolicy) -> ValidationResult {
        validate_num_nights(
            self.start_date,
            self.end_date,
            &self.num_nights,
            policy,
        )
    }
}

/// Nights between two datetimes: the absolute elapsed time in days, where
/// any partial day counts as a whole night.
pub fn nights_between(start: civil::DateTime, end: civil::DateTime) -> u32 {
    let elapsed = start.duration_until(end).abs();
    let secs = elapsed.as_secs();
    let mut days = secs / SECONDS_PER_DAY;
    if secs % SECONDS_PER_DAY != 0 || elapsed.subsec_nanos() != 0 {
        days += 1;
    }
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Parse the leading integer of `text`, ignoring anything after it.
///
/// `"4"`, `" 4"` and `"4.5"` all give 4. Text without leading digits gives
/// `None`.
pub fn parse_nights(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let unsigned = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);
    let digits = unsigned.len()
        - unsigned
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .len();
    if digits == 0 {
        return None;
    }
    let sign = trimmed.len() - unsigned.len();
    trimmed[..sign + digits].parse().ok()
}

pub fn format_booking_datetime(datetime: civil::DateTime) -> String {
    datetime.strftime(BOOKING_DATETIME_FORMAT).to_string()
}

/// The start date only has to be present. The "not in the past" bound is
/// applied by the date input itself.
pub fn validate_start(start: Option<civil::DateTime>) -> ValidationResult {
    match start {
        Some(_) => Ok(()),
        None => Err(ValidationError::StartRequired),
    }
}

pub fn validate_end(
    start: Option<civil::DateTime>,
    end: Option<civil::DateTime>,
    policy: StayPolicy,
) -> ValidationResult {
    let Some(end) = end else {
        return Err(ValidationError::EndRequired);
    };
    // Ordering is checked against the start date once there is one.
    let Some(start) = start else {
        return Ok(());
    };
    if end <= start {
        return Err(ValidationError::EndNotAfterStart);
    }
    policy.check(nights_between(start, end))
}

pub fn validate_num_nights(
    start: Option<civil::DateTime>,
    end: Option<civil::DateTime>,
    num_nights: &str,
    policy: StayPolicy,
) -> ValidationResult {
    if num_nights.trim().is_empty() {
        return Err(ValidationError::NightsRequired);
    }
    let (Some(start), Some(end)) = (start, end) else {
        return Err(ValidationError::DatesRequired);
    };

    let expected = nights_between(start, end);
    policy.check(expected)?;

    if parse_nights(num_nights) != Some(i64::from(expected)) {
        return Err(ValidationError::NightsMismatch { expected });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn day(y: i16, m: i8, d: i8) -> Option<civil::DateTime> {
        Some(date(y, m, d).at(0, 0, 0, 0))
    }

    #[test]
    fn test_start_is_required() {
        assert_eq!(validate_start(None), Err(ValidationError::StartRequired));
        assert_eq!(validate_start(day(2024, 1, 1)), Ok(()));
    }

    #[test]
    fn test_end_after_start_valid_without_minimum() {
        let policy = StayPolicy::default();
        let start = date(2024, 1, 1).at(0, 0, 0, 0);
        for hours in [1, 23, 24, 25, 24 * 30, 24 * 400] {
            let end = start + jiff::SignedDuration::from_hours(hours);
            assert_eq!(
                validate_end(Some(start), Some(end), policy),
                Ok(()),
                "{hours} hours"
            );
        }
    }

    #[test]
    fn test_end_not_after_start_fails_ordering() {
        let start = date(2024, 3, 10).at(12, 0, 0, 0);
        for minimum in [0, 1, 5, 100] {
            let policy = StayPolicy::new(minimum);
            for hours in [0, 1, 24, 24 * 9] {
                let end = start - jiff::SignedDuration::from_hours(hours);
                let result = validate_end(Some(start), Some(end), policy);
                assert_eq!(result, Err(ValidationError::EndNotAfterStart));
                assert_eq!(
                    result.unwrap_err().to_string(),
                    "End date must be after start date"
                );
            }
        }
    }

    #[test]
    fn test_end_required_and_lenient_without_start() {
        let policy = StayPolicy::new(3);
        assert_eq!(
            validate_end(day(2024, 1, 1), None, policy),
            Err(ValidationError::EndRequired)
        );
        assert_eq!(validate_end(None, day(2024, 1, 2), policy), Ok(()));
    }

    #[test]
    fn test_end_below_minimum_stay() {
        let result = validate_end(
            day(2024, 1, 1),
            day(2024, 1, 2),
            StayPolicy::new(5),
        );
        assert_eq!(
            result,
            Err(ValidationError::BelowMinimumStay { minimum: 5 })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "Minimum booking is 5 days"
        );

        assert_eq!(
            validate_end(day(2024, 1, 1), day(2024, 1, 6), StayPolicy::new(5)),
            Ok(())
        );
    }

    #[test]
    fn test_num_nights_matches_date_range() {
        let policy = StayPolicy::default();
        let (start, end) = (day(2024, 1, 1), day(2024, 1, 5));
        assert_eq!(validate_num_nights(start, end, "4", policy), Ok(()));

        let result = validate_num_nights(start, end, "3", policy);
        assert_eq!(
            result,
            Err(ValidationError::NightsMismatch { expected: 4 })
        );
        assert!(result.unwrap_err().to_string().contains('4'));
    }

    #[test]
    fn test_num_nights_error_order() {
        let policy = StayPolicy::new(10);
        assert_eq!(
            validate_num_nights(None, None, "", policy),
            Err(ValidationError::NightsRequired)
        );
        assert_eq!(
            validate_num_nights(day(2024, 1, 1), None, "3", policy),
            Err(ValidationError::DatesRequired)
        );
        // The minimum stay is reported before a mismatch.
        assert_eq!(
            validate_num_nights(day(2024, 1, 1), day(2024, 1, 3), "7", policy),
            Err(ValidationError::BelowMinimumStay { minimum: 10 })
        );
    }

    #[test]
    fn test_non_numeric_nights_is_a_mismatch() {
        let policy = StayPolicy::default();
        let (start, end) = (day(2024, 1, 1), day(2024, 1, 3));
        let result = validate_num_nights(start, end, "two", policy);
        assert_eq!(
            result,
            Err(ValidationError::NightsMismatch { expected: 2 })
        );
        assert_eq!(
            result.unwrap_err().kind(),
            ValidationErrorKind::MismatchViolation
        );
        assert_eq!(validate_num_nights(start, end, "2.9", policy), Ok(()));
    }

    #[test]
    fn test_num_nights_is_pure() {
        let policy = StayPolicy::new(2);
        let (start, end) = (day(2024, 1, 1), day(2024, 1, 4));
        for input in ["", "3", "4", "x"] {
            assert_eq!(
                validate_num_nights(start, end, input, policy),
                validate_num_nights(start, end, input, policy)
            );
        }
    }

    #[test]
    fn test_nights_between_rounds_partial_days_up() {
        let start = date(2024, 1, 1).at(14, 0, 0, 0);
        assert_eq!(nights_between(start, date(2024, 1, 2).at(14, 0, 0, 0)), 1);
        assert_eq!(nights_between(start, date(2024, 1, 2).at(14, 0, 1, 0)), 2);
        assert_eq!(nights_between(start, date(2024, 1, 3).at(11, 0, 0, 0)), 2);
        // Absolute difference, so order does not matter.
        assert_eq!(nights_between(date(2024, 1, 5).at(0, 0, 0, 0), start), 4);
        assert_eq!(nights_between(start, start), 0);
    }

    #[test]
    fn test_nights_between_ignores_dst() {
        // US clocks sprang forward on 2024-03-10 and fell back on 2024-11-03.
        assert_eq!(
            nights_between(
                date(2024, 3, 9).at(0, 0, 0, 0),
                date(2024, 3, 11).at(0, 0, 0, 0)
            ),
            2
        );
        assert_eq!(
            nights_between(
                date(2024, 11, 2).at(0, 0, 0, 0),
                date(2024, 11, 4).at(0, 0, 0, 0)
            ),
            2
        );
    }

    #[test]
    fn test_parse_nights() {
        assert_eq!(parse_nights("4"), Some(4));
        assert_eq!(parse_nights("  12 nights"), Some(12));
        assert_eq!(parse_nights("4.5"), Some(4));
        assert_eq!(parse_nights("+3"), Some(3));
        assert_eq!(parse_nights("-3"), Some(-3));
        assert_eq!(parse_nights(""), None);
        assert_eq!(parse_nights("-"), None);
        assert_eq!(parse_nights("abc"), None);
    }

    #[test]
    fn test_policy_from_settings() {
        assert_eq!(StayPolicy::from_settings(None), StayPolicy::new(0));
        assert_eq!(
            StayPolicy::from_settings(Some(&Settings::default())),
            StayPolicy::new(0)
        );
        let settings = Settings {
            min_booking_length: Some(3),
        };
        assert_eq!(
            StayPolicy::from_settings(Some(&settings)),
            StayPolicy::new(3)
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            ValidationError::DatesRequired.kind(),
            ValidationErrorKind::MissingField
        );
        assert_eq!(
            ValidationError::EndNotAfterStart.kind(),
            ValidationErrorKind::OrderingViolation
        );
        assert_eq!(
            ValidationError::BelowMinimumStay { minimum: 2 }.kind(),
            ValidationErrorKind::PolicyViolation
        );
    }

    #[test]
    fn test_format_booking_datetime() {
        assert_eq!(
            format_booking_datetime(date(2024, 1, 5).at(9, 3, 7, 0)),
            "2024-01-05 09:03:07"
        );
    }

    #[test]
    fn test_draft_delegates_to_rules() {
        let draft = BookingDraft {
            start_date: day(2024, 1, 1),
            end_date: day(2024, 1, 3),
            num_nights: "2".to_string(),
        };
        let policy = StayPolicy::new(2);
        assert_eq!(draft.nights(), Some(2));
        assert_eq!(draft.validate_start(), Ok(()));
        assert_eq!(draft.validate_end(policy), Ok(()));
        assert_eq!(draft.validate_num_nights(policy), Ok(()));
    }
}
