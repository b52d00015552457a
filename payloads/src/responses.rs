use serde::{Deserialize, Serialize};

/// Property-wide settings that constrain new bookings.
///
/// Every field is optional; a missing value means the constraint is not
/// enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Minimum nights per booking. The older settings table stored this as
    /// `minBookinLength`, which is still accepted.
    #[serde(default, alias = "minBookinLength")]
    pub min_booking_length: Option<u32>,
}
