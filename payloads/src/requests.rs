use serde::{Deserialize, Serialize};

use crate::IdempotencyKey;

/// A validated booking, with both dates in `BOOKING_DATETIME_FORMAT`.
///
/// Built by the booking form once every field has passed validation; see
/// [`crate::booking`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBooking {
    pub start_date: String,
    pub end_date: String,
    pub num_nights: u32,
    pub idempotency_key: IdempotencyKey,
}
