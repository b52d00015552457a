pub mod api_client;
pub mod booking;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use booking::{
    BookingDraft, StayPolicy, ValidationError, ValidationErrorKind,
    ValidationResult,
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Client-generated key so a retried create request is applied only once.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct IdempotencyKey(pub Uuid);

impl IdempotencyKey {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for IdempotencyKey {
    fn default() -> Self {
        Self::new()
    }
}
