//! State machine behind the create-booking form.
//!
//! Each field moves through [`FieldStatus`]: choosing a value makes it
//! `Dirty` (hiding any stale error), and only a blur or a submit validates
//! it again. Changing one field never resets another.

use jiff::civil;
use payloads::booking::{
    BookingDraft, StayPolicy, ValidationError, ValidationResult,
    format_booking_datetime, nights_between,
};
use payloads::{IdempotencyKey, requests};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    StartDate,
    EndDate,
    NumNights,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Dirty,
    Validated(ValidationResult),
}

impl FieldStatus {
    pub fn error(&self) -> Option<ValidationError> {
        match self {
            Self::Validated(Err(e)) => Some(*e),
            _ => None,
        }
    }
}

pub enum BookingFormAction {
    SetStartDate(Option<civil::DateTime>),
    SetEndDate(Option<civil::DateTime>),
    SetNumNights(String),
    Blur(BookingField, StayPolicy),
    Submit(StayPolicy),
    Reset,
}

/// Errors found when submitting, one slot per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub start_date: Option<ValidationError>,
    pub end_date: Option<ValidationError>,
    pub num_nights: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.num_nights.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFormState {
    pub draft: BookingDraft,
    pub start_date: FieldStatus,
    pub end_date: FieldStatus,
    pub num_nights: FieldStatus,
}

impl BookingFormState {
    pub fn status(&self, field: BookingField) -> FieldStatus {
        match field {
            BookingField::StartDate => self.start_date,
            BookingField::EndDate => self.end_date,
            BookingField::NumNights => self.num_nights,
        }
    }

    fn status_mut(&mut self, field: BookingField) -> &mut FieldStatus {
        match field {
            BookingField::StartDate => &mut self.start_date,
            BookingField::EndDate => &mut self.end_date,
            BookingField::NumNights => &mut self.num_nights,
        }
    }

    pub fn error(&self, field: BookingField) -> Option<ValidationError> {
        self.status(field).error()
    }

    fn validate(
        &self,
        field: BookingField,
        policy: StayPolicy,
    ) -> ValidationResult {
        match field {
            BookingField::StartDate => self.draft.validate_start(),
            BookingField::EndDate => self.draft.validate_end(policy),
            BookingField::NumNights => self.draft.validate_num_nights(policy),
        }
    }

    pub fn apply(&mut self, action: BookingFormAction) {
        match action {
            BookingFormAction::SetStartDate(date) => {
                self.draft.start_date = date;
                if date.is_some() {
                    self.start_date = FieldStatus::Dirty;
                }
            }
            BookingFormAction::SetEndDate(date) => {
                self.draft.end_date = date;
                if date.is_some() {
                    self.end_date = FieldStatus::Dirty;
                }
            }
            BookingFormAction::SetNumNights(text) => {
                self.draft.num_nights = text;
                self.num_nights = FieldStatus::Dirty;
            }
            BookingFormAction::Blur(field, policy) => {
                if self.status(field) == FieldStatus::Dirty {
                    let result = self.validate(field, policy);
                    *self.status_mut(field) = FieldStatus::Validated(result);
                }
            }
            BookingFormAction::Submit(policy) => {
                for field in [
                    BookingField::StartDate,
                    BookingField::EndDate,
                    BookingField::NumNights,
                ] {
                    let result = self.validate(field, policy);
                    *self.status_mut(field) = FieldStatus::Validated(result);
                }
            }
            BookingFormAction::Reset => *self = Self::default(),
        }
    }

    /// The request to send if every field is valid, otherwise what is
    /// wrong with each field.
    pub fn submission(
        &self,
        policy: StayPolicy,
        idempotency_key: IdempotencyKey,
    ) -> Result<requests::CreateBooking, FieldErrors> {
        let errors = FieldErrors {
            start_date: self.draft.validate_start().err(),
            end_date: self.draft.validate_end(policy).err(),
            num_nights: self.draft.validate_num_nights(policy).err(),
        };

        match (self.draft.start_date, self.draft.end_date) {
            (Some(start), Some(end)) if errors.is_empty() => {
                Ok(requests::CreateBooking {
                    start_date: format_booking_datetime(start),
                    end_date: format_booking_datetime(end),
                    num_nights: nights_between(start, end),
                    idempotency_key,
                })
            }
            _ => Err(errors),
        }
    }
}

impl Reducible for BookingFormState {
    type Action = BookingFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
