pub mod create_booking_form;
pub mod form_row;
pub mod modal;

pub use create_booking_form::CreateBookingForm;
pub use form_row::FormRow;
pub use modal::Modal;
