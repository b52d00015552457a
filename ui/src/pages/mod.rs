pub mod bookings;
pub mod not_found;

pub use bookings::BookingsPage;
pub use not_found::NotFoundPage;
