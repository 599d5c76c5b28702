pub mod booking;
pub mod tour;
pub mod user;

pub use booking::{Booking, BookingError, BookingStatus};
pub use tour::Tour;
pub use user::User;
