//! Booking notification handler.
//!
//! Turns a booking submitted by the website widget into an email to the specialist's
//! mailbox.

pub mod compose;
pub mod notifier;

pub use compose::compose_email;
pub use notifier::{BookingNotifier, Sent};
