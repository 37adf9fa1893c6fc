//! Domain types for notifications and sessions.
//!
//! These types are independent of any transport. Adapters convert to and
//! from them at the port boundary.

mod credential;
mod notification;

pub use credential::Credential;
pub use notification::{NotificationRecord, mark_read, unread_count};
