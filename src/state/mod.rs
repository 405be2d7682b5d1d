pub mod session;

pub use session::{RunTicket, ValidationSession};
