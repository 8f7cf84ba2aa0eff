//! Typed handles for the two tables. Handles are cheap to clone and are the
//! only way the HTTP layer reaches stored data.

#[macro_use]
mod macros;

mod user_client;
mod complaint_client;

pub use user_client::*;
pub use complaint_client::*;
