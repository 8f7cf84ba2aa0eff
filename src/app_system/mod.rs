//! System orchestration, startup, and shutdown logic.

mod complaint_system;
mod logging;

pub use complaint_system::*;
pub use logging::*;
