//! Complaint Table: complaints keyed by id, with owner checks on view and resolve.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
