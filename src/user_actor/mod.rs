//! User Table: users keyed by secret code, with email uniqueness.

pub mod entity;
pub mod error;

pub use error::*;
