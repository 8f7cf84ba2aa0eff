pub mod user;
pub mod complaint;

pub use user::*;
pub use complaint::*;
