//! Command implementations.

pub mod extract;
pub mod list;

pub use self::extract::execute_extract;
pub use self::list::{execute_boards, execute_users};
