mod error;
mod report;
mod user;

pub use error::*;
pub use report::*;
pub use user::*;

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
pub const DEFAULT_MIN_AGE: i32 = 18;
