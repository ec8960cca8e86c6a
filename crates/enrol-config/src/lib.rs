mod config;
mod paths;

pub use config::*;
pub use paths::*;
