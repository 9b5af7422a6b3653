mod config;
mod outcome;

pub use config::*;
pub use outcome::*;
