mod adapter;
mod boundary;
mod config;
mod error;

pub use adapter::*;
pub use boundary::*;
pub use config::*;
pub use error::*;
