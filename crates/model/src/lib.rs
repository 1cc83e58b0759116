mod error;
mod registry;
mod store;

pub use error::*;
pub use registry::*;
pub use store::*;
