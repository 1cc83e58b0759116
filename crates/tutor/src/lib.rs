mod error;
mod state;
mod tutor;

pub use error::*;
pub use state::*;
pub use tutor::*;
