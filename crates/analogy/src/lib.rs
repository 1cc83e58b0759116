mod chapters;
mod profiles;
mod templates;

pub use chapters::*;
pub use profiles::*;
pub use templates::*;
