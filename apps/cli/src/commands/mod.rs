mod analyze;
mod concept;
mod courses;
mod explain;
mod models;
mod pull;
mod remove;
mod styles;

pub use analyze::*;
pub use concept::*;
pub use courses::*;
pub use explain::*;
pub use models::*;
pub use pull::*;
pub use remove::*;
pub use styles::*;
