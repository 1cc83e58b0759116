#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    MinijinjaError(#[from] minijinja::Error),
}
