#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("download failed with status {status}: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("staged model not found or unreadable: {0}")]
    StagedModelMissing(std::path::PathBuf),
}
