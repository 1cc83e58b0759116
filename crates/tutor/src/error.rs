#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not enough memory to load AI model ({size_mb}MB). Free up memory or use a device with more RAM.")]
    OutOfMemory { size_mb: u64 },

    #[error("no AI models available after download attempt")]
    NoModelsAvailable,

    #[error(transparent)]
    Model(#[from] lmw_model::Error),

    #[error(transparent)]
    Engine(#[from] lmw_engine::Error),
}
