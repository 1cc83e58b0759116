/// Failures originating inside an inference backend.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("engine ran out of memory while loading the model")]
    OutOfMemory,

    #[error("model file not found: {0}")]
    ModelNotFound(std::path::PathBuf),

    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("engine is not initialized")]
    NotInitialized,

    #[error("engine initialization is already in progress")]
    Initializing,

    #[error(transparent)]
    Engine(#[from] EngineError),
}
