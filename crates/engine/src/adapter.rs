use std::sync::{Arc, Mutex};

use tokio_stream::wrappers::ReceiverStream;

use crate::{EngineError, Error, InferenceConfig, LlmEngine, LlmSession};

const CHUNK_CHANNEL_CAPACITY: usize = 32;

enum AdapterState {
    Uninitialized,
    Initializing,
    Ready(Arc<Mutex<Box<dyn LlmSession>>>),
    Failed,
}

/// Owns the engine lifecycle and bridges its blocking, callback-based
/// generation into an async stream of chunks.
pub struct EngineAdapter {
    engine: Arc<dyn LlmEngine>,
    state: Mutex<AdapterState>,
}

impl EngineAdapter {
    pub fn new(engine: Arc<dyn LlmEngine>) -> Self {
        Self {
            engine,
            state: Mutex::new(AdapterState::Uninitialized),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.lock_state(), AdapterState::Ready(_))
    }

    /// Loads the model off the async runtime. Already-ready is a no-op,
    /// and a concurrent load in flight is rejected rather than queued.
    pub async fn initialize(&self, config: InferenceConfig) -> Result<(), Error> {
        {
            let mut state = self.lock_state();
            match *state {
                AdapterState::Ready(_) => return Ok(()),
                AdapterState::Initializing => return Err(Error::Initializing),
                AdapterState::Uninitialized | AdapterState::Failed => {
                    *state = AdapterState::Initializing;
                }
            }
        }

        if !config.model_path.is_file() {
            *self.lock_state() = AdapterState::Failed;
            return Err(EngineError::ModelNotFound(config.model_path).into());
        }

        tracing::info!("loading model: {}", config.model_path.display());

        let engine = self.engine.clone();
        let loaded = match tokio::task::spawn_blocking(move || engine.load(&config)).await {
            Ok(loaded) => loaded,
            Err(e) => {
                *self.lock_state() = AdapterState::Failed;
                return Err(EngineError::Internal(e.to_string()).into());
            }
        };

        match loaded {
            Ok(session) => {
                *self.lock_state() = AdapterState::Ready(Arc::new(Mutex::new(session)));
                tracing::info!("model loaded");
                Ok(())
            }
            Err(e) => {
                tracing::error!("model load failed: {}", e);
                *self.lock_state() = AdapterState::Failed;
                Err(e.into())
            }
        }
    }

    /// Streams generated chunks. Generation runs on a blocking thread and
    /// pushes into a bounded channel, so a slow consumer applies
    /// backpressure and a dropped receiver stops the engine.
    pub fn generate(&self, prompt: String) -> Result<ReceiverStream<Result<String, Error>>, Error> {
        let session = match &*self.lock_state() {
            AdapterState::Ready(session) => session.clone(),
            AdapterState::Initializing => return Err(Error::Initializing),
            AdapterState::Uninitialized | AdapterState::Failed => {
                return Err(Error::NotInitialized)
            }
        };

        let (tx, rx) = tokio::sync::mpsc::channel::<Result<String, Error>>(CHUNK_CHANNEL_CAPACITY);

        tokio::task::spawn_blocking(move || {
            let mut session = match session.lock() {
                Ok(session) => session,
                Err(_) => {
                    let _ = tx.blocking_send(Err(EngineError::Internal(
                        "inference session lock poisoned".to_string(),
                    )
                    .into()));
                    return;
                }
            };

            let result = session.generate(&prompt, &mut |chunk, _done| {
                if chunk.is_empty() {
                    return true;
                }
                tx.blocking_send(Ok(chunk.to_string())).is_ok()
            });

            if let Err(e) = result {
                let _ = tx.blocking_send(Err(e.into()));
            }
        });

        Ok(ReceiverStream::new(rx))
    }

    /// Drops any loaded session and returns to the uninitialized state.
    pub fn release(&self) {
        *self.lock_state() = AdapterState::Uninitialized;
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, AdapterState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
