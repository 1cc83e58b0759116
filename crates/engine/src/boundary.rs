use crate::{EngineError, InferenceConfig};

/// Backend that can load a model file into a usable session. Loading is
/// blocking and expected to take seconds, so callers run it off the
/// async runtime.
pub trait LlmEngine: Send + Sync + 'static {
    fn load(&self, config: &InferenceConfig) -> Result<Box<dyn LlmSession>, EngineError>;
}

/// A loaded model. `on_chunk` receives each piece of generated text plus
/// a flag for the final chunk, and returns false to stop generation early.
pub trait LlmSession: Send {
    fn generate(
        &mut self,
        prompt: &str,
        on_chunk: &mut dyn FnMut(&str, bool) -> bool,
    ) -> Result<(), EngineError>;
}

/// Placeholder backend for builds that do not link a real inference
/// runtime. Every load fails, which pushes callers onto their fallback
/// path.
#[derive(Debug, Default, Clone)]
pub struct UnavailableEngine;

impl LlmEngine for UnavailableEngine {
    fn load(&self, _config: &InferenceConfig) -> Result<Box<dyn LlmSession>, EngineError> {
        Err(EngineError::Internal(
            "no inference runtime linked into this build".to_string(),
        ))
    }
}
