use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub model_path: PathBuf,
    pub max_tokens: u32,
    pub top_k: u32,
    pub temperature: f32,
    pub random_seed: u32,
}

impl InferenceConfig {
    pub fn for_model(model_path: impl AsRef<Path>) -> Self {
        Self {
            model_path: model_path.as_ref().to_path_buf(),
            max_tokens: 1024,
            top_k: 40,
            temperature: 0.7,
            random_seed: 0,
        }
    }
}
