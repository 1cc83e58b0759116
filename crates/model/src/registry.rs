pub static SUPPORTED_MODELS: &[SupportedModel] = &[SupportedModel::Gemma3nE2bInt4];

#[derive(
    Debug,
    Eq,
    Hash,
    PartialEq,
    Clone,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
pub enum SupportedModel {
    #[serde(rename = "gemma-3n-e2b-int4")]
    #[strum(serialize = "gemma-3n-e2b-int4")]
    #[value(name = "gemma-3n-e2b-int4")]
    Gemma3nE2bInt4,
}

impl SupportedModel {
    pub fn recommended() -> Self {
        SupportedModel::Gemma3nE2bInt4
    }

    pub fn file_name(&self) -> &str {
        match self {
            SupportedModel::Gemma3nE2bInt4 => "gemma-3n-E2B-it-int4.task",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            SupportedModel::Gemma3nE2bInt4 => "Gemma 3n E2B",
        }
    }

    pub fn model_url(&self) -> &str {
        match self {
            SupportedModel::Gemma3nE2bInt4 => {
                "https://huggingface.co/google/gemma-3n-E2B-it-int4/resolve/main/gemma-3n-E2B-it-int4.task"
            }
        }
    }

    pub fn size_mb(&self) -> u64 {
        match self {
            SupportedModel::Gemma3nE2bInt4 => 2990,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            SupportedModel::Gemma3nE2bInt4 => {
                "Compact model optimized for on-device learning experiences"
            }
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ModelInfo {
    pub key: SupportedModel,
    pub name: String,
    pub description: String,
    pub size_mb: u64,
}

pub fn list_supported() -> Vec<ModelInfo> {
    SUPPORTED_MODELS
        .iter()
        .map(|model| ModelInfo {
            key: model.clone(),
            name: model.display_name().to_string(),
            description: model.description().to_string(),
            size_mb: model.size_mb(),
        })
        .collect()
}
