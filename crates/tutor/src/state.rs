/// Observable snapshot of a model download driven by `ensure_ready`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DownloadState {
    pub is_downloading: bool,
    pub progress: u8,
    pub model_name: String,
    pub error: Option<String>,
}
