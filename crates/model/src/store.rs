use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use futures_util::StreamExt;

use crate::{Error, SupportedModel, SUPPORTED_MODELS};

/// Privileged location where a model may be pre-staged by tooling
/// before the app ever runs.
pub const DEFAULT_STAGING_DIR: &str = "/data/local/tmp/llm";

static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

fn get_client() -> &'static reqwest::Client {
    CLIENT.get_or_init(reqwest::Client::new)
}

/// Resolves model files across the staging directory and the app-private
/// models directory, and moves bytes between the network, the staging
/// location and the app directory.
#[derive(Debug, Clone)]
pub struct ModelStore {
    staging_dir: PathBuf,
    models_dir: PathBuf,
}

impl ModelStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            staging_dir: PathBuf::from(DEFAULT_STAGING_DIR),
            models_dir: data_dir.as_ref().join("models"),
        }
    }

    pub fn with_staging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = dir.into();
        self
    }

    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    pub fn staged_path(&self, model: &SupportedModel) -> PathBuf {
        self.staging_dir.join(model.file_name())
    }

    pub fn staged_usable(&self, model: &SupportedModel) -> bool {
        usable(&self.staged_path(model))
    }

    /// Staged location wins when the file is there and readable; otherwise
    /// the app-private path is returned whether or not it exists.
    pub fn resolve_path(&self, model: &SupportedModel) -> PathBuf {
        let staged = self.staged_path(model);
        if usable(&staged) {
            return staged;
        }
        self.models_dir.join(model.file_name())
    }

    pub fn is_present(&self, model: &SupportedModel) -> bool {
        usable(&self.staged_path(model)) || usable(&self.models_dir.join(model.file_name()))
    }

    pub fn list_present(&self) -> Vec<SupportedModel> {
        SUPPORTED_MODELS
            .iter()
            .filter(|model| self.is_present(model))
            .cloned()
            .collect()
    }

    pub fn size_on_disk(&self, model: &SupportedModel) -> u64 {
        std::fs::metadata(self.resolve_path(model))
            .map(|meta| meta.len())
            .unwrap_or(0)
    }

    pub async fn download<F: Fn(u8)>(
        &self,
        model: &SupportedModel,
        on_progress: F,
    ) -> Result<PathBuf, Error> {
        self.download_from(model.model_url(), model, on_progress)
            .await
    }

    /// Streams `url` into the resolved location for `model`. An existing
    /// target is treated as success without touching the network. Progress
    /// is reported as a percentage, and only when the response carries a
    /// usable content-length.
    pub async fn download_from<F: Fn(u8)>(
        &self,
        url: &str,
        model: &SupportedModel,
        on_progress: F,
    ) -> Result<PathBuf, Error> {
        let target = self.resolve_path(model);

        if target.exists() {
            tracing::info!("model already present: {}", target.display());
            return Ok(target);
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }

        tracing::info!("starting download: {}", url);

        let res = get_client().get(url).send().await?;
        if !res.status().is_success() {
            return Err(Error::HttpStatus {
                status: res.status().as_u16(),
                url: url.to_string(),
            });
        }

        let total = content_length_from_headers(&res).filter(|len| *len > 0);

        match write_body(&target, res.bytes_stream(), total, &on_progress).await {
            Ok(()) => {
                tracing::info!("download completed: {}", target.display());
                Ok(target)
            }
            Err(e) => {
                // A retried download must not mistake a partial file for a
                // complete one.
                if let Err(remove_err) = std::fs::remove_file(&target) {
                    tracing::warn!(
                        "failed to remove partial download {}: {}",
                        target.display(),
                        remove_err
                    );
                }
                Err(e)
            }
        }
    }

    /// Byte-copies a pre-staged model into the app-private directory so it
    /// survives the staging location being cleaned up.
    pub async fn copy_from_staging(&self, model: &SupportedModel) -> Result<PathBuf, Error> {
        let src = self.staged_path(model);
        if !usable(&src) {
            return Err(Error::StagedModelMissing(src));
        }

        std::fs::create_dir_all(&self.models_dir)?;
        let dest = self.models_dir.join(model.file_name());

        if dest.exists() {
            tracing::info!("model already copied: {}", dest.display());
            return Ok(dest);
        }

        let bytes = std::fs::copy(&src, &dest)?;
        tracing::info!("copied staged model to {} ({} bytes)", dest.display(), bytes);
        Ok(dest)
    }

    /// True when the file is gone afterwards, whether or not it was there.
    pub fn delete(&self, model: &SupportedModel) -> bool {
        let path = self.resolve_path(model);
        if !path.exists() {
            return true;
        }
        std::fs::remove_file(&path).is_ok()
    }
}

fn usable(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() && meta.len() > 0 => File::open(path).is_ok(),
        _ => false,
    }
}

async fn write_body<F, S, B, E>(
    target: &Path,
    stream: S,
    total: Option<u64>,
    on_progress: &F,
) -> Result<(), Error>
where
    F: Fn(u8),
    S: futures_util::Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    Error: From<E>,
{
    let mut file = File::create(target)?;
    let mut downloaded: u64 = 0;
    futures_util::pin_mut!(stream);

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(chunk.as_ref())?;
        downloaded += chunk.as_ref().len() as u64;
        if let Some(total) = total {
            on_progress((downloaded * 100 / total).min(100) as u8);
        }
    }

    file.flush()?;
    Ok(())
}

/// Manually parse the content-length header; `content_length()` is
/// unreliable behind some proxies.
fn content_length_from_headers(response: &reqwest::Response) -> Option<u64> {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .or_else(|| response.content_length())
}
