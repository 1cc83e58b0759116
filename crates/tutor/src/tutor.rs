use std::path::{Path, PathBuf};
use std::sync::Arc;

use lmw_engine::{EngineAdapter, EngineError, InferenceConfig, LlmEngine};
use lmw_model::{ModelStore, SupportedModel};
use tokio_stream::{Stream, StreamExt};

use crate::{DownloadState, Error};

/// Ties the model store, the inference adapter and the offline fallback
/// generator together behind one streaming API.
pub struct Tutor {
    store: ModelStore,
    adapter: EngineAdapter,
    init_guard: tokio::sync::Mutex<()>,
    download_state: tokio::sync::watch::Sender<DownloadState>,
}

impl Tutor {
    pub fn new(data_dir: impl AsRef<Path>, engine: Arc<dyn LlmEngine>) -> Self {
        Self::from_store(ModelStore::new(data_dir), engine)
    }

    pub fn from_store(store: ModelStore, engine: Arc<dyn LlmEngine>) -> Self {
        let (download_state, _) = tokio::sync::watch::channel(DownloadState::default());
        Self {
            store,
            adapter: EngineAdapter::new(engine),
            init_guard: tokio::sync::Mutex::new(()),
            download_state,
        }
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    pub fn download_state(&self) -> tokio::sync::watch::Receiver<DownloadState> {
        self.download_state.subscribe()
    }

    pub fn is_ready(&self) -> bool {
        self.adapter.is_ready()
    }

    pub fn is_model_available(&self) -> bool {
        !self.store.list_present().is_empty()
    }

    pub fn downloaded_models(&self) -> Vec<SupportedModel> {
        self.store.list_present()
    }

    pub async fn download_model<F: Fn(u8)>(
        &self,
        model: &SupportedModel,
        on_progress: F,
    ) -> Result<PathBuf, Error> {
        Ok(self.store.download(model, on_progress).await?)
    }

    pub fn release(&self) {
        self.adapter.release();
    }

    /// Gets the engine to a ready state, acquiring a model if necessary:
    /// try the staged file in place, fall back to copying it into the app
    /// directory, download when nothing is present at all, then load
    /// whatever ended up available. Concurrent callers queue on the guard
    /// and the winner's result short-circuits the rest.
    pub async fn ensure_ready(&self) -> Result<(), Error> {
        let _guard = self.init_guard.lock().await;
        if self.adapter.is_ready() {
            return Ok(());
        }
        self.download_state.send_replace(DownloadState::default());

        let model = SupportedModel::recommended();

        if self.store.staged_usable(&model) {
            tracing::info!("found staged model, trying to use it in place");
            let config = InferenceConfig::for_model(self.store.staged_path(&model));
            match self.adapter.initialize(config).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::warn!("failed to initialize from staged model: {}", e);
                }
            }
            if let Err(e) = self.store.copy_from_staging(&model).await {
                tracing::warn!("failed to copy staged model: {}", e);
            }
        }

        let mut present = self.store.list_present();

        if present.is_empty() {
            tracing::info!("no models found, starting automatic download");
            let name = model.display_name().to_string();
            self.download_state.send_replace(DownloadState {
                is_downloading: true,
                progress: 0,
                model_name: name.clone(),
                error: None,
            });

            let sender = self.download_state.clone();
            let progress_name = name.clone();
            let downloaded = self
                .store
                .download(&model, move |pct| {
                    sender.send_replace(DownloadState {
                        is_downloading: true,
                        progress: pct,
                        model_name: progress_name.clone(),
                        error: None,
                    });
                })
                .await;

            match downloaded {
                Ok(path) => {
                    tracing::info!("model downloaded: {}", path.display());
                    self.download_state.send_replace(DownloadState {
                        is_downloading: false,
                        progress: 100,
                        model_name: name,
                        error: None,
                    });
                    present = self.store.list_present();
                }
                Err(e) => {
                    tracing::error!("model download failed: {}", e);
                    self.download_state.send_replace(DownloadState {
                        is_downloading: false,
                        progress: 0,
                        model_name: name,
                        error: Some(e.to_string()),
                    });
                    return Err(e.into());
                }
            }
        }

        let Some(model) = present.first() else {
            return Err(Error::NoModelsAvailable);
        };

        let config = InferenceConfig::for_model(self.store.resolve_path(model));
        self.adapter.initialize(config).await.map_err(|e| match e {
            lmw_engine::Error::Engine(EngineError::OutOfMemory) => Error::OutOfMemory {
                size_mb: model.size_mb(),
            },
            other => other.into(),
        })
    }

    /// Blog-style streamed explanation of a topic.
    pub fn generate_explanation(
        &self,
        topic: &str,
        style: &str,
    ) -> impl Stream<Item = String> + '_ {
        let offline = lmw_analogy::explanation(topic, style);
        self.run(
            lmw_prompt::explanation_prompt(topic, style),
            format!("⚠️ Using demo content generator:\n\n{offline}"),
            format!("⚠️ Using fallback content generator:\n\n{offline}"),
        )
    }

    /// Short streamed explanation of a single concept.
    pub fn generate_concept(&self, concept: &str, style: &str) -> impl Stream<Item = String> + '_ {
        let brief = lmw_analogy::brief(concept, style);
        self.run(
            lmw_prompt::concept_prompt(concept, style),
            format!("⚠️ Demo: {brief}"),
            format!("⚠️ Fallback: {brief}"),
        )
    }

    /// One course page, phrased as "<page type> about <topic>".
    pub fn generate_page(
        &self,
        topic: &str,
        style: &str,
        page_type: &str,
    ) -> impl Stream<Item = String> + '_ {
        let offline = lmw_analogy::explanation(topic, style);
        self.run(
            lmw_prompt::page_prompt(topic, style, page_type),
            format!("⚠️ Demo Page ({page_type}):\n\n{offline}"),
            format!("⚠️ Fallback Page ({page_type}):\n\n{offline}"),
        )
    }

    /// Two stages: pixel analysis of the file, then an explanation
    /// grounded in the resulting description. A pixel-analysis failure is
    /// a hard error with no fallback, since there is nothing to explain.
    pub fn generate_from_image(
        &self,
        path: PathBuf,
        style: String,
    ) -> impl Stream<Item = String> + '_ {
        async_stream::stream! {
            let description = match lmw_pixels::analyze_file(&path) {
                Ok(description) => description,
                Err(e) => {
                    tracing::error!("image analysis failed: {}", e);
                    yield format!("Error: Failed to analyze image - {e}");
                    return;
                }
            };

            let offline = format!(
                "📸 Image Analysis:\n\n## What I understand from this image\n{description}\n\n## Explanation using {style} analogies\n{}",
                lmw_analogy::explanation(&description, &style)
            );

            if !self.adapter.is_ready() {
                if let Err(e) = self.ensure_ready().await {
                    tracing::info!("initialization failed, serving offline explanation: {}", e);
                    yield offline;
                    return;
                }
            }

            let inner = self.run(
                lmw_prompt::image_prompt(&description, &style),
                offline.clone(),
                offline,
            );
            tokio::pin!(inner);
            while let Some(fragment) = inner.next().await {
                yield fragment;
            }
        }
    }

    /// Canned per-topic concept list, served instantly instead of waiting
    /// on the model.
    pub fn concepts_for_topic(&self, topic: &str) -> Vec<String> {
        vec![
            format!("What is {topic}?"),
            format!("Key features of {topic}"),
            format!("How {topic} works"),
            format!("Benefits of {topic}"),
            format!("Common uses of {topic}"),
            format!("Examples of {topic}"),
            format!("Getting started with {topic}"),
        ]
    }

    /// Shared streaming policy: a not-ready engine yields the demo
    /// fragment and ends; engine fragments are re-emitted verbatim; the
    /// first failure is replaced by exactly one fallback fragment and the
    /// stream terminates.
    fn run(
        &self,
        prompt: Result<String, lmw_prompt::Error>,
        demo: String,
        fallback: String,
    ) -> impl Stream<Item = String> + '_ {
        async_stream::stream! {
            if !self.adapter.is_ready() {
                tracing::warn!("engine not ready, serving demo content");
                yield demo;
                return;
            }

            let prompt = match prompt {
                Ok(prompt) => prompt,
                Err(e) => {
                    tracing::error!("prompt rendering failed: {}", e);
                    yield fallback;
                    return;
                }
            };

            let mut fragments = match self.adapter.generate(prompt) {
                Ok(fragments) => fragments,
                Err(e) => {
                    tracing::error!("generation failed to start: {}", e);
                    yield fallback;
                    return;
                }
            };

            while let Some(item) = fragments.next().await {
                match item {
                    Ok(text) => yield text,
                    Err(e) => {
                        tracing::error!("generation failed: {}", e);
                        yield fallback;
                        return;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lmw_engine::LlmSession;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Copy)]
    enum LoadBehavior {
        Succeed,
        OutOfMemory,
        Crash,
    }

    struct FakeEngine {
        chunks: Vec<String>,
        fail_after: Option<usize>,
        load: LoadBehavior,
        fail_first_load: bool,
        loads: Arc<AtomicUsize>,
        load_paths: Arc<std::sync::Mutex<Vec<std::path::PathBuf>>>,
    }

    impl FakeEngine {
        fn ok(chunks: &[&str]) -> Self {
            Self {
                chunks: chunks.iter().map(|c| c.to_string()).collect(),
                fail_after: None,
                load: LoadBehavior::Succeed,
                fail_first_load: false,
                loads: Arc::new(AtomicUsize::new(0)),
                load_paths: Arc::new(std::sync::Mutex::new(Vec::new())),
            }
        }
    }

    struct FakeSession {
        chunks: Vec<String>,
        fail_after: Option<usize>,
    }

    impl LlmSession for FakeSession {
        fn generate(
            &mut self,
            _prompt: &str,
            on_chunk: &mut dyn FnMut(&str, bool) -> bool,
        ) -> Result<(), EngineError> {
            let last = self.chunks.len().saturating_sub(1);
            for (i, chunk) in self.chunks.iter().enumerate() {
                if self.fail_after == Some(i) {
                    return Err(EngineError::Internal("backend crashed".to_string()));
                }
                if !on_chunk(chunk, i == last) {
                    return Ok(());
                }
            }
            Ok(())
        }
    }

    impl LlmEngine for FakeEngine {
        fn load(
            &self,
            config: &InferenceConfig,
        ) -> Result<Box<dyn LlmSession>, EngineError> {
            let attempt = self.loads.fetch_add(1, Ordering::SeqCst);
            self.load_paths
                .lock()
                .unwrap()
                .push(config.model_path.clone());
            if self.fail_first_load && attempt == 0 {
                return Err(EngineError::Internal("mapping failed".to_string()));
            }
            match self.load {
                LoadBehavior::Succeed => Ok(Box::new(FakeSession {
                    chunks: self.chunks.clone(),
                    fail_after: self.fail_after,
                })),
                LoadBehavior::OutOfMemory => Err(EngineError::OutOfMemory),
                LoadBehavior::Crash => {
                    Err(EngineError::Internal("backend crashed".to_string()))
                }
            }
        }
    }

    struct Fixture {
        tutor: Tutor,
        _staging: tempfile::TempDir,
        _data: tempfile::TempDir,
    }

    fn fixture(engine: FakeEngine, stage_model: bool) -> Fixture {
        let staging = tempfile::tempdir().unwrap();
        let data = tempfile::tempdir().unwrap();

        if stage_model {
            let model = SupportedModel::recommended();
            std::fs::write(staging.path().join(model.file_name()), b"weights").unwrap();
        }

        let store = ModelStore::new(data.path()).with_staging_dir(staging.path());
        Fixture {
            tutor: Tutor::from_store(store, Arc::new(engine)),
            _staging: staging,
            _data: data,
        }
    }

    async fn collect(stream: impl Stream<Item = String>) -> Vec<String> {
        tokio::pin!(stream);
        let mut out = Vec::new();
        while let Some(fragment) = stream.next().await {
            out.push(fragment);
        }
        out
    }

    #[tokio::test]
    async fn test_ensure_ready_uses_staged_model_and_short_circuits() {
        let engine = FakeEngine::ok(&["hi"]);
        let loads = engine.loads.clone();
        let f = fixture(engine, true);

        f.tutor.ensure_ready().await.unwrap();
        assert!(f.tutor.is_ready());

        f.tutor.ensure_ready().await.unwrap();
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_out_of_memory_reports_model_size() {
        let mut engine = FakeEngine::ok(&[]);
        engine.load = LoadBehavior::OutOfMemory;
        let f = fixture(engine, true);

        let err = f.tutor.ensure_ready().await.unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, Error::OutOfMemory { size_mb: 2990 }));
        assert!(message.contains("2990"));
        assert!(!f.tutor.is_ready());
    }

    #[tokio::test]
    async fn test_failed_staged_init_falls_back_to_copied_model() {
        let mut engine = FakeEngine::ok(&["hi"]);
        engine.fail_first_load = true;
        let loads = engine.loads.clone();
        let load_paths = engine.load_paths.clone();
        let f = fixture(engine, true);

        f.tutor.ensure_ready().await.unwrap();

        // Staged attempt failed, the model was copied into the app dir and
        // retried. The staged file is still usable, so path resolution keeps
        // pointing both attempts at it.
        assert_eq!(loads.load(Ordering::SeqCst), 2);
        assert!(f.tutor.is_ready());
        let model = SupportedModel::recommended();
        assert!(f.tutor.store().models_dir().join(model.file_name()).is_file());

        let staged = f.tutor.store().staged_path(&model);
        assert_eq!(*load_paths.lock().unwrap(), vec![staged.clone(), staged]);
    }

    #[tokio::test]
    async fn test_explanation_not_ready_yields_single_demo_fragment() {
        let f = fixture(FakeEngine::ok(&["unused"]), false);

        let fragments = collect(f.tutor.generate_explanation("atoms", "chef")).await;

        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].starts_with("⚠️ Using demo content generator:\n\n"));
        assert!(fragments[0].contains("Think of atoms like preparing a complex dish."));
    }

    #[tokio::test]
    async fn test_explanation_streams_engine_fragments_verbatim() {
        let engine = FakeEngine::ok(&["Atoms ", "are ", "small."]);
        let f = fixture(engine, true);
        f.tutor.ensure_ready().await.unwrap();

        let fragments = collect(f.tutor.generate_explanation("atoms", "chef")).await;
        assert_eq!(fragments, vec!["Atoms ", "are ", "small."]);
    }

    #[tokio::test]
    async fn test_first_failure_replaced_by_single_fallback_then_ends() {
        let mut engine = FakeEngine::ok(&["one ", "two ", "three"]);
        engine.fail_after = Some(2);
        let f = fixture(engine, true);
        f.tutor.ensure_ready().await.unwrap();

        let fragments = collect(f.tutor.generate_explanation("atoms", "mechanic")).await;

        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0], "one ");
        assert_eq!(fragments[1], "two ");
        assert!(fragments[2].starts_with("⚠️ Using fallback content generator:\n\n"));
        assert!(fragments[2].contains("diagnosing and fixing an engine"));
    }

    #[tokio::test]
    async fn test_failure_on_first_fragment_yields_only_fallback() {
        let mut engine = FakeEngine::ok(&["never emitted"]);
        engine.fail_after = Some(0);
        let f = fixture(engine, true);
        f.tutor.ensure_ready().await.unwrap();

        let fragments = collect(f.tutor.generate_explanation("gravity", "chef")).await;

        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].starts_with("⚠️ Using fallback content generator:\n\n"));
        assert!(fragments[0].contains("Think of gravity like preparing a complex dish."));
    }

    #[tokio::test]
    async fn test_concept_demo_is_brief() {
        let f = fixture(FakeEngine::ok(&["unused"]), false);

        let fragments = collect(f.tutor.generate_concept("gravity", "athlete")).await;

        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].starts_with("⚠️ Demo: "));
        assert!(fragments[0].ends_with('.'));
        // Two sentences only.
        assert_eq!(fragments[0].matches(". ").count(), 1);
    }

    #[tokio::test]
    async fn test_page_demo_names_page_type() {
        let f = fixture(FakeEngine::ok(&["unused"]), false);

        let fragments =
            collect(f.tutor.generate_page("recursion", "builder", "Introduction")).await;

        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].starts_with("⚠️ Demo Page (Introduction):\n\n"));
    }

    #[tokio::test]
    async fn test_image_analysis_failure_is_single_error_fragment() {
        let f = fixture(FakeEngine::ok(&["unused"]), false);

        let fragments = collect(
            f.tutor
                .generate_from_image(PathBuf::from("/nonexistent.png"), "chef".to_string()),
        )
        .await;

        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].starts_with("Error: Failed to analyze image - "));
    }

    #[tokio::test]
    async fn test_image_with_failing_init_serves_offline_explanation() {
        let mut engine = FakeEngine::ok(&[]);
        engine.load = LoadBehavior::Crash;
        let f = fixture(engine, true);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        let img = image::RgbImage::from_pixel(32, 32, image::Rgb([128, 128, 128]));
        image::DynamicImage::ImageRgb8(img).save(&path).unwrap();

        let fragments = collect(f.tutor.generate_from_image(path, "chef".to_string())).await;

        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].starts_with("📸 Image Analysis:\n\n## What I understand from this image\n"));
        assert!(fragments[0].contains("## Explanation using chef analogies"));
    }

    #[tokio::test]
    async fn test_image_streams_through_engine_when_ready() {
        let engine = FakeEngine::ok(&["It shows ", "a gray square."]);
        let f = fixture(engine, true);
        f.tutor.ensure_ready().await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        let img = image::RgbImage::from_pixel(32, 32, image::Rgb([128, 128, 128]));
        image::DynamicImage::ImageRgb8(img).save(&path).unwrap();

        let fragments = collect(f.tutor.generate_from_image(path, "chef".to_string())).await;
        assert_eq!(fragments, vec!["It shows ", "a gray square."]);
    }

    #[tokio::test]
    async fn test_concepts_for_topic_is_canned() {
        let f = fixture(FakeEngine::ok(&[]), false);
        let concepts = f.tutor.concepts_for_topic("rust");

        assert_eq!(concepts.len(), 7);
        assert_eq!(concepts[0], "What is rust?");
        assert_eq!(concepts[6], "Getting started with rust");
    }

    #[tokio::test]
    async fn test_download_state_starts_idle() {
        let f = fixture(FakeEngine::ok(&[]), false);
        let state = f.tutor.download_state();
        assert_eq!(*state.borrow(), DownloadState::default());
    }
}
