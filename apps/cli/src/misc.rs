use std::path::PathBuf;

pub fn set_logger() {
    let mut builder = env_logger::Builder::new();

    builder.format(|buf, record| {
        let (style_begin, style_end) = {
            use env_logger::fmt::style;

            match record.level() {
                log::Level::Trace => (
                    style::AnsiColor::White.on_default().render(),
                    style::AnsiColor::White.on_default().render_reset(),
                ),
                log::Level::Debug => (
                    style::AnsiColor::Blue.on_default().render(),
                    style::AnsiColor::Blue.on_default().render_reset(),
                ),
                log::Level::Info => (
                    style::AnsiColor::Green.on_default().render(),
                    style::AnsiColor::Green.on_default().render_reset(),
                ),
                log::Level::Warn => (
                    style::AnsiColor::Yellow.on_default().render(),
                    style::AnsiColor::Yellow.on_default().render_reset(),
                ),
                log::Level::Error => (
                    style::AnsiColor::Red.on_default().render(),
                    style::AnsiColor::Red.on_default().render_reset(),
                ),
            }
        };

        use std::io::Write;

        writeln!(
            buf,
            "[{}] {}{}{} {}",
            chrono::Local::now().format("%H:%M:%S"),
            style_begin,
            record.level(),
            style_end,
            record.args()
        )
    });

    if let Ok(log_level) = std::env::var("LOG_LEVEL") {
        builder.parse_filters(&log_level);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }

    builder.init();
}

/// Builds the shared orchestrator. No inference runtime is linked into
/// this binary, so a failed warm-up only means content comes from the
/// offline generator.
pub async fn tutor() -> anyhow::Result<lmw_tutor::Tutor> {
    let tutor = lmw_tutor::Tutor::new(data_dir()?, std::sync::Arc::new(lmw_engine::UnavailableEngine));

    if tutor.is_model_available() {
        if let Err(e) = tutor.ensure_ready().await {
            log::warn!("Engine initialization failed, serving offline content: {}", e);
        }
    } else {
        log::info!("No model downloaded, serving offline content. Run 'lmw pull' to fetch one.");
    }

    Ok(tutor)
}

/// Prints fragments as they arrive and returns the full text.
pub async fn stream_to_stdout(
    stream: impl tokio_stream::Stream<Item = String>,
) -> anyhow::Result<String> {
    use std::io::Write;

    let mut content = String::new();
    tokio::pin!(stream);
    while let Some(fragment) = tokio_stream::StreamExt::next(&mut stream).await {
        print!("{fragment}");
        std::io::stdout().flush()?;
        content.push_str(&fragment);
    }
    println!();
    Ok(content)
}

pub fn data_dir() -> anyhow::Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("no user data directory available"))?
        .join("learn-my-own-way");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
