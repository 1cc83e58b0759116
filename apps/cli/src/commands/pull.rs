use clap::Parser;

use lmw_model::{ModelStore, SupportedModel};

#[derive(Parser)]
pub struct PullArgs {
    /// The model to download
    #[arg(value_enum)]
    pub model: SupportedModel,
}

pub async fn handle_pull(args: PullArgs) -> anyhow::Result<()> {
    let store = ModelStore::new(crate::misc::data_dir()?);

    if store.is_present(&args.model) {
        log::info!("Model {} already downloaded", args.model);
        return Ok(());
    }

    let path = {
        let progress = indicatif::ProgressBar::new(100);
        progress.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {percent:>3}%")
                .unwrap()
                .progress_chars("━━╸"),
        );
        progress.set_message(args.model.display_name().to_string());

        let path = store
            .download(&args.model, |pct| progress.set_position(pct as u64))
            .await?;
        progress.finish_and_clear();
        path
    };

    log::info!("Model saved to {}", path.display());
    log::info!("Try 'lmw explain <topic>' to get started");
    Ok(())
}
