use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the image file
    pub image: PathBuf,

    #[arg(long, default_value = "simple")]
    pub style: String,
}

pub async fn handle_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let tutor = crate::misc::tutor().await?;
    crate::misc::stream_to_stdout(tutor.generate_from_image(args.image, args.style)).await?;
    Ok(())
}
