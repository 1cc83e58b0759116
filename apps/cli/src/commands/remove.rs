use clap::Parser;

use lmw_model::{ModelStore, SupportedModel};

#[derive(Parser)]
pub struct RemoveArgs {
    #[arg(value_enum)]
    pub model: SupportedModel,
}

pub async fn handle_remove(args: RemoveArgs) -> anyhow::Result<()> {
    let store = ModelStore::new(crate::misc::data_dir()?);

    if !store.is_present(&args.model) {
        log::info!("Model {} is not downloaded", args.model);
        return Ok(());
    }

    if store.delete(&args.model) {
        log::info!("Model {} removed", args.model);
        Ok(())
    } else {
        anyhow::bail!("failed to remove model {}", args.model)
    }
}
