use lmw_model::ModelStore;

#[derive(clap::Args)]
pub struct ModelsArgs {}

pub async fn handle_models(_args: ModelsArgs) -> anyhow::Result<()> {
    let store = ModelStore::new(crate::misc::data_dir()?);

    for info in lmw_model::list_supported() {
        let status = if store.is_present(&info.key) {
            let on_disk = store.size_on_disk(&info.key) / (1024 * 1024);
            format!("downloaded, {on_disk} MB on disk")
        } else {
            "not downloaded".to_string()
        };

        println!("{} ({})", info.name, info.key);
        println!("  {}", info.description);
        println!("  {} MB, {}", info.size_mb, status);
    }

    Ok(())
}
