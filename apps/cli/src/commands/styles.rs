use lmw_analogy::DEFAULT_PROFILES;

#[derive(clap::Args)]
pub struct StylesArgs {}

pub async fn handle_styles(_args: StylesArgs) -> anyhow::Result<()> {
    for profile in DEFAULT_PROFILES {
        println!("{} {:<10} {}", profile.icon_emoji, profile.id, profile.description);
        println!("   e.g. {}", profile.example_terms.join(", "));
    }
    println!("\nAny other word works too, as a free-form style.");
    Ok(())
}
