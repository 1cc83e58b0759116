use clap::Parser;

#[derive(Parser)]
pub struct ConceptArgs {
    /// Concept to explain briefly
    pub concept: String,

    #[arg(long, default_value = "simple")]
    pub style: String,

    /// Print the canned concept list for a topic instead of explaining
    #[arg(long)]
    pub list: bool,
}

pub async fn handle_concept(args: ConceptArgs) -> anyhow::Result<()> {
    let tutor = crate::misc::tutor().await?;

    if args.list {
        for concept in tutor.concepts_for_topic(&args.concept) {
            println!("- {concept}");
        }
        return Ok(());
    }

    crate::misc::stream_to_stdout(tutor.generate_concept(&args.concept, &args.style)).await?;
    Ok(())
}
