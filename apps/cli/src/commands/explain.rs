use clap::Parser;

use lmw_courses::CourseStore;

#[derive(Parser)]
pub struct ExplainArgs {
    /// Topic to explain
    pub topic: String,

    /// Analogy style, one of the built-in profiles or any free-form word
    #[arg(long, default_value = "simple")]
    pub style: String,

    /// Persist the result as a saved course
    #[arg(long)]
    pub save: bool,

    /// Also print a five-chapter course outline
    #[arg(long)]
    pub outline: bool,
}

pub async fn handle_explain(args: ExplainArgs) -> anyhow::Result<()> {
    let tutor = crate::misc::tutor().await?;

    let content =
        crate::misc::stream_to_stdout(tutor.generate_explanation(&args.topic, &args.style))
            .await?;

    if args.outline {
        let outline = lmw_analogy::course_outline(&args.topic, &args.style);
        println!("\n{} ({} min)", outline.title, outline.estimated_minutes);
        for chapter in &outline.chapters {
            println!(
                "  {}. {} ({:?}, {} min)",
                chapter.order, chapter.title, chapter.difficulty, chapter.estimated_minutes
            );
        }
    }

    if args.save {
        let store = CourseStore::new(crate::misc::data_dir()?);
        let saved = store.save(&args.topic, &args.style, &content)?;
        log::info!("Saved course {}", saved.id);
    }

    Ok(())
}
