use clap::{Parser, Subcommand};

mod commands;
mod misc;

#[derive(Parser)]
#[command(version, name = "LearnMyOwnWay", bin_name = "lmw")]
struct Args {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "List supported models and their download status")]
    Models(commands::ModelsArgs),
    #[command(about = "Download a model")]
    Pull(commands::PullArgs),
    #[command(about = "Delete a downloaded model")]
    Remove(commands::RemoveArgs),
    #[command(about = "List the available analogy styles")]
    Styles(commands::StylesArgs),
    #[command(about = "Stream an analogy-based explanation of a topic")]
    Explain(commands::ExplainArgs),
    #[command(about = "Explain a single concept in one or two sentences")]
    Concept(commands::ConceptArgs),
    #[command(about = "Describe an image and explain what it shows")]
    Analyze(commands::AnalyzeArgs),
    #[command(about = "Manage saved courses")]
    Courses(commands::CoursesArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    misc::set_logger();

    let args = Args::parse();

    let result = match args.cmd {
        Commands::Models(args) => commands::handle_models(args).await,
        Commands::Pull(args) => commands::handle_pull(args).await,
        Commands::Remove(args) => commands::handle_remove(args).await,
        Commands::Styles(args) => commands::handle_styles(args).await,
        Commands::Explain(args) => commands::handle_explain(args).await,
        Commands::Concept(args) => commands::handle_concept(args).await,
        Commands::Analyze(args) => commands::handle_analyze(args).await,
        Commands::Courses(args) => commands::handle_courses(args).await,
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}
