use clap::{Args, Subcommand};

use lmw_courses::CourseStore;

#[derive(Args)]
pub struct CoursesArgs {
    #[command(subcommand)]
    cmd: CoursesCommand,
}

#[derive(Subcommand)]
enum CoursesCommand {
    #[command(about = "List saved courses, newest first")]
    List,
    #[command(about = "Print a saved course")]
    Show { id: String },
    #[command(about = "Delete a saved course")]
    Delete { id: String },
}

pub async fn handle_courses(args: CoursesArgs) -> anyhow::Result<()> {
    let store = CourseStore::new(crate::misc::data_dir()?);

    match args.cmd {
        CoursesCommand::List => {
            let courses = store.list()?;
            if courses.is_empty() {
                println!("No saved courses. Use 'lmw explain <topic> --save' to keep one.");
                return Ok(());
            }
            for course in courses {
                let saved_at = chrono::DateTime::from_timestamp_millis(course.saved_timestamp)
                    .map(|t| t.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                println!(
                    "{}  {} ({} analogies, {} words, {})",
                    course.id, course.topic, course.analogy_style, course.word_count, saved_at
                );
            }
        }
        CoursesCommand::Show { id } => match store.get(&id)? {
            Some(course) => {
                println!("# {} ({} analogies)\n", course.topic, course.analogy_style);
                println!("{}", course.content);
            }
            None => anyhow::bail!("no course with id {}", id),
        },
        CoursesCommand::Delete { id } => {
            if store.delete(&id)? {
                log::info!("Course {} deleted", id);
            } else {
                log::warn!("No course with id {}", id);
            }
        }
    }

    Ok(())
}
