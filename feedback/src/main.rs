use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};
use sentimen::Category;
use sentimen_store::{CsvStorage, DataManager, FeedbackRecord};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "feedback",
    about = "A program to record and summarize user feedback on predictions."
)]
struct Args {
    /// Directory holding the history and feedback files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a judgement of a prediction
    #[command(group(ArgGroup::new("judgement").required(true).args(["correct", "actual"])))]
    Add {
        /// The classified text
        #[arg(long)]
        text: String,

        /// The label returned by the predictor
        #[arg(long)]
        predicted: Category,

        /// The prediction was correct
        #[arg(long)]
        correct: bool,

        /// The expected label when the prediction was wrong
        #[arg(long)]
        actual: Option<Category>,

        /// Free-form comment
        #[arg(long, default_value = "")]
        comment: String,
    },

    /// Print feedback statistics
    Stats,

    /// Print recent predictions, newest first
    History {
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let manager = DataManager::new().backend(CsvStorage::new(args.data_dir)?);
    eprintln!("Storage: {}", manager.storage_name().unwrap_or("none"));

    match args.command {
        Command::Add {
            text,
            predicted,
            correct,
            actual,
            comment,
        } => {
            let record = if correct {
                FeedbackRecord::correct(&text, predicted)
            } else {
                FeedbackRecord::incorrect(&text, predicted, actual)
            };
            if !manager.save_feedback(&record.comment(comment)) {
                return Err("failed to save the feedback".into());
            }
        }
        Command::Stats => {
            let stats = manager.feedback_stats();
            println!("Total: {}", stats.total);
            println!("Correct: {}", stats.correct);
            println!("Incorrect: {}", stats.incorrect);
            println!("Accuracy: {:.2}%", stats.accuracy);
        }
        Command::History { limit } => {
            for r in manager.history(limit) {
                println!(
                    "{}\t{}\t{:.2}\t{}",
                    r.timestamp, r.predicted_label, r.confidence, r.original_text
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_requires_judgement() {
        let base = ["feedback", "add", "--text", "enak", "--predicted", "positive"];
        assert!(Args::try_parse_from(base).is_err());
        assert!(Args::try_parse_from(base.iter().chain(&["--correct"])).is_ok());
        assert!(Args::try_parse_from(base.iter().chain(&["--actual", "negative"])).is_ok());
        assert!(
            Args::try_parse_from(base.iter().chain(&["--correct", "--actual", "negative"]))
                .is_err()
        );
    }
}
