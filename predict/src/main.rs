use std::fs::File;
use std::io::{prelude::*, stdin};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use sentimen::{load_first, Model, Predictor};
use sentimen_store::{CsvStorage, DataManager};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "predict",
    about = "A program to classify the sentiment of Indonesian comments."
)]
struct Args {
    /// The model files to try in order
    #[arg(long, required = true, num_args = 1..)]
    model: Vec<PathBuf>,

    /// Print the text after every preprocessing stage
    #[arg(long)]
    trace: bool,

    /// Directory to save the prediction history
    #[arg(long)]
    history_dir: Option<PathBuf>,
}

/// Returns a manager saving to `dir`. If the directory is unusable, the manager has no
/// backend and every save reports a failure.
fn history_manager(dir: PathBuf) -> DataManager {
    match CsvStorage::new(&dir) {
        Ok(storage) => DataManager::new().backend(storage),
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "history is not saved");
            DataManager::new()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    eprintln!("Loading model file...");
    let model = load_first(&args.model, |path| {
        let mut f = zstd::Decoder::new(File::open(path)?)?;
        Model::read(&mut f)
    })?;
    let predictor = Predictor::from_model(sentimen_rules::preprocessor()?, model)?;

    let manager = args.history_dir.map(history_manager);

    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter one comment per line. Press Ctrl-D to finish.");
    }

    let mut n_comments = 0;
    let start = Instant::now();
    for line in stdin().lock().lines() {
        let line = line?;
        let r = predictor.predict(&line)?;
        println!("{}\t{:.2}\t{}", r.label(), r.confidence(), r.cleaned_text());
        if args.trace {
            for (stage, text) in r.preprocessing_steps().iter() {
                println!("  {}\t{}", stage.id(), text);
            }
        }
        if let Some(manager) = &manager {
            if !manager.save_prediction(&line, &r) {
                eprintln!("Failed to save the prediction");
            }
        }
        n_comments += 1;
    }
    let duration = start.elapsed();
    eprintln!("Elapsed: {} [sec]", duration.as_secs_f64());
    eprintln!(
        "Speed: {} [comments/sec]",
        n_comments as f64 / duration.as_secs_f64()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use sentimen::{
        Category, Classifier, Config, EncodedSequence, NormalizationTable, Preprocessor,
        StopwordSet, Vocabulary,
    };

    struct Fixed;

    impl Classifier for Fixed {
        fn n_classes(&self) -> usize {
            3
        }

        fn forward(&self, _: &EncodedSequence) -> sentimen::errors::Result<Vec<f64>> {
            Ok(vec![0.1, 0.2, 0.7])
        }
    }

    #[test]
    fn test_unusable_history_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        std::fs::write(&file, "").unwrap();
        let manager = history_manager(file.join("history"));
        assert_eq!(None, manager.storage_name());

        let preprocessor =
            Preprocessor::new(NormalizationTable::default(), StopwordSet::default()).unwrap();
        let predictor = Predictor::with_parts(
            preprocessor,
            Config::default(),
            Fixed,
            Vocabulary::from_words(["bagus"]).unwrap(),
        )
        .unwrap();
        let r = predictor.predict("bagus").unwrap();
        assert_eq!(Category::Positive, r.label());
        assert!(!manager.save_prediction("bagus", &r));
    }

    #[test]
    fn test_history_dir() {
        let dir = tempfile::tempdir().unwrap();
        let manager = history_manager(dir.path().join("history"));
        assert_eq!(Some("csv"), manager.storage_name());
    }
}
