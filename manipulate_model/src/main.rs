use std::fs;
use std::path::PathBuf;

use clap::Parser;
use sentimen::{load_first, Model};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "manipulate_model",
    about = "A program to manipulate trained models."
)]
struct Args {
    /// Input path of the model file
    #[arg(long)]
    model_in: PathBuf,

    /// Output path of the model file
    #[arg(long)]
    model_out: Option<PathBuf>,

    /// Output the vocabulary contained in the model.
    #[arg(long)]
    dump_vocab: Option<PathBuf>,

    /// Shrink the vocabulary so that every word id is less than the given size.
    #[arg(long)]
    vocab_size: Option<usize>,
}

#[derive(Serialize)]
struct VocabularyRecord<'a> {
    word: &'a str,
    id: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    eprintln!("Loading model file...");
    let mut model = load_first([&args.model_in], |path| {
        let mut f = zstd::Decoder::new(fs::File::open(path)?)?;
        Model::read(&mut f)
    })?;
    eprintln!("Configuration: {:?}", model.config());

    if let Some(size) = args.vocab_size {
        eprintln!("Truncating vocabulary...");
        model.truncate_vocabulary(size)?;
    }

    if let Some(path) = args.dump_vocab {
        eprintln!("Saving vocabulary file...");
        let file = fs::File::create(path)?;
        let mut wtr = csv::Writer::from_writer(file);
        for (i, word) in model.words().iter().enumerate() {
            wtr.serialize(VocabularyRecord { word, id: i + 1 })?;
        }
        wtr.flush()?;
    }

    if let Some(path) = args.model_out {
        eprintln!("Saving model file...");
        let mut f = zstd::Encoder::new(fs::File::create(path)?, 19)?;
        model.write(&mut f)?;
        f.finish()?;
    }

    Ok(())
}
