use std::collections::HashMap;
use std::fs;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use sentimen::{Config, Model};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "convert_model",
    about = "A program to convert exported embedding classifier weights."
)]
struct Args {
    /// JSON file with `word_index`, `embeddings`, `dense_kernel`, and `dense_bias`
    #[arg(long)]
    input: PathBuf,

    /// Sentimen model file
    #[arg(long)]
    model_out: PathBuf,

    /// Length of encoded sequences
    #[arg(long, default_value = "60")]
    max_length: usize,

    /// Vocabulary size. Defaults to the number of embedding rows.
    #[arg(long)]
    vocab_size: Option<usize>,
}

/// Weights exported from a trained embedding classifier.
#[derive(Deserialize)]
struct ExportedWeights {
    word_index: HashMap<String, usize>,
    /// (vocabulary size) x dim, row 0 is padding.
    embeddings: Vec<Vec<f32>>,
    /// dim x n_classes
    dense_kernel: Vec<Vec<f32>>,
    dense_bias: Vec<f32>,
}

impl ExportedWeights {
    fn into_model(self, config: Config) -> Result<Model, Box<dyn std::error::Error>> {
        let n_rows = self.embeddings.len();
        if n_rows == 0 {
            return Err("no embedding rows".into());
        }
        let embedding_dim = self.embeddings.first().map_or(0, Vec::len);

        // Words without an embedding row are unknown to the classifier.
        let mut pairs: Vec<_> = self
            .word_index
            .into_iter()
            .filter(|&(_, id)| id < n_rows)
            .collect();
        pairs.sort_unstable_by_key(|&(_, id)| id);
        let mut words = Vec::with_capacity(pairs.len());
        for (word, id) in pairs {
            if id != words.len() + 1 {
                return Err(format!("word id {} of {:?} is not contiguous", id, word).into());
            }
            words.push(word);
        }

        let mut embeddings = Vec::with_capacity((words.len() + 1) * embedding_dim);
        for row in &self.embeddings[..words.len() + 1] {
            if row.len() != embedding_dim {
                return Err("embedding rows have different lengths".into());
            }
            embeddings.extend_from_slice(row);
        }

        if self.dense_kernel.len() != embedding_dim {
            return Err(format!(
                "dense kernel has {} rows, expected {}",
                self.dense_kernel.len(),
                embedding_dim
            )
            .into());
        }
        let n_classes = self.dense_bias.len();
        let mut weights = vec![0.; n_classes * embedding_dim];
        for (j, row) in self.dense_kernel.iter().enumerate() {
            if row.len() != n_classes {
                return Err("dense kernel rows have different lengths".into());
            }
            for (k, &w) in row.iter().enumerate() {
                weights[k * embedding_dim + j] = w;
            }
        }

        Ok(Model::new(
            config,
            words,
            embedding_dim,
            embeddings,
            weights,
            self.dense_bias,
        )?)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    eprintln!("Loading weight file...");
    let f = BufReader::new(fs::File::open(args.input)?);
    let weights: ExportedWeights = serde_json::from_reader(f)?;

    let config = Config::default()
        .max_length(args.max_length)
        .vocab_size(args.vocab_size.unwrap_or(weights.embeddings.len()));
    let model = weights.into_model(config)?;
    eprintln!(
        "Vocabulary: {} words, configuration: {:?}",
        model.words().len(),
        model.config()
    );

    eprintln!("Saving model file...");
    let mut f = zstd::Encoder::new(fs::File::create(args.model_out)?, 19)?;
    model.write(&mut f)?;
    f.finish()?;

    Ok(())
}
