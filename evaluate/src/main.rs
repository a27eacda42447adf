use std::fs::File;
use std::io::{prelude::*, stdin};
use std::path::PathBuf;

use clap::Parser;
use sentimen::{load_first, Category, Model, Predictor};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "evaluate",
    about = "A program to evaluate the accuracy of Sentimen. Each input line is `label<TAB>text`."
)]
struct Args {
    /// The model file to use when classifying text
    #[arg(long)]
    model: PathBuf,
}

/// Counts of (reference, hypothesis) pairs.
#[derive(Debug, Default)]
struct ConfusionMatrix([[usize; 3]; 3]);

impl ConfusionMatrix {
    fn add(&mut self, reference: Category, hypothesis: Category) {
        self.0[reference.index()][hypothesis.index()] += 1;
    }

    fn total(&self) -> usize {
        self.0.iter().flatten().sum()
    }

    fn accuracy(&self) -> f64 {
        let correct: usize = (0..3).map(|i| self.0[i][i]).sum();
        ratio(correct, self.total())
    }

    /// Returns precision, recall, and F1 of a category.
    fn scores(&self, category: Category) -> (f64, f64, f64) {
        let i = category.index();
        let tp = self.0[i][i];
        let n_sys: usize = (0..3).map(|r| self.0[r][i]).sum();
        let n_ref: usize = self.0[i].iter().sum();
        let precision = ratio(tp, n_sys);
        let recall = ratio(tp, n_ref);
        let f1 = if precision + recall == 0. {
            0.
        } else {
            2. * precision * recall / (precision + recall)
        };
        (precision, recall, f1)
    }
}

fn ratio(n: usize, d: usize) -> f64 {
    if d == 0 {
        0.
    } else {
        n as f64 / d as f64
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    eprintln!("Loading model file...");
    let model = load_first([&args.model], |path| {
        let mut f = zstd::Decoder::new(File::open(path)?)?;
        Model::read(&mut f)
    })?;
    let predictor = Predictor::from_model(sentimen_rules::preprocessor()?, model)?;

    eprintln!("Start classification");

    let mut references = vec![];
    let mut texts = vec![];
    for line in stdin().lock().lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let (label, text) = line
            .split_once('\t')
            .ok_or_else(|| format!("missing a tab: {}", line))?;
        references.push(label.parse::<Category>()?);
        texts.push(text.to_string());
    }
    let results = predictor.predict_batch(&texts)?;

    let mut matrix = ConfusionMatrix::default();
    for (&reference, result) in references.iter().zip(&results) {
        matrix.add(reference, result.label());
    }

    println!("Accuracy: {}", matrix.accuracy());
    for category in Category::ALL {
        let (precision, recall, f1) = matrix.scores(category);
        println!(
            "{}: Precision: {}, Recall: {}, F1: {}",
            category, precision, recall, f1
        );
    }
    println!("Confusion matrix (rows: reference, columns: prediction)");
    for category in Category::ALL {
        let row = &matrix.0[category.index()];
        println!("{}\t{}\t{}\t{}", category, row[0], row[1], row[2]);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores() {
        let mut m = ConfusionMatrix::default();
        m.add(Category::Positive, Category::Positive);
        m.add(Category::Positive, Category::Negative);
        m.add(Category::Negative, Category::Negative);
        m.add(Category::Neutral, Category::Negative);
        assert_eq!(4, m.total());
        assert_eq!(0.5, m.accuracy());
        let (p, r, f1) = m.scores(Category::Negative);
        assert!((p - 1. / 3.).abs() < 1e-12);
        assert_eq!(1., r);
        assert!((f1 - 0.5).abs() < 1e-12);
        assert_eq!((0., 0., 0.), m.scores(Category::Neutral));
    }

    #[test]
    fn test_empty() {
        let m = ConfusionMatrix::default();
        assert_eq!(0., m.accuracy());
        assert_eq!((0., 0., 0.), m.scores(Category::Positive));
    }
}
