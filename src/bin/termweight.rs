//! `termweight` CLI: score postings with a chosen weighting model.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use termweight::{ModelConfig, ModelKind, TermStatistics, WeightingModel};

#[derive(Parser, Debug)]
#[command(author, version, about = "Term weighting CLI", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Model choice and the per-term statistics to configure it with.
#[derive(ClapArgs, Debug)]
struct ModelArgs {
    /// Weighting model name (DHGB2, SERSIMPLE).
    #[arg(short, long)]
    model: ModelKind,

    /// Override the model parameter (`b`).
    #[arg(short, long)]
    parameter: Option<f64>,

    /// Number of documents in the collection.
    #[arg(long)]
    docs: u64,

    /// Number of documents containing the term.
    #[arg(long)]
    df: u64,

    /// Occurrences of the term across the collection.
    #[arg(long, default_value_t = 0)]
    ctf: u64,

    /// Average document length.
    #[arg(long, default_value_t = 0.0)]
    avg_doc_len: f64,

    /// Weight of the term in the query.
    #[arg(long, default_value_t = 1.0)]
    key_frequency: f64,
}

impl ModelArgs {
    fn build(&self) -> Box<dyn WeightingModel> {
        let mut config = ModelConfig::new(self.model);
        config.parameter = self.parameter;
        let mut model = config.build();
        model.set_statistics(
            TermStatistics::new(self.docs, self.df)
                .with_term_frequency(self.ctf)
                .with_average_document_length(self.avg_doc_len)
                .with_key_frequency(self.key_frequency),
        );
        model
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available weighting models.
    Models,

    /// Score one (tf, doc_len) pair.
    Score {
        #[command(flatten)]
        model: ModelArgs,

        /// Term frequency in the document.
        #[arg(long)]
        tf: f64,

        /// Document length.
        #[arg(long)]
        doc_len: f64,
    },

    /// Score `tf doc_len` pairs, one per line, printing one score per line.
    ///
    /// Invalid rows are reported on stderr and skipped.
    Batch {
        #[command(flatten)]
        model: ModelArgs,

        /// Input file; reads stdin when absent.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn parse_pair(line: &str) -> Result<(f64, f64), String> {
    let mut fields = line.split_whitespace();
    let (Some(tf), Some(doc_len), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err("expected `tf doc_len`".to_string());
    };
    let tf = tf.parse::<f64>().map_err(|e| format!("tf: {e}"))?;
    let doc_len = doc_len.parse::<f64>().map_err(|e| format!("doc_len: {e}"))?;
    Ok((tf, doc_len))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        Commands::Models => {
            for kind in ModelKind::all() {
                println!("{kind}");
            }
        }
        Commands::Score { model, tf, doc_len } => {
            let model = model.build();
            let score = model.score(tf, doc_len)?;
            println!("{score:.4}");
        }
        Commands::Batch { model, input } => {
            let model = model.build();
            let reader: Box<dyn Read> = match input {
                Some(path) => Box::new(std::fs::File::open(path)?),
                None => Box::new(std::io::stdin()),
            };

            let mut failed = 0usize;
            for (i, raw) in BufReader::new(reader).split(b'\n').enumerate() {
                let raw = raw?;
                let line = match std::str::from_utf8(&raw) {
                    Ok(line) => line,
                    Err(e) => {
                        failed += 1;
                        eprintln!("line {}: {e}", i + 1);
                        continue;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                let scored = parse_pair(line)
                    .and_then(|(tf, doc_len)| model.score(tf, doc_len).map_err(|e| e.to_string()));
                match scored {
                    Ok(score) => println!("{score:.4}"),
                    Err(e) => {
                        failed += 1;
                        eprintln!("line {}: {e}", i + 1);
                    }
                }
            }
            if failed > 0 {
                log::warn!("{failed} row(s) skipped");
            }
        }
    }

    Ok(())
}
