use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use fpminer::io::{load_delimited, load_document, load_order_files, write_document, OrderColumns};
use fpminer::report::RunReport;
use fpminer::{mine, MiningConfig};

#[derive(Parser, Debug)]
#[command(name = "fpminer", version, about = "Frequent itemsets and association rules via FP-Growth")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mine frequent itemsets and rules from a transaction file
    Mine {
        /// Attribute table (.csv) or keyed document (.json)
        input: PathBuf,

        /// Input format; inferred from the extension when omitted
        #[arg(long, value_enum)]
        format: Option<InputFormat>,

        /// JSON file with `min_support` / `min_confidence`
        #[arg(long)]
        config: Option<PathBuf>,

        /// Minimum support as a fraction of the transaction count
        #[arg(long)]
        min_support: Option<f64>,

        /// Minimum rule confidence
        #[arg(long)]
        min_confidence: Option<f64>,
    },

    /// Group order-line files into a keyed JSON document
    GroupOrders {
        /// Order-line files sharing one header
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        #[arg(long, short, default_value = "dataset.json")]
        output: PathBuf,

        #[arg(long, default_value = "Order Number")]
        order_column: String,

        #[arg(long, default_value = "Item Name")]
        label_column: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    fn infer(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Mine {
            input,
            format,
            config,
            min_support,
            min_confidence,
        } => {
            let mut mining_config = match config {
                Some(path) => MiningConfig::from_json_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => MiningConfig::default(),
            };
            if let Some(min_support) = min_support {
                mining_config = mining_config.with_min_support(min_support);
            }
            if let Some(min_confidence) = min_confidence {
                mining_config = mining_config.with_min_confidence(min_confidence);
            }

            let set = match format.unwrap_or_else(|| InputFormat::infer(&input)) {
                InputFormat::Csv => load_delimited(&input),
                InputFormat::Json => load_document(&input),
            }
            .with_context(|| format!("loading transactions from {}", input.display()))?;

            let mined = mine(&set, &mining_config).context("mining failed")?;
            print!(
                "{}",
                RunReport {
                    catalog: &set.catalog,
                    num_transactions: set.len(),
                    config: &mining_config,
                    mined: &mined,
                }
            );
        }
        Command::GroupOrders {
            inputs,
            output,
            order_column,
            label_column,
        } => {
            let columns = OrderColumns {
                order: order_column,
                label: label_column,
            };
            let groups = load_order_files(inputs.as_slice(), &columns).context("grouping order lines")?;
            let file = File::create(&output)
                .with_context(|| format!("creating {}", output.display()))?;
            write_document(&groups, BufWriter::new(file))
                .with_context(|| format!("writing {}", output.display()))?;
            tracing::info!(orders = groups.len(), output = %output.display(), "wrote dataset");
        }
    }
    Ok(())
}
