//! Command-line client for the One Piece character classifier.
//!
//! Talks to the same external prediction endpoint as the browser UI:
//! single-image prediction, batch processing with report files, character
//! info, and endpoint health/model queries.

mod encode;
mod report;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use classify::characters;
use classify::protocol::{PredictError, PredictRequest, PredictResponse, Prediction};
use serde_json::Value;

use crate::report::{BatchSummary, FileOutcome};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Encode(#[from] encode::EncodeError),
    #[error("prediction failed: {0}")]
    Predict(#[from] PredictError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("directory not found: {0}")]
    DirectoryNotFound(String),
    #[error("no image files found in {0}")]
    NoImages(String),
    #[error("unknown character `{0}`; run `list` for available identifiers")]
    UnknownCharacter(String),
    #[error("server returned HTTP {status} for {path}")]
    ServerStatus { status: u16, path: String },
}

#[derive(Parser, Debug)]
#[command(name = "onepiece-cli", about = "One Piece character classifier CLI")]
struct Cli {
    /// Base URL of the prediction endpoint.
    #[arg(long, env = "ONEPIECE_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a single image file.
    Predict { image: PathBuf },
    /// Classify every image in a directory and write report files.
    Batch {
        input_dir: PathBuf,
        /// Directory the report files are written to.
        #[arg(long, default_value = "batch_reports")]
        output_dir: PathBuf,
    },
    /// Show information about a character.
    Info { character: String },
    /// List all known characters.
    List,
    /// Show model metadata from the endpoint.
    Stats,
    /// Check endpoint health.
    Ping,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: cli.base_url.trim_end_matches('/').to_owned(),
    };

    match cli.command {
        Command::Predict { image } => run_predict(&ctx, &image).await,
        Command::Batch {
            input_dir,
            output_dir,
        } => run_batch(&ctx, &input_dir, &output_dir).await,
        Command::Info { character } => run_info(&character),
        Command::List => {
            run_list();
            Ok(())
        }
        Command::Stats => run_stats(&ctx).await,
        Command::Ping => run_ping(&ctx).await,
    }
}

/// POST one encoded image to `/predict` and unwrap the canonical response.
///
/// The body is parsed regardless of HTTP status: the endpoint reports
/// failures as `{"error": ...}` JSON with 4xx/5xx statuses.
async fn predict_file(
    client: &reqwest::Client,
    ctx: &CliContext,
    path: &Path,
) -> Result<Prediction, CliError> {
    let image = encode::file_to_data_url(path)?;
    let response = client
        .post(format!("{}/predict", ctx.base_url))
        .json(&PredictRequest { image })
        .send()
        .await?;
    let body = response.json::<PredictResponse>().await?;
    Ok(body.into_result()?)
}

async fn run_predict(ctx: &CliContext, image: &Path) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let prediction = predict_file(&client, ctx, image).await?;
    print_prediction(image, &prediction);
    Ok(())
}

fn print_prediction(image: &Path, prediction: &Prediction) {
    let resolved = classify::render::resolve(prediction);

    println!("PREDICTION RESULTS");
    println!("{}", "=".repeat(50));
    println!("Image:       {}", image.display());
    println!("Character:   {}", prediction.character);
    if let Some(confidence) = prediction.effective_confidence() {
        println!("Confidence:  {:.2}%", f64::from(confidence) * 100.0);
    }
    println!("Name:        {}", resolved.name);
    println!("Crew:        {}", resolved.crew);
    println!("Bounty:      {}", resolved.bounty);
    println!("Devil Fruit: {}", resolved.fruit);
    println!("Description: {}", resolved.description);

    let top = classify::render::chart_rows(&prediction.probabilities, Some(3));
    if !top.is_empty() {
        println!();
        println!("TOP PREDICTIONS");
        for (rank, row) in top.iter().enumerate() {
            println!(
                "  {}. {}: {:.2}%",
                rank + 1,
                row.label,
                f64::from(row.fraction) * 100.0
            );
        }
    }
}

async fn run_batch(ctx: &CliContext, input_dir: &Path, output_dir: &Path) -> Result<(), CliError> {
    if !input_dir.is_dir() {
        return Err(CliError::DirectoryNotFound(input_dir.display().to_string()));
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(input_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && encode::is_image_path(path))
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(CliError::NoImages(input_dir.display().to_string()));
    }
    println!("Found {} images to process", files.len());

    let client = reqwest::Client::new();
    let mut outcomes = Vec::with_capacity(files.len());
    for (index, file) in files.iter().enumerate() {
        println!(
            "Processing {}/{}: {}",
            index + 1,
            files.len(),
            file.file_name()
                .map_or_else(|| file.display().to_string(), |name| name
                    .to_string_lossy()
                    .into_owned())
        );
        let outcome = match predict_file(&client, ctx, file).await {
            Ok(prediction) => {
                match prediction.effective_confidence() {
                    Some(confidence) => println!(
                        "  {} ({:.2}%)",
                        prediction.character,
                        f64::from(confidence) * 100.0
                    ),
                    None => println!("  {}", prediction.character),
                }
                Ok(prediction)
            }
            Err(error) => {
                println!("  error: {error}");
                Err(error.to_string())
            }
        };
        outcomes.push(FileOutcome {
            path: file.display().to_string(),
            outcome,
        });
    }

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    let summary = BatchSummary::build(&outcomes, timestamp);
    print_batch_summary(&summary);

    let paths = report::write_reports(output_dir, &summary, &outcomes)?;
    println!();
    println!("Reports saved to: {}", output_dir.display());
    println!("- Summary: {}", paths.summary.display());
    println!("- Detailed CSV: {}", paths.csv.display());
    println!("- Text report: {}", paths.text.display());
    Ok(())
}

fn print_batch_summary(summary: &BatchSummary) {
    println!();
    println!("BATCH PROCESSING SUMMARY");
    println!("{}", "=".repeat(40));
    println!("Total images: {}", summary.total_images);
    println!("Successful: {}", summary.successful_predictions);
    println!("Failed: {}", summary.failed_predictions);
    println!("Success rate: {:.2}%", summary.success_rate * 100.0);

    if summary.successful_predictions > 0 {
        println!();
        println!("CHARACTER DISTRIBUTION");
        let mut entries: Vec<(&String, &usize)> = summary.character_distribution.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1));
        for (character, count) in entries {
            #[allow(clippy::cast_precision_loss)]
            let share = *count as f64 / summary.successful_predictions as f64 * 100.0;
            println!("  {character}: {count} ({share:.1}%)");
        }

        println!();
        println!("CONFIDENCE STATISTICS");
        println!("  Average: {:.2}%", summary.average_confidence * 100.0);
        println!("  Min: {:.2}%", summary.min_confidence * 100.0);
        println!("  Max: {:.2}%", summary.max_confidence * 100.0);
    }
}

fn run_info(character: &str) -> Result<(), CliError> {
    let record = characters::lookup(character)
        .ok_or_else(|| CliError::UnknownCharacter(character.to_owned()))?;
    println!("CHARACTER INFORMATION: {}", record.id);
    println!("{}", "=".repeat(50));
    println!("Name: {}", record.name);
    println!("Crew: {}", record.crew);
    println!("Bounty: {}", record.bounty);
    println!("Devil Fruit: {}", record.fruit);
    println!("Description: {}", record.description);
    Ok(())
}

fn run_list() {
    println!("AVAILABLE CHARACTERS ({})", characters::CHARACTERS.len());
    println!("{}", "=".repeat(50));
    for record in characters::CHARACTERS {
        println!("  {}: {} ({})", record.id, record.name, record.crew);
    }
}

async fn run_stats(ctx: &CliContext) -> Result<(), CliError> {
    let json = api_get(ctx, "/api/model-info").await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

async fn run_ping(ctx: &CliContext) -> Result<(), CliError> {
    api_get(ctx, "/api/health").await?;
    println!("ok");
    Ok(())
}

async fn api_get(ctx: &CliContext, path: &str) -> Result<Value, CliError> {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}{}", ctx.base_url, path))
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerStatus {
            status: status.as_u16(),
            path: path.to_owned(),
        });
    }
    Ok(response.json::<Value>().await?)
}
