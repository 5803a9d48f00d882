//! # wagefit-cli
//!
//! Command-line interface for the wagefit salary regression library.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;

use wagefit_core::prelude::*;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "wagefit")]
#[command(about = "Salary regression CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute statistics and fit a regression line
    Analyze {
        /// Input CSV file with experience,salary rows
        #[arg(short, long)]
        input: PathBuf,

        /// Also predict the salary for this many years of experience
        #[arg(short, long)]
        predict: Option<f64>,

        /// Write the results as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Predict a salary from a fitted regression line
    Predict {
        /// Input CSV file with experience,salary rows
        #[arg(short, long)]
        input: PathBuf,

        /// Years of experience to predict for
        #[arg(short, long)]
        experience: f64,
    },
}

/// Run analyze command
fn run_analyze(input: PathBuf, predict: Option<f64>, output: Option<PathBuf>) -> CliResult<()> {
    let obs = load_csv(&input).map_err(|e| e.to_string())?;
    println!(
        "Loaded {} observations from {:?}",
        obs.len(),
        input.file_name().unwrap_or_default()
    );

    let stats = summarize(&obs).map_err(|e| e.to_string())?;
    let fit = fit_least_squares(&obs).map_err(|e| e.to_string())?;

    println!("Mean years of experience:   {:.4}", stats.mean_x);
    println!("Mean salary:                {:.4}", stats.mean_y);
    println!("Median years of experience: {:.4}", stats.median_x);
    println!("Median salary:              {:.4}", stats.median_y);
    println!("Slope (beta_1):             {:.4}", fit.slope());
    println!("Intercept (beta_0):         {:.4}", fit.intercept());
    println!("R-squared:                  {:.4}", fit.r_squared());

    if let Some(years) = predict {
        println!(
            "Predicted salary for {} years of experience: {:.2}",
            years,
            fit.predict(years)
        );
    }

    write_analysis_results(&stats, &fit, predict, output.as_ref())?;

    Ok(())
}

/// Run predict command
fn run_predict(input: PathBuf, experience: f64) -> CliResult<()> {
    let obs = load_csv(&input).map_err(|e| e.to_string())?;
    let fit = fit_least_squares(&obs).map_err(|e| e.to_string())?;

    println!(
        "Predicted salary for {} years of experience: {:.2}",
        experience,
        fit.predict(experience)
    );

    Ok(())
}

/// Write analysis results to a JSON file if requested
fn write_analysis_results(
    stats: &SummaryStats,
    fit: &LinearFit,
    predict: Option<f64>,
    output: Option<&PathBuf>,
) -> CliResult<()> {
    if let Some(path) = output {
        let json = serde_json::json!({
            "statistics": stats,
            "fit": fit,
            "prediction": predict.map(|years| {
                serde_json::json!({
                    "years_experience": years,
                    "salary": fit.predict(years)
                })
            }),
        });

        let mut file =
            File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, &json)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Results written to {:?}", path);
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input,
            predict,
            output,
        } => run_analyze(input, predict, output),

        Commands::Predict { input, experience } => run_predict(input, experience),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
