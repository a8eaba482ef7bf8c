mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::affordability::AffordabilityArgs;
use commands::analysis::AnalyzeArgs;
use commands::payment::PaymentArgs;
use commands::schedule::ScheduleArgs;

/// Mortgage amortization and affordability calculations
#[derive(Parser)]
#[command(
    name = "mca",
    version,
    about = "Mortgage amortization and affordability calculations",
    long_about = "A CLI for analysing fixed-rate mortgages: level monthly payments, \
                  yearly amortization schedules with an extra-payment track, \
                  front-end and back-end affordability ratios, and early-payoff \
                  comparisons. Scenarios come from flags, a JSON/YAML file, or stdin."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a full mortgage scenario (payment, schedule, ratios, payoff)
    Analyze(AnalyzeArgs),
    /// Level monthly payment for a loan
    Payment(PaymentArgs),
    /// Yearly amortization schedule rows
    Schedule(ScheduleArgs),
    /// Affordability ratios against the 28/36 guidelines
    Affordability(AffordabilityArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Analyze(args) => commands::analysis::run_analyze(args),
        Commands::Payment(args) => commands::payment::run_payment(args),
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Affordability(args) => commands::affordability::run_affordability(args),
        Commands::Version => {
            println!("mca {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
