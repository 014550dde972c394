//! Degrees CLI - Command-line interface for Degrees
//!
//! This is the entry point for users tracing connections between
//! people through the works they share credits in.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "degrees")]
#[command(author = "Degrees Contributors")]
#[command(version)]
#[command(about = "Shortest connections between people through shared works", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace the shortest connection between two people
    Trace {
        /// Name of the person to start from
        source: String,

        /// Name of the person to reach
        target: String,

        /// Dataset directory (people.csv, works.csv, credits.csv)
        #[arg(short, long, default_value = "data")]
        data: PathBuf,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List a person's direct co-participants
    Neighbors {
        /// Name of the person
        name: String,

        /// Dataset directory (people.csv, works.csv, credits.csv)
        #[arg(short, long, default_value = "data")]
        data: PathBuf,

        /// Maximum entries to print
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show dataset statistics
    Stats {
        /// Dataset directory (people.csv, works.csv, credits.csv)
        #[arg(short, long, default_value = "data")]
        data: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Trace {
            source,
            target,
            data,
            json,
        } => commands::trace(&source, &target, &data, json),
        Commands::Neighbors {
            name,
            data,
            limit,
            json,
        } => commands::neighbors(&name, &data, limit, json),
        Commands::Stats { data } => commands::stats(&data),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
