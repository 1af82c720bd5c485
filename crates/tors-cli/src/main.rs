//! Tors CLI: the `tors` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { lattice, json } => commands::summary::run(lattice, json),

        Commands::Kappa { lattice, json } => commands::kappa::run(lattice, json),

        Commands::Labels { lattice, json } => commands::labels::run(lattice, json),

        Commands::Heart {
            lattice,
            lower,
            upper,
            json,
        } => commands::heart::run(lattice, lower, upper, json),

        Commands::Derived {
            lattice,
            kind,
            json,
        } => commands::derived::run(lattice, kind, json),

        Commands::Pairs { lattice, json } => commands::pairs::run(lattice, json),

        Commands::Complex {
            lattice,
            positive,
            json,
        } => commands::complex::run(lattice, positive, json),
    }
}
