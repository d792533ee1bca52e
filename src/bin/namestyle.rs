//! Namestyle CLI - naming-convention checking and fixing for identifiers.

use clap::Parser;

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check(args) => cli::check_command(args),
        Commands::Fix(args) => cli::fix_command(args),
        Commands::Build(args) => cli::build_command(args),
        Commands::Segment(args) => cli::segment_command(args),
        Commands::PrintDefaultRule => cli::print_default_rule(),
        Commands::InitRule(args) => cli::init_rule(args),
        Commands::ValidateRule(args) => cli::validate_rule(args),
    }
}
