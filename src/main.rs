use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;

fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "glossgen=warn",
        1 => "glossgen=info",
        _ => "glossgen=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = commands::handle_command(&cli) {
        services::output::print_error(cli.json, &err);
        std::process::exit(1);
    }
}
