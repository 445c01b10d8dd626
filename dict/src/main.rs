use std::io;

use clap::Parser;
use ptrie_dict::cli::Args;
use ptrie_dict::config::Config;
use ptrie_dict::error::exit_with_error;

fn init_tracing(args: &Args) {
    // Logs stay off unless asked for, so they never mix with the summary lines on stdout.
    // --verbose honours RUST_LOG if set, otherwise shows info.
    let filter = if args.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(args.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(&args);

    let config = match Config::try_from(&args) {
        Ok(config) => config,
        Err(e) => exit_with_error(e),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = ptrie_dict::run(&config, stdin.lock(), &mut stdout.lock()) {
        exit_with_error(e);
    }
}
