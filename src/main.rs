use clap::Parser;
use tracing_subscriber::EnvFilter;

use sciutil::cli;
use sciutil::time::Stopwatch;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("sciutil=debug,info")
    } else {
        EnvFilter::new("sciutil=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let stopwatch = Stopwatch::new();

    match cli.command {
        cli::Commands::Locate(args) => {
            cli::locate::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Convert(args) => {
            cli::convert::run(args, cli.format, cli.verbose)?;
        }
    }

    if cli.verbose {
        stopwatch.stop();
    }

    Ok(())
}
