use anyhow::{Context, Result};
use clap::Parser;
use decicalc::{console, Calculator, Config, DEFAULT_DIVISION_PRECISION};
use log::info;

/// Interactive two-operand decimal calculator.
#[derive(Parser, Debug)]
#[command(name = "decicalc", version)]
struct Cli {
    /// Significant digits kept when a quotient does not terminate (1-100)
    #[arg(long, default_value_t = DEFAULT_DIVISION_PRECISION)]
    precision: u64,

    /// Skip the banner and help block on start-up
    #[arg(long)]
    quiet: bool,

    /// Log level for diagnostics written to stderr
    #[arg(long, default_value = "warn")]
    log_level: log::LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    let config = Config {
        division_precision: cli.precision,
        banner: !cli.quiet,
    };
    let calculator = Calculator::new(config).context("invalid calculator configuration")?;
    info!("starting with {:?}", calculator.config());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    console::run(&calculator, stdin.lock(), &mut stdout.lock())
}
