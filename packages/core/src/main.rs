use std::io;

use clap::Parser;
use dotenvy::dotenv;

use delivery_fee_calculator::adapter::{parse_now, run_pricing, TerminalAdapter};
use delivery_fee_calculator::cli::Cli;
use delivery_fee_calculator::config::Config;
use delivery_fee_calculator::error::AppError;
use delivery_fee_calculator::logging::init_logging;
use delivery_fee_calculator::pricing::{Clock, FixedClock, PricingOrchestrator, SystemClock};

fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = Config::from_env(cli).map_err(AppError::Config)?;

    tracing::debug!("Running with config: {:?}", config);

    let clock: Box<dyn Clock> = match &cli.now {
        Some(raw) => Box::new(FixedClock(parse_now(raw)?)),
        None => Box::new(SystemClock),
    };

    let engine = PricingOrchestrator::new(config.pricing);
    let mut adapter = TerminalAdapter::new(
        cli.raw_input(),
        config.local_offset,
        config.currency_symbol,
        cli.output_format(),
        io::stdout().lock(),
    );

    run_pricing(&mut adapter, &engine, clock.as_ref())?;
    Ok(())
}
