use clap::Parser;
use poolguide::cli::{self, CliArgs};
use poolguide::init_logging;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging()?;
    tracing::debug!("poolguide {} built {}", poolguide::VERSION, poolguide::BUILD_DATE);

    let output = cli::execute(args)?;
    println!("{}", output);

    Ok(())
}
