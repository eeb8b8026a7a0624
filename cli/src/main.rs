mod commands;
mod terminal;

use commands::{CommandLine, scan};
use ftpsweep_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg: Config = commands.to_config();
    print::banner(cfg.quiet);

    scan::scan(&cfg).await
}
