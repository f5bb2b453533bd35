mod commands;
mod input;
mod terminal;

use commands::{CommandLine, enumerate};
use subscout_common::{Domain, config::Config};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging(cfg.quiet);
    print::banner(cfg.no_banner, cfg.quiet);

    let domain: Domain = match commands.domain {
        Some(domain) => domain,
        None => input::prompt_domain()?,
    };

    print::header("getting ready for discovery", cfg.quiet);
    enumerate::enumerate(domain, &cfg).await?;
    print::end_of_program(cfg.quiet);
    Ok(())
}
