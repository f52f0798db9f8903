use anyhow::Result;
use clap::Parser;

use gitea_work_report::cli::{normalize, Cli};
use gitea_work_report::{logging, runner, util};

fn main() -> Result<()> {
  // Values already in the environment win over .env
  let _ = dotenvy::dotenv();

  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  logging::init_tracing(cli.verbose);

  let cfg = normalize(cli)?;

  runner::run(&cfg)
}
