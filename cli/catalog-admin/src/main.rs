use std::process::ExitCode;

use anyhow::Result;
use bpaf::{Args, ParseFailure};
use commands::{CatalogAdminArgs, CatalogAdminCli};
use tracing::debug;
use utils::logger::init_logger;
use utils::message;

mod commands;
mod config;
mod form;
mod render;
mod state;
mod utils;

async fn run(args: CatalogAdminArgs) -> Result<()> {
    init_logger(Some(args.verbosity));
    let config = config::Config::parse()?;
    args.handle(config).await?;
    Ok(())
}

fn main() -> ExitCode {
    // initialize logger with "best guess" defaults
    // updating the logger conf is cheap, so we reinitialize whenever we get more information
    init_logger(None);

    // Run the argument parser
    //
    // Pass through Completion "failure"; in completion mode this needs
    // to be printed as is to work with the shell completion frontends
    //
    // Pass through Stdout failure; this represents `--help`
    let args = commands::catalog_admin_cli().run_inner(Args::current_args());

    if let Some(parse_err) = args.as_ref().err() {
        match parse_err {
            ParseFailure::Stdout(m, _) => {
                print!("{m:80}");
                return ExitCode::from(0);
            },
            ParseFailure::Stderr(m) => {
                message::error(format!("{m:80}"));
                return ExitCode::from(1);
            },
            ParseFailure::Completion(c) => {
                print!("{c}");
                return ExitCode::from(0);
            },
        }
    }

    // Errors handled above
    let CatalogAdminCli(args) = args.unwrap();

    let runtime = tokio::runtime::Runtime::new().unwrap();

    // Print errors and exit with status 1 on failure
    match runtime.block_on(run(args)) {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            debug!("{:#}", e);
            message::error(format!("{e:#}"));
            ExitCode::from(1)
        },
    }
}
