use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use get_language_versions::cli::{self, Cli};
use get_language_versions::config::Configuration;
use get_language_versions::logging;
use get_language_versions::version::http::HttpFetcher;
use get_language_versions::version::lookup::VersionLookup;

/// Exit code for a run interrupted by Ctrl-C
const EXIT_INTERRUPTED: u8 = 130;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", cli::render_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> anyhow::Result<ExitCode> {
    let _guard = logging::init(cli.verbose, cli.log_json, cli.log_file.as_deref())
        .context("failed to open log file")?;

    if cli.list_languages {
        println!("{}", cli::render_languages());
        return Ok(ExitCode::SUCCESS);
    }

    let input = cli
        .configuration_input()
        .context("the following arguments are required: -l/--language")?;
    let config = Configuration::new(input)?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(config))
}

async fn run(config: Configuration) -> anyhow::Result<ExitCode> {
    let fetcher = Arc::new(HttpFetcher::new(config.timeout)?);
    let lookup = VersionLookup::new(fetcher);

    tokio::select! {
        result = lookup.run(&config) => {
            let versions = result.context("failed to look up versions")?;
            println!("{}", cli::render_versions(&config.language_name, &versions));
            Ok(ExitCode::SUCCESS)
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted, no versions printed");
            Ok(ExitCode::from(EXIT_INTERRUPTED))
        }
    }
}
