use callsign_search::cli::Cli;
use callsign_search::config::SearchConfig;
use callsign_search::module::renderer::render_report;
use callsign_search::module::CallsignSearch;

use clap::Parser;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match SearchConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let _logging_guard =
        callsign_search::logging::init_logging(&config.log_level, config.log_dir.as_deref());

    tracing::debug!("Looking up {} (pretty: {})", cli.callsign, cli.pretty);

    let result = match CallsignSearch::new(&config) {
        Ok(search) => search.lookup(&cli.callsign).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(report) => {
            print!("{}", render_report(&report, cli.pretty));
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("Lookup of {} failed: {:?}", cli.callsign, e);
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
