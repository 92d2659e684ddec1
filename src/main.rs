mod analysis;
mod config;
mod http;
mod logging;
mod recorder;
mod store;
mod suite;

use std::process::ExitCode;

use config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("apiprobe: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Run the full probe: check suite first, then the cumulative status
/// distribution. Returns the number of failed checks.
async fn run() -> Result<usize, String> {
    let config = Config::from_env();
    logging::init_file_logging(&config.log_path)?;

    let conn = store::open_db(&config.db_path)?;
    let client = reqwest::Client::new();

    let report = suite::run_suite(&client, &conn, &config).await;
    report.print();

    analysis::print_distribution(&conn)?;
    Ok(report.failed)
}
