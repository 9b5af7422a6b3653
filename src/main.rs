mod domain;
mod engine;
mod error;
mod logging;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use domain::DispatchConfig;
use engine::dispatch::run_dispatch;
use error::describe_error;
use output::StdoutSink;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_tracing();

    match run_dispatch(&DispatchConfig::default(), Arc::new(StdoutSink)).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %describe_error(&err), "Dispatch could not start");
            ExitCode::FAILURE
        }
    }
}
