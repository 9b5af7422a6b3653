use crate::domain::{DispatchConfig, RequestErrorKind, RequestOutcome};
use crate::engine::http::{build_client, execute_single_request};
use crate::error::DispatchError;
use crate::output::OutcomeSink;
use reqwest::Client;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchSummary {
    pub waves: u64,
    pub attempts: u64,
}

/// Runs every wave in order. Per-request failures go to the sink, never to the caller.
pub async fn run_dispatch(
    config: &DispatchConfig,
    sink: Arc<dyn OutcomeSink>,
) -> Result<DispatchSummary, DispatchError> {
    config.validate()?;
    let client = Arc::new(build_client(config)?);
    let url: Arc<str> = Arc::from(config.target_url.as_str());

    tracing::info!(
        config = %serde_json::to_string(config).unwrap_or_default(),
        total_requests = config.total_requests(),
        "Starting dispatch"
    );

    let mut summary = DispatchSummary::default();
    for wave in 0..config.wave_count {
        summary.attempts +=
            run_wave(client.clone(), url.clone(), wave, config.batch_size, sink.clone()).await;
        summary.waves += 1;
    }

    tracing::info!(
        waves = summary.waves,
        attempts = summary.attempts,
        "Dispatch finished"
    );
    Ok(summary)
}

/// Launches `batch_size` request tasks and returns once all of them are terminal.
pub async fn run_wave(
    client: Arc<Client>,
    url: Arc<str>,
    wave: u64,
    batch_size: u32,
    sink: Arc<dyn OutcomeSink>,
) -> u64 {
    let mut handles = Vec::with_capacity(batch_size as usize);
    for _ in 0..batch_size {
        let client = client.clone();
        let url = url.clone();
        let sink = sink.clone();

        let handle = tokio::spawn(async move {
            let outcome = execute_single_request(&client, &url, wave).await;
            if let RequestOutcome::Failure { kind, message, .. } = &outcome {
                tracing::debug!(wave, kind = kind.as_str(), error = %message, "Request failed");
            }
            sink.record(&outcome);
        });
        handles.push(handle);
    }
    let launched = handles.len() as u64;

    for handle in handles {
        if let Err(err) = handle.await {
            tracing::error!(wave, error = %err, "Request task aborted");
            sink.record(&RequestOutcome::Failure {
                wave,
                kind: RequestErrorKind::Panicked,
                message: format!("Request task aborted: {err}"),
            });
        }
    }

    tracing::debug!(wave, launched, "Wave complete");
    launched
}
