use crate::domain::{DispatchConfig, RequestErrorKind, RequestOutcome};
use crate::error::{describe_error, DispatchError};
use reqwest::Client;

/// One client per run; its connection pool is shared by every task.
pub fn build_client(config: &DispatchConfig) -> Result<Client, DispatchError> {
    Client::builder()
        .timeout(config.request_timeout())
        .build()
        .map_err(DispatchError::ClientBuild)
}

fn classify_send_error(err: &reqwest::Error) -> RequestErrorKind {
    if err.is_timeout() {
        return RequestErrorKind::Timeout;
    }
    if err.is_connect() {
        return RequestErrorKind::Connect;
    }
    RequestErrorKind::Request
}

fn classify_body_error(err: &reqwest::Error) -> RequestErrorKind {
    if err.is_timeout() {
        RequestErrorKind::Timeout
    } else {
        RequestErrorKind::Read
    }
}

/// Issues one GET and reads the whole body. The status code is not inspected.
pub async fn execute_single_request(client: &Client, url: &str, wave: u64) -> RequestOutcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            return RequestOutcome::Failure {
                wave,
                kind: classify_send_error(&err),
                message: describe_error(&err),
            };
        }
    };

    match response.bytes().await {
        Ok(bytes) => RequestOutcome::Success {
            wave,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        },
        Err(err) => RequestOutcome::Failure {
            wave,
            kind: classify_body_error(&err),
            message: describe_error(&err),
        },
    }
}
