use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestErrorKind {
    Connect,
    Timeout,
    Read,
    Request,
    Panicked,
}

impl RequestErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestErrorKind::Connect => "CONNECT",
            RequestErrorKind::Timeout => "TIMEOUT",
            RequestErrorKind::Read => "READ",
            RequestErrorKind::Request => "REQUEST",
            RequestErrorKind::Panicked => "PANICKED",
        }
    }
}

/// Terminal state of one request task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success {
        wave: u64,
        body: String,
    },
    Failure {
        wave: u64,
        kind: RequestErrorKind,
        message: String,
    },
}

impl RequestOutcome {
    pub fn wave(&self) -> u64 {
        match self {
            RequestOutcome::Success { wave, .. } | RequestOutcome::Failure { wave, .. } => *wave,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success { .. })
    }
}

impl Display for RequestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestOutcome::Success { wave, body } => write!(f, "Request {wave}: {body}"),
            RequestOutcome::Failure { message, .. } => write!(f, "{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_renders_wave_and_body() {
        let outcome = RequestOutcome::Success {
            wave: 41,
            body: "ok".to_string(),
        };
        assert_eq!(outcome.to_string(), "Request 41: ok");
        assert_eq!(outcome.wave(), 41);
        assert!(outcome.is_success());
    }

    #[test]
    fn failure_renders_only_the_message() {
        let outcome = RequestOutcome::Failure {
            wave: 7,
            kind: RequestErrorKind::Timeout,
            message: "operation timed out".to_string(),
        };
        assert_eq!(outcome.to_string(), "operation timed out");
        assert!(!outcome.is_success());
        assert!(!outcome.to_string().starts_with("Request "));
    }

    #[test]
    fn error_kinds_have_stable_names() {
        assert_eq!(RequestErrorKind::Connect.as_str(), "CONNECT");
        assert_eq!(RequestErrorKind::Timeout.as_str(), "TIMEOUT");
        assert_eq!(RequestErrorKind::Read.as_str(), "READ");
        assert_eq!(RequestErrorKind::Request.as_str(), "REQUEST");
        assert_eq!(RequestErrorKind::Panicked.as_str(), "PANICKED");
    }
}
