use crate::domain::RequestOutcome;
use std::io::Write;

/// Receives every terminal request outcome, from many tasks at once.
pub trait OutcomeSink: Send + Sync {
    fn record(&self, outcome: &RequestOutcome);
}

/// Writes one line per outcome to standard output.
pub struct StdoutSink;

impl OutcomeSink for StdoutSink {
    fn record(&self, outcome: &RequestOutcome) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{outcome}");
    }
}
