use std::error::Error as StdError;
use thiserror::Error;

/// Failures that stop a run before any wave is dispatched.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Invalid dispatch config: {0}")]
    InvalidConfig(String),
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Renders an error followed by its `source()` chain.
pub fn describe_error(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.ends_with(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer {
        text: &'static str,
        inner: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.text)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.inner.as_deref().map(|inner| inner as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn describe_error_joins_cause_chain() {
        let err = Layer {
            text: "error sending request",
            inner: Some(Box::new(Layer {
                text: "tcp connect error",
                inner: Some(Box::new(Layer {
                    text: "Connection refused",
                    inner: None,
                })),
            })),
        };
        assert_eq!(
            describe_error(&err),
            "error sending request: tcp connect error: Connection refused"
        );
    }

    #[test]
    fn describe_error_skips_repeated_cause_text() {
        let err = Layer {
            text: "Invalid dispatch config: timed out",
            inner: Some(Box::new(Layer {
                text: "timed out",
                inner: None,
            })),
        };
        assert_eq!(describe_error(&err), "Invalid dispatch config: timed out");
    }
}
