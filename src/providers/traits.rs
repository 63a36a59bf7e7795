use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Outcome of one remote attempt. Every failure path is a variant; nothing
/// escapes as a panic or error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteAttempt {
    Success(String),
    /// The overall deadline fired before a usable response arrived.
    Timeout,
    /// Non-2xx status from the last model tried.
    HttpError(u16),
    /// 2xx with no text at `candidates[0].content.parts[0].text`.
    EmptyPayload,
    /// Transport failure: DNS, connect, reset, undecodable body.
    NetworkError,
    /// No credentials; no request was sent.
    Unconfigured,
}

impl RemoteAttempt {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Success(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for RemoteAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(_) => f.write_str("success"),
            Self::Timeout => f.write_str("timeout"),
            Self::HttpError(status) => write!(f, "http error {status}"),
            Self::EmptyPayload => f.write_str("empty payload"),
            Self::NetworkError => f.write_str("network error"),
            Self::Unconfigured => f.write_str("unconfigured"),
        }
    }
}

/// Remote inference seam used by the pipeline.
pub trait RemoteResponder: Send + Sync {
    fn name(&self) -> &str;

    fn attempt<'a>(
        &'a self,
        instruction: &'a str,
    ) -> Pin<Box<dyn Future<Output = RemoteAttempt> + Send + 'a>>;
}
