use std::fmt;

/// Coarse failure bucket callers branch on when rendering a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// No HTTP response was received at all.
    Network,
    /// The backend answered with a non-success status.
    Server,
    /// The request could not be built or the response could not be decoded.
    Client,
}

/// Structured backend failure. The raw server body is preserved for
/// diagnostics; nothing here is retried automatically.
#[derive(Debug, Clone)]
pub enum BackendError {
    Network { detail: String },
    Server { status: u16, body: String },
    Client { detail: String },
}

impl BackendError {
    pub fn class(&self) -> FailureClass {
        match self {
            Self::Network { .. } => FailureClass::Network,
            Self::Server { .. } => FailureClass::Server,
            Self::Client { .. } => FailureClass::Client,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network { detail } => write!(f, "no response from backend: {detail}"),
            Self::Server { status, body } => write!(f, "backend HTTP {status}: {body}"),
            Self::Client { detail } => {
                write!(f, "request failed before reaching the backend: {detail}")
            }
        }
    }
}

impl std::error::Error for BackendError {}
