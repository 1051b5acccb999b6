#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerErrorKind {
    InvalidEvent,
    Configuration,
    Serialization,
    Downstream,
}

impl HandlerErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidEvent => "invalid_event",
            Self::Configuration => "configuration",
            Self::Serialization => "serialization",
            Self::Downstream => "downstream",
        }
    }
}

/// Failure surfaced at the handler boundary.
///
/// The Lambda binaries hand this straight back to the runtime, which reports
/// it as an invocation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerError {
    kind: HandlerErrorKind,
    message: String,
}

impl HandlerError {
    pub fn new(kind: HandlerErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_event(message: impl Into<String>) -> Self {
        Self::new(HandlerErrorKind::InvalidEvent, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(HandlerErrorKind::Configuration, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(HandlerErrorKind::Serialization, message)
    }

    pub fn downstream(message: impl Into<String>) -> Self {
        Self::new(HandlerErrorKind::Downstream, message)
    }

    pub fn kind(&self) -> HandlerErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for HandlerError {}
