/// Category of a listener error. Lets the producer decide whether a failed
/// delivery is worth more than a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// I/O error while writing the record somewhere.
    Io,
    /// Downstream side is gone (channel closed, consumer dropped).
    Closed,
    /// Record could not be encoded for the downstream format.
    Format,
    /// Logical error (rejected by the consumer, generic).
    Logic,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Io => f.write_str("io"),
            ErrorKind::Closed => f.write_str("closed"),
            ErrorKind::Format => f.write_str("format"),
            ErrorKind::Logic => f.write_str("logic"),
        }
    }
}

/// Unified error type returned by `StatusListener::on_status`.
///
/// Carries an `ErrorKind` for categorization and a human-readable message.
/// `From` impls assign the appropriate kind automatically and allow
/// ergonomic `?` in listener implementations.
#[derive(Clone)]
pub struct ListenerError {
    kind: ErrorKind,
    message: String,
}

impl ListenerError {
    /// Generic logic error (default kind).
    pub fn new(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Logic, message: msg.into() }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Io, message: msg.into() }
    }

    /// Downstream consumer is gone.
    pub fn closed(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Closed, message: msg.into() }
    }

    pub fn format_err(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Format, message: msg.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Debug for ListenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl std::fmt::Display for ListenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ListenerError {}

impl From<std::io::Error> for ListenerError {
    fn from(e: std::io::Error) -> Self { Self::io(e.to_string()) }
}

impl From<RecordError> for ListenerError {
    fn from(e: RecordError) -> Self { Self::format_err(e.to_string()) }
}

/// Failure to turn wire text into a [`crate::StatusRecord`] or back.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("malformed status json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bad created_at '{value}': {source}")]
    CreatedAt { value: String, source: chrono::ParseError },

    #[error("bad {field} '{value}': not an unsigned 64-bit integer")]
    Id { field: &'static str, value: String },
}
