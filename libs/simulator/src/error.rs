use status_api::RecordError;

#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("status parse: {0}")]
    Parse(#[from] RecordError),

    #[error("no tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    #[error("stream task: {0}")]
    Task(String),
}

/// Нарушение инвариантов `GenerationConfig`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("keywords must not be empty")]
    NoKeywords,

    #[error("min_words must be at least 1")]
    ZeroMinWords,

    #[error("max_words ({max}) is less than min_words ({min})")]
    InvertedBounds { min: usize, max: usize },
}
