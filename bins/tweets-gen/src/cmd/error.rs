use stream_simulator::{ConfigError, SimulatorError};

#[derive(Debug, thiserror::Error)]
pub enum TweetsGenError {
    #[error("config ({context}): {detail}")]
    Config { context: &'static str, detail: String },

    #[error("generation config: {0}")]
    Generation(#[from] ConfigError),

    #[error("{0}")]
    Simulator(#[from] SimulatorError),

    #[error("signal: {0}")]
    Signal(#[from] std::io::Error),
}
