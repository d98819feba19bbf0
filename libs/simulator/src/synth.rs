use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GenerationConfig;
use crate::template::StatusParams;
use crate::error::SimulatorError;

/// Генератор wire JSON статусов: один PRNG на всё время жизни,
/// без пересидирования между циклами.
pub struct StatusSynthesizer {
    config: GenerationConfig,
    rng: StdRng,
}

impl StatusSynthesizer {
    pub fn new(config: GenerationConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn next_params(&mut self) -> StatusParams {
        StatusParams::generate(&mut self.rng, &self.config, Utc::now())
    }

    /// Следующий статус в wire-формате.
    pub fn next_json(&mut self) -> Result<String, SimulatorError> {
        Ok(self.next_params().render()?)
    }
}
