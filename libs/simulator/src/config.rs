use std::time::Duration;

use crate::error::ConfigError;

/// Параметры генерации статусов.
///
/// Инварианты проверяются в [`GenerationConfig::new`]: непустой список
/// ключевых слов и `max_words >= min_words >= 1`. Значение с нарушенными инвариантами
/// построить нельзя.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    keywords: Vec<String>,
    min_words: usize,
    max_words: usize,
    interval: Duration,
    seed: Option<u64>,
}

impl GenerationConfig {
    pub fn new(
        keywords: Vec<String>,
        min_words: usize,
        max_words: usize,
        interval: Duration,
    ) -> Result<Self, ConfigError> {
        if keywords.is_empty() {
            return Err(ConfigError::NoKeywords);
        }
        if min_words == 0 {
            return Err(ConfigError::ZeroMinWords);
        }
        if max_words < min_words {
            return Err(ConfigError::InvertedBounds { min: min_words, max: max_words });
        }
        Ok(Self {
            keywords,
            min_words,
            max_words,
            interval,
            seed: None,
        })
    }

    /// Фиксированный seed для PRNG (0 = из энтропии ОС).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = (seed != 0).then_some(seed);
        self
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
