use std::time::Duration;

use clap::{Args, ValueEnum};
use serde::Deserialize;

use stream_simulator::GenerationConfig;

use super::error::TweetsGenError;

// ═══════════════════════════════════════════════════════════════
//  Config file (TOML)
// ═══════════════════════════════════════════════════════════════

/// Куда отдавать сгенерированные статусы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    /// tracing info на каждый статус
    #[default]
    Log,
    /// JSON-строка на статус в stdout
    Stdout,
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub enable_mock: Option<bool>,
    pub keywords: Option<Vec<String>>,
    pub min_words: Option<usize>,
    pub max_words: Option<usize>,
    pub interval_ms: Option<u64>,
    pub seed: Option<u64>,
    pub output: Option<Output>,
}

pub fn load_config(path: &str) -> Result<Config, TweetsGenError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| TweetsGenError::Config { context: "read", detail: format!("'{path}': {e}") })?;
    parse_config(&content)
        .map_err(|e| TweetsGenError::Config { context: "parse", detail: format!("'{path}': {e}") })
}

fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

// ═══════════════════════════════════════════════════════════════
//  CLI args
// ═══════════════════════════════════════════════════════════════

#[derive(Args, Clone, Debug, Default)]
pub struct GenArgs {
    /// Путь к TOML конфигу
    #[arg(long, default_value = "tweets-gen.toml", env = "TWEETS_GEN_CONFIG")]
    pub config: String,

    /// Синтетический источник (false = живой источник)
    #[arg(long)]
    pub enable_mock: Option<bool>,

    /// Ключевые слова через запятую, напр. "Java,Kafka"
    #[arg(long, value_delimiter = ',')]
    pub keywords: Option<Vec<String>>,

    /// Минимальная длина текста в словах
    #[arg(long)]
    pub min_words: Option<usize>,

    /// Максимальная длина текста в словах
    #[arg(long)]
    pub max_words: Option<usize>,

    /// Пауза между статусами в мс (0 = без паузы)
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Seed для PRNG (0 = энтропия ОС)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Куда писать статусы
    #[arg(long, value_enum)]
    pub output: Option<Output>,
}

// ═══════════════════════════════════════════════════════════════
//  Effective — merged config
// ═══════════════════════════════════════════════════════════════

fn default_keywords() -> Vec<String> {
    ["Java", "Microservices", "Spring", "Kafka", "Elasticsearch"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Итоговая конфигурация после мержа: config.toml < env/CLI
#[derive(Debug)]
pub struct Effective {
    pub enable_mock: bool,
    pub keywords: Vec<String>,
    pub min_words: usize,
    pub max_words: usize,
    pub interval_ms: u64,
    pub seed: u64,
    pub output: Output,
}

impl Effective {
    pub fn new(args: &GenArgs) -> Result<Self, TweetsGenError> {
        let cfg = match load_config(&args.config) {
            Ok(c) => c,
            Err(e) => {
                if std::path::Path::new(&args.config).exists() {
                    return Err(e);
                }
                tracing::debug!(config = %args.config, "no config file, using defaults");
                Config::default()
            }
        };
        Ok(Self::merge(args, cfg))
    }

    fn merge(args: &GenArgs, cfg: Config) -> Self {
        Self {
            enable_mock: args.enable_mock.or(cfg.enable_mock).unwrap_or(true),
            keywords: args.keywords.clone().or(cfg.keywords).unwrap_or_else(default_keywords),
            min_words: args.min_words.or(cfg.min_words).unwrap_or(5),
            max_words: args.max_words.or(cfg.max_words).unwrap_or(15),
            interval_ms: args.interval_ms.or(cfg.interval_ms).unwrap_or(10_000),
            seed: args.seed.or(cfg.seed).unwrap_or(0),
            output: args.output.or(cfg.output).unwrap_or_default(),
        }
    }

    /// Провалидированные параметры генерации.
    pub fn generation(&self) -> Result<GenerationConfig, TweetsGenError> {
        let config = GenerationConfig::new(
            self.keywords.clone(),
            self.min_words,
            self.max_words,
            Duration::from_millis(self.interval_ms),
        )?;
        Ok(config.with_seed(self.seed))
    }
}
