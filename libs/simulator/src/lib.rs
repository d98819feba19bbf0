//! Синтетический поток статусов: генерация текста с ключевыми словами,
//! сборка записи в wire-формате и доставка в `StatusListener`
//! с фиксированной паузой между циклами.

pub mod config;
pub mod content;
pub mod error;
pub mod listeners;
mod runner;
mod synth;
pub mod template;

pub use config::GenerationConfig;
pub use error::{ConfigError, SimulatorError};
pub use listeners::{ChannelListener, JsonLinesListener, LogListener};
pub use runner::{MockStreamRunner, StopReason, StreamHandle, StreamRunner};
pub use synth::StatusSynthesizer;
