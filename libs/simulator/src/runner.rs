use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use status_api::{StatusListener, StatusRecord};

use crate::config::GenerationConfig;
use crate::error::SimulatorError;
use crate::synth::StatusSynthesizer;

// ═══════════════════════════════════════════════════════════════
//  Runner trait
// ═══════════════════════════════════════════════════════════════

/// Источник статусов, который можно запустить на получателя.
///
/// Какую реализацию строить (mock или живой источник) решает
/// вызывающий код один раз при старте.
pub trait StreamRunner: Send + Sync {
    /// Запустить источник в фоне. Не блокирует: возвращает handle
    /// сразу после спавна задачи.
    fn start(&self, listener: Arc<dyn StatusListener>) -> Result<StreamHandle, SimulatorError>;
}

/// Почему цикл генерации завершился.
#[derive(Debug)]
pub enum StopReason {
    /// Остановлен через токен отмены.
    Cancelled,
    /// Фатальная ошибка генерации/парсинга.
    Failed(SimulatorError),
}

impl StopReason {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, StopReason::Cancelled)
    }

    pub fn into_result(self) -> Result<(), SimulatorError> {
        match self {
            StopReason::Cancelled => Ok(()),
            StopReason::Failed(e) => Err(e),
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  StreamHandle
// ═══════════════════════════════════════════════════════════════

/// Handle запущенного цикла: отмена + ожидание завершения.
///
/// Drop handle не останавливает цикл — для этого `cancel()`/`stop()`.
pub struct StreamHandle {
    token: CancellationToken,
    task: JoinHandle<StopReason>,
}

impl StreamHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Клон токена — можно связать с shutdown процесса.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Дождаться завершения цикла (отмена или фатальная ошибка).
    pub async fn join(self) -> StopReason {
        match self.task.await {
            Ok(reason) => reason,
            Err(e) => StopReason::Failed(SimulatorError::Task(e.to_string())),
        }
    }

    pub async fn stop(self) -> StopReason {
        self.cancel();
        self.join().await
    }
}

// ═══════════════════════════════════════════════════════════════
//  MockStreamRunner
// ═══════════════════════════════════════════════════════════════

/// Синтетический источник: генерирует статусы по `GenerationConfig`
/// с паузой `interval` между циклами.
pub struct MockStreamRunner {
    config: GenerationConfig,
}

impl MockStreamRunner {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }
}

impl StreamRunner for MockStreamRunner {
    fn start(&self, listener: Arc<dyn StatusListener>) -> Result<StreamHandle, SimulatorError> {
        let runtime = tokio::runtime::Handle::try_current()?;

        tracing::info!(
            keywords = ?self.config.keywords(),
            min_words = self.config.min_words(),
            max_words = self.config.max_words(),
            interval_ms = millis_saturating(self.config.interval()),
            "starting mock status stream"
        );

        let mut synth = StatusSynthesizer::new(self.config.clone());
        let interval = self.config.interval();
        let token = CancellationToken::new();
        let task = runtime.spawn(run_stream(
            move || synth.next_json(),
            listener,
            interval,
            token.clone(),
        ));

        Ok(StreamHandle { token, task })
    }
}

fn millis_saturating(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

// ═══════════════════════════════════════════════════════════════
//  Generation loop
// ═══════════════════════════════════════════════════════════════

/// Цикл: next_json → parse → listener.on_status → sleep.
///
/// Ошибка получателя не фатальна. Ошибка генерации или парсинга
/// завершает цикл; в получателя попадают только валидные записи.
async fn run_stream<F>(
    mut next_json: F,
    listener: Arc<dyn StatusListener>,
    interval: Duration,
    token: CancellationToken,
) -> StopReason
where
    F: FnMut() -> Result<String, SimulatorError> + Send,
{
    let mut delivered: u64 = 0;

    loop {
        if token.is_cancelled() {
            break;
        }

        let parsed = next_json()
            .and_then(|json| StatusRecord::from_json(&json).map_err(SimulatorError::from));
        let record = match parsed {
            Ok(record) => record,
            Err(e) => {
                tracing::error!(delivered, error = %e, "error creating status, stopping stream");
                return StopReason::Failed(e);
            }
        };

        let id = record.id;
        match listener.on_status(record).await {
            Ok(()) => {
                delivered += 1;
                tracing::debug!(id, "status delivered");
            }
            Err(e) => {
                tracing::warn!(id, error = ?e, "listener error, continuing");
            }
        }

        if interval.is_zero() {
            tokio::task::yield_now().await;
            continue;
        }

        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    tracing::info!(delivered, "mock status stream cancelled");
    StopReason::Cancelled
}
