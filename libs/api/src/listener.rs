use std::future::Future;
use std::pin::Pin;

use crate::{ListenerError, StatusRecord};

// ════════════════════════════════════════════════════════════════
//  Listener Trait
// ════════════════════════════════════════════════════════════════

/// Получатель статусов — downstream сторона источника (kafka producer,
/// лог, stdout, канал в тестах).
///
/// Источник вызывает `on_status` по одной записи и ждёт завершения
/// перед следующим циклом. Что делать с ошибкой — решает источник;
/// генератор её только логирует.
pub trait StatusListener: Send + Sync {
    fn on_status(&self, status: StatusRecord)
        -> Pin<Box<dyn Future<Output = Result<(), ListenerError>> + Send + '_>>;
}
