use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::sync::Mutex;

use tokio::sync::mpsc;

use status_api::{ListenerError, StatusListener, StatusRecord};

// ═══════════════════════════════════════════════════════════════
//  LogListener
// ═══════════════════════════════════════════════════════════════

/// Пишет каждый статус в лог (info). Никогда не падает.
#[derive(Debug, Default)]
pub struct LogListener;

impl StatusListener for LogListener {
    fn on_status(&self, status: StatusRecord)
        -> Pin<Box<dyn Future<Output = Result<(), ListenerError>> + Send + '_>>
    {
        tracing::info!(
            id = status.id,
            user_id = status.user_id,
            text = %status.text,
            "received status"
        );
        Box::pin(std::future::ready(Ok(())))
    }
}

// ═══════════════════════════════════════════════════════════════
//  JsonLinesListener
// ═══════════════════════════════════════════════════════════════

/// Пишет каждый статус одной строкой wire JSON + flush.
pub struct JsonLinesListener<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesListener<W> {
    pub fn new(writer: W) -> Self {
        Self { writer: Mutex::new(writer) }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_line(&self, status: &StatusRecord) -> Result<(), ListenerError> {
        let line = status.to_json()?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ListenerError::new("json-lines writer poisoned"))?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> StatusListener for JsonLinesListener<W> {
    fn on_status(&self, status: StatusRecord)
        -> Pin<Box<dyn Future<Output = Result<(), ListenerError>> + Send + '_>>
    {
        Box::pin(std::future::ready(self.write_line(&status)))
    }
}

// ═══════════════════════════════════════════════════════════════
//  ChannelListener
// ═══════════════════════════════════════════════════════════════

/// Отправляет статусы в mpsc канал (in-process consumer).
///
/// Ждёт места в канале; закрытый receiver → `ErrorKind::Closed`.
pub struct ChannelListener {
    tx: mpsc::Sender<StatusRecord>,
}

impl ChannelListener {
    pub fn new(tx: mpsc::Sender<StatusRecord>) -> Self {
        Self { tx }
    }
}

impl StatusListener for ChannelListener {
    fn on_status(&self, status: StatusRecord)
        -> Pin<Box<dyn Future<Output = Result<(), ListenerError>> + Send + '_>>
    {
        Box::pin(async move {
            self.tx
                .send(status)
                .await
                .map_err(|_| ListenerError::closed("status receiver dropped"))
        })
    }
}
