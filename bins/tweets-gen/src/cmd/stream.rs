use std::future::Future;
use std::sync::Arc;

use status_api::StatusListener;
use stream_simulator::{
    JsonLinesListener, LogListener, MockStreamRunner, StreamHandle, StreamRunner,
};

use super::config::{Effective, Output};
use super::error::TweetsGenError;

// ═══════════════════════════════════════════════════════════════
//  Main dispatch
// ═══════════════════════════════════════════════════════════════

pub async fn run(args: &Effective) -> Result<(), TweetsGenError> {
    let runner = select_runner(args)?;
    let listener = build_listener(args.output);

    let handle = runner.start(listener)?;
    tracing::info!(output = ?args.output, "status stream running, Ctrl-C to stop");

    wait_for_stop(handle, shutdown_signal()).await
}

/// Ждать, пока цикл завершится сам или придёт сигнал остановки.
///
/// Цикл останавливается до возврата при любом исходе, в том числе
/// когда не удалось установить обработчик сигнала.
async fn wait_for_stop<S>(handle: StreamHandle, shutdown: S) -> Result<(), TweetsGenError>
where
    S: Future<Output = std::io::Result<()>>,
{
    let token = handle.token();
    let mut stopped = std::pin::pin!(handle.join());
    let finished = tokio::select! {
        reason = &mut stopped => Ok(reason),
        res = shutdown => Err(res),
    };

    let reason = match finished {
        Ok(reason) => reason,
        Err(Ok(())) => {
            tracing::info!("shutting down...");
            token.cancel();
            stopped.await
        }
        Err(Err(e)) => {
            tracing::error!(error = %e, "signal handler failed, stopping stream");
            token.cancel();
            stopped.await;
            return Err(TweetsGenError::Signal(e));
        }
    };

    reason.into_result()?;
    tracing::info!("status stream stopped");
    Ok(())
}

/// Выбор источника делается один раз при старте.
fn select_runner(args: &Effective) -> Result<Box<dyn StreamRunner>, TweetsGenError> {
    if !args.enable_mock {
        return Err(TweetsGenError::Config {
            context: "source",
            detail: "enable_mock = false, but no live status source is available".into(),
        });
    }
    Ok(Box::new(MockStreamRunner::new(args.generation()?)))
}

fn build_listener(output: Output) -> Arc<dyn StatusListener> {
    match output {
        Output::Log => Arc::new(LogListener),
        Output::Stdout => Arc::new(JsonLinesListener::new(std::io::stdout())),
    }
}

async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate())?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => res,
            _ = term.recv() => Ok(()),
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}
