use crate::events::AppEvent;
use async_channel::{Sender, TrySendError};
use dialkit::ticker::{TICK_PERIOD, Ticker, TickerError, TickerHandle};
use dialkit::time::LocalClock;
use tokio::runtime::Runtime;

/// Tokio runtime hosting the control server, the config watcher and the ticker.
/// Dropping it shuts those tasks down.
pub struct BackgroundServices {
    runtime: Runtime,
}

impl BackgroundServices {
    /// Starts the once-per-second clock. Ticks stop when the returned handle is
    /// stopped or dropped, or once the GUI side of `tx` is closed.
    pub fn start_ticker(&self, tx: Sender<AppEvent>) -> Result<TickerHandle, TickerError> {
        Ticker::start(
            self.runtime.handle(),
            TICK_PERIOD,
            LocalClock,
            move |snapshot| match tx.try_send(AppEvent::Tick(snapshot)) {
                Ok(()) => true,
                Err(TrySendError::Full(_)) => {
                    log::debug!("Event queue full, dropping tick");
                    true
                }
                Err(TrySendError::Closed(_)) => false,
            },
        )
    }
}

pub fn start_background_services(tx: Sender<AppEvent>) -> std::io::Result<BackgroundServices> {
    let runtime = Runtime::new()?;

    {
        let tx = tx.clone();
        runtime.spawn(async move {
            crate::sys::server::run_server(tx).await;
        });
    }

    runtime.spawn(async move {
        crate::config::run_async_watcher(tx).await;
    });

    Ok(BackgroundServices { runtime })
}
