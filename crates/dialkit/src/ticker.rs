use crate::time::{TimeSampler, TimeSnapshot};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::Notify;
use tokio::time::MissedTickBehavior;

pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

#[derive(Error, Debug)]
pub enum TickerError {
    #[error("Tick period must be greater than zero")]
    ZeroPeriod,
}

#[derive(Default)]
struct Cancellation {
    stopped: AtomicBool,
    notify: Notify,
}

impl Cancellation {
    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

/// Owns a running ticker. The ticker stops when [`TickerHandle::stop`] is
/// called or the handle is dropped, whichever comes first.
pub struct TickerHandle {
    cancel: Arc<Cancellation>,
}

impl TickerHandle {
    /// Returns `true` if this call stopped the ticker, `false` if it was already stopped.
    pub fn stop(&self) -> bool {
        if self.cancel.stopped.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.cancel.notify.notify_one();
        log::debug!("Ticker stopped");
        true
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_stopped()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

pub struct Ticker;

impl Ticker {
    /// Samples `sampler` once per `period` on `runtime` and hands each snapshot to
    /// `on_tick`. Returning `false` from `on_tick` ends the ticker, e.g. once the
    /// receiving side has gone away. The first sample is taken immediately.
    pub fn start<S, F>(
        runtime: &Handle,
        period: Duration,
        sampler: S,
        mut on_tick: F,
    ) -> Result<TickerHandle, TickerError>
    where
        S: TimeSampler,
        F: FnMut(TimeSnapshot) -> bool + Send + 'static,
    {
        if period.is_zero() {
            return Err(TickerError::ZeroPeriod);
        }

        let cancel = Arc::new(Cancellation::default());
        let task_cancel = cancel.clone();

        runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = task_cancel.notify.notified() => break,
                    _ = interval.tick() => {
                        if task_cancel.is_stopped() {
                            break;
                        }
                        if !on_tick(sampler.sample()) {
                            log::debug!("Tick receiver closed, ending ticker");
                            break;
                        }
                    }
                }
            }
        });

        Ok(TickerHandle { cancel })
    }
}
