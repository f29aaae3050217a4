use crate::config::settings::LandingConfig;
use crate::foundation::error::{PapillonError, PapillonResult};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::Instant;

/// Bounds of a readiness wait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadinessOpts {
    /// Give up once this much time has passed since the wait began.
    pub timeout: Duration,
    /// Delay between probes.
    pub poll_interval: Duration,
}

impl Default for ReadinessOpts {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(8000),
            poll_interval: Duration::from_millis(100),
        }
    }
}

impl From<&LandingConfig> for ReadinessOpts {
    fn from(cfg: &LandingConfig) -> Self {
        Self {
            timeout: Duration::from_millis(cfg.readiness_timeout_ms),
            poll_interval: Duration::from_millis(cfg.readiness_poll_ms),
        }
    }
}

/// Poll `probe` until it yields a value or `opts.timeout` elapses.
///
/// The probe runs immediately, then once per `poll_interval`, and one final time at the
/// deadline. `what` names the dependency in the error.
pub async fn wait_until_ready<T, F>(
    what: &str,
    mut probe: F,
    opts: ReadinessOpts,
) -> PapillonResult<T>
where
    F: FnMut() -> Option<T>,
{
    let began = Instant::now();
    let deadline = began + opts.timeout;
    let mut probes = 0u32;
    loop {
        probes += 1;
        if let Some(v) = probe() {
            let waited_ms = began.elapsed().as_millis() as u64;
            tracing::debug!(what, probes, waited_ms, "dependency ready");
            return Ok(v);
        }
        let now = Instant::now();
        if now >= deadline {
            tracing::warn!(what, probes, "dependency wait timed out");
            return Err(PapillonError::dependency_unavailable(format!(
                "{what} not ready after {} ms",
                opts.timeout.as_millis()
            )));
        }
        tokio::time::sleep_until((now + opts.poll_interval).min(deadline)).await;
    }
}

/// Producer half of a push-based readiness signal. Consumed on use, so it resolves at most once.
#[derive(Debug)]
pub struct ReadySignal<T> {
    tx: oneshot::Sender<T>,
}

impl<T> ReadySignal<T> {
    /// Announce readiness. Returns `false` when the waiter is already gone.
    pub fn mark_ready(self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }
}

/// Consumer half of a readiness signal, awaited by a single caller.
#[derive(Debug)]
pub struct Readiness<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> Readiness<T> {
    /// Wait for the signal, failing after `timeout` or when the producer is dropped.
    pub async fn wait(self, what: &str, timeout: Duration) -> PapillonResult<T> {
        match tokio::time::timeout(timeout, self.rx).await {
            Ok(Ok(v)) => Ok(v),
            Ok(Err(_)) => Err(PapillonError::dependency_unavailable(format!(
                "{what} signal dropped before becoming ready"
            ))),
            Err(_) => Err(PapillonError::dependency_unavailable(format!(
                "{what} not ready after {} ms",
                timeout.as_millis()
            ))),
        }
    }
}

/// Create a connected producer/consumer pair.
pub fn readiness_channel<T>() -> (ReadySignal<T>, Readiness<T>) {
    let (tx, rx) = oneshot::channel();
    (ReadySignal { tx }, Readiness { rx })
}

#[cfg(test)]
#[path = "../../tests/unit/readiness/wait.rs"]
mod tests;
