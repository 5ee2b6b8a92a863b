//! Simulated video playback. A background task ticks on a fixed interval,
//! raising watch progress by a fixed step until it hits 100%, then fires the
//! completion callback exactly once and stops. There is no pause or seek;
//! dropping the handle tears the task down.

use std::time::Duration;

use log::{debug, trace};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Progress value at which playback is complete.
pub const COMPLETE: u8 = 100;

/// Cadence of the simulation, usually taken from
/// [`crate::config::GamificationConfig::playback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSettings {
    pub tick: Duration,
    /// Progress percentage added per tick, clamped to at least 1.
    pub step: u8,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            step: 10,
        }
    }
}

/// Live view of a running simulation. Dropping the handle aborts the task,
/// which is the only way to cancel playback early.
#[derive(Debug)]
pub struct PlaybackHandle {
    rx: watch::Receiver<u8>,
    task: JoinHandle<()>,
}

impl PlaybackHandle {
    /// Latest observed progress percentage.
    pub fn progress(&self) -> u8 {
        *self.rx.borrow()
    }

    /// Wait until playback reaches 100% and return the final progress.
    pub async fn finished(&mut self) -> u8 {
        let waited = self.rx.wait_for(|p| *p >= COMPLETE).await.map(|v| *v);
        match waited {
            Ok(value) => value,
            Err(_) => *self.rx.borrow(),
        }
    }
}

impl Drop for PlaybackHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start a playback simulation from an initial progress percentage. The
/// callback runs on the simulation task when progress first reaches 100%,
/// and never runs if the handle is dropped before that.
pub fn spawn<F>(initial: u8, settings: PlaybackSettings, on_complete: F) -> PlaybackHandle
where
    F: FnOnce() + Send + 'static,
{
    let start = initial.min(COMPLETE);
    let step = settings.step.max(1);
    let (tx, rx) = watch::channel(start);

    let task = tokio::spawn(async move {
        if start >= COMPLETE {
            debug!("playback already complete at spawn");
            on_complete();
            return;
        }
        let mut progress = start;
        let mut ticker = tokio::time::interval(settings.tick);
        // the first interval tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            progress = progress.saturating_add(step).min(COMPLETE);
            trace!("playback progress {}%", progress);
            if progress >= COMPLETE {
                on_complete();
                let _ = tx.send(COMPLETE);
                return;
            }
            if tx.send(progress).is_err() {
                return;
            }
        }
    });

    PlaybackHandle { rx, task }
}
