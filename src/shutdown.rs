use anyhow::Result;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// Cancellation token for the jiggle loop.
pub struct Shutdown {
    tx: Sender<()>,
    rx: Receiver<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// Installs a Ctrl-C handler that trips this token.
    pub fn on_ctrl_c() -> Result<Self> {
        let shutdown = Self::new();
        let tx = shutdown.trigger_handle();
        ctrlc::set_handler(move || {
            let _ = tx.send(());
        })?;
        Ok(shutdown)
    }

    pub fn trigger_handle(&self) -> Sender<()> {
        self.tx.clone()
    }

    /// Sleeps for `timeout` unless shutdown is requested first.
    /// Returns `true` when the loop should stop.
    pub fn wait(&self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(()) => true,
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => true,
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
