use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::error::RunError;

/// The environment asked us to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelSignal;

/// Turns the first SIGINT or SIGTERM into a single [`CancelSignal`].
pub struct SignalBridge {
	task: JoinHandle<()>,
}

impl SignalBridge {
	/// Must be called from within a tokio runtime.
	pub fn install() -> Result<(Self, oneshot::Receiver<CancelSignal>), RunError> {
		let mut interrupt = signal(SignalKind::interrupt()).map_err(RunError::Signal)?;
		let mut terminate = signal(SignalKind::terminate()).map_err(RunError::Signal)?;
		let (tx, rx) = oneshot::channel();

		let task = tokio::spawn(async move {
			let name = tokio::select! {
				_ = interrupt.recv() => "SIGINT",
				_ = terminate.recv() => "SIGTERM",
			};
			tracing::debug!("received {}", name);
			let _ = tx.send(CancelSignal);
		});

		Ok((Self { task }, rx))
	}
}

impl Drop for SignalBridge {
	fn drop(&mut self) {
		self.task.abort();
	}
}
