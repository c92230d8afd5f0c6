use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use crate::error::RunError;
use crate::signals::CancelSignal;
use crate::supervisor::{LaunchSpec, ProcessControl};
use crate::watcher::{ChangeEvent, WatchError, WatchStreams};

/// Everything the loop waits on.
pub struct LoopInputs {
	pub events: mpsc::Receiver<ChangeEvent>,
	pub errors: mpsc::Receiver<WatchError>,
	pub cancel: oneshot::Receiver<CancelSignal>,
}

impl LoopInputs {
	pub fn new(streams: WatchStreams, cancel: oneshot::Receiver<CancelSignal>) -> Self {
		Self { events: streams.events, errors: streams.errors, cancel }
	}
}

#[derive(Debug)]
pub enum LoopState<H> {
	Idle,
	Running(H),
	ShuttingDown,
}

/// Sole owner of the supervised process. Every change event terminates the
/// current process group and starts a new one; events are handled one at a
/// time in arrival order and are never coalesced.
pub struct RestartLoop<P: ProcessControl> {
	control: P,
	spec: LaunchSpec,
	settle_delay: Duration,
	state: LoopState<P::Handle>,
	restarts: u64,
}

impl<P: ProcessControl> RestartLoop<P> {
	pub fn new(control: P, spec: LaunchSpec, settle_delay: Duration) -> Self {
		Self {
			control,
			spec,
			settle_delay,
			state: LoopState::Idle,
			restarts: 0,
		}
	}

	pub fn state(&self) -> &LoopState<P::Handle> {
		&self.state
	}

	pub fn is_running(&self) -> bool {
		matches!(self.state, LoopState::Running(_))
	}

	/// Completed restart cycles.
	pub fn restarts(&self) -> u64 {
		self.restarts
	}

	/// Drive the loop until a [`CancelSignal`] arrives or every input closes.
	/// The supervised process is terminated before this returns.
	///
	/// A launch failure is fatal and returned immediately.
	pub async fn run(&mut self, inputs: LoopInputs) -> Result<(), RunError> {
		let LoopInputs { mut events, mut errors, mut cancel } = inputs;
		let mut cancel_open = true;

		self.launch().await?;

		loop {
			tokio::select! {
				biased;
				res = &mut cancel, if cancel_open => {
					cancel_open = false;
					if res.is_ok() {
						break;
					}
				}
				Some(event) = events.recv() => {
					tracing::info!(kind = ?event.kind, "file modified: {}", event.path.display());
					self.restart().await?;
				}
				Some(err) = errors.recv() => {
					tracing::warn!("watch error: {}", err);
				}
				else => break,
			}
		}

		self.shutdown();
		Ok(())
	}

	/// Terminate the current process (if any) and enter the terminal state.
	pub fn shutdown(&mut self) {
		self.stop();
		self.state = LoopState::ShuttingDown;
	}

	async fn restart(&mut self) -> Result<(), RunError> {
		self.stop();
		self.launch().await?;
		self.restarts += 1;
		Ok(())
	}

	fn stop(&mut self) {
		if let LoopState::Running(handle) = std::mem::replace(&mut self.state, LoopState::Idle) {
			self.control.terminate(handle);
		}
	}

	async fn launch(&mut self) -> Result<(), RunError> {
		debug_assert!(!self.is_running());
		let handle = self.control.start(&self.spec)?;
		self.state = LoopState::Running(handle);

		// Later events queue while the program settles.
		if !self.settle_delay.is_zero() {
			tokio::time::sleep(self.settle_delay).await;
		}
		tracing::info!("running...");
		Ok(())
	}
}

impl<P: ProcessControl> Drop for RestartLoop<P> {
	fn drop(&mut self) {
		self.stop();
	}
}
