use std::path::PathBuf;
use std::time::Duration;

use crate::error::RunError;
use crate::restart::{LoopInputs, RestartLoop};
use crate::scanner::{self, WatchSet};
use crate::signals::SignalBridge;
use crate::supervisor::{LaunchSpec, ProcessControl, ProcessSupervisor};
use crate::watcher::ChangeWatcher;

#[derive(Debug, Clone)]
pub struct RunOptions {
	pub watch_root: PathBuf,
	pub extensions: Vec<String>,
	pub launch: LaunchSpec,
	pub settle_delay: Duration,
}

/// Owns the watcher, the signal subscription and the restart loop for one
/// `run` invocation. Dropping the session, on any path, releases the watch
/// registrations and kills a still-running process group.
pub struct RunSession<P: ProcessControl = ProcessSupervisor> {
	watch_set: WatchSet,
	watcher: ChangeWatcher,
	_signals: SignalBridge,
	restart: RestartLoop<P>,
	inputs: LoopInputs,
}

impl RunSession<ProcessSupervisor> {
	pub fn open(options: RunOptions) -> Result<Self, RunError> {
		Self::with_control(options, ProcessSupervisor)
	}
}

impl<P: ProcessControl> RunSession<P> {
	/// Scan, register watches and install signal handlers. Any failure here is
	/// fatal and nothing has been launched yet.
	pub fn with_control(options: RunOptions, control: P) -> Result<Self, RunError> {
		let watch_set = scanner::scan(&options.watch_root, &options.extensions)?;
		let (watcher, streams) = ChangeWatcher::start(&watch_set)?;
		let (signals, cancel) = SignalBridge::install()?;

		tracing::info!(
			files = watch_set.len(),
			watched = watcher.registered(),
			"watching {}",
			options.watch_root.display()
		);

		Ok(Self {
			watch_set,
			watcher,
			_signals: signals,
			restart: RestartLoop::new(control, options.launch, options.settle_delay),
			inputs: LoopInputs::new(streams, cancel),
		})
	}

	pub fn watch_set(&self) -> &WatchSet {
		&self.watch_set
	}

	pub fn watcher(&self) -> &ChangeWatcher {
		&self.watcher
	}

	/// Run until shutdown. Returns `Ok` after a cancel signal once the process
	/// group has been killed.
	pub async fn run(self) -> Result<(), RunError> {
		let RunSession { mut restart, inputs, watcher, _signals, .. } = self;
		let result = restart.run(inputs).await;
		drop(restart);
		drop(watcher);
		result
	}
}
