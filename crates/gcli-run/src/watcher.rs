use std::path::PathBuf;

use notify::event::ModifyKind;
use notify::{Config as NotifyConfig, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::error::RunError;
use crate::scanner::WatchSet;

const CHANNEL_CAPACITY: usize = 64;

pub type WatchError = notify::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
	Created,
	Modified,
	Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
	pub path: PathBuf,
	pub kind: ChangeKind,
}

/// Map a backend notification kind onto the kinds that trigger a restart.
/// Metadata changes, renames and access notifications are dropped.
pub fn classify(kind: &EventKind) -> Option<ChangeKind> {
	match kind {
		EventKind::Create(_) => Some(ChangeKind::Created),
		EventKind::Modify(ModifyKind::Metadata(_) | ModifyKind::Name(_)) => None,
		EventKind::Modify(_) => Some(ChangeKind::Modified),
		EventKind::Remove(_) => Some(ChangeKind::Removed),
		_ => None,
	}
}

/// One [`ChangeEvent`] per watched path named by `event`; paths outside `set` are dropped.
pub fn normalize(event: &notify::Event, set: &WatchSet) -> Vec<ChangeEvent> {
	let Some(kind) = classify(&event.kind) else {
		return Vec::new();
	};
	event
		.paths
		.iter()
		.filter(|p| set.contains(p))
		.map(|p| ChangeEvent { path: p.clone(), kind })
		.collect()
}

/// Receiving ends of a [`ChangeWatcher`]. Both streams are unordered with
/// respect to each other.
pub struct WatchStreams {
	pub events: mpsc::Receiver<ChangeEvent>,
	pub errors: mpsc::Receiver<WatchError>,
}

/// OS-level watch registrations for every path of a [`WatchSet`].
///
/// Registrations are released when the watcher is dropped. Newly created
/// directories are never recursed into and files discovered after start are
/// never added.
pub struct ChangeWatcher {
	_inner: RecommendedWatcher,
	registered: usize,
}

impl ChangeWatcher {
	pub fn start(set: &WatchSet) -> Result<(Self, WatchStreams), RunError> {
		let (event_tx, event_rx) = mpsc::channel(CHANNEL_CAPACITY);
		let (error_tx, error_rx) = mpsc::channel(CHANNEL_CAPACITY);
		let filter = set.clone();

		let mut inner = RecommendedWatcher::new(
			move |res: notify::Result<notify::Event>| match res {
				Ok(event) => {
					for change in normalize(&event, &filter) {
						let _ = event_tx.blocking_send(change);
					}
				}
				Err(e) => {
					let _ = error_tx.blocking_send(e);
				}
			},
			NotifyConfig::default(),
		)?;

		let mut registered = 0;
		for path in set.iter() {
			match inner.watch(path, RecursiveMode::NonRecursive) {
				Ok(()) => registered += 1,
				Err(e) => tracing::warn!("failed to watch {}: {}", path.display(), e),
			}
		}
		tracing::debug!(registered, total = set.len(), "watch registrations complete");

		Ok((
			Self { _inner: inner, registered },
			WatchStreams { events: event_rx, errors: error_rx },
		))
	}

	pub fn registered(&self) -> usize {
		self.registered
	}
}
