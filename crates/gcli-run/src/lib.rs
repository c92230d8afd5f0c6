//! # gcli-run
//!
//! Watch a source tree and restart a program on every change.
//!
//! The target is launched as its own process-group leader; each qualifying
//! file-system change kills the whole group and launches it again. SIGINT or
//! SIGTERM kills the group and ends the session.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use gcli_run::{LaunchSpec, RunOptions, RunSession};
//! use std::collections::HashMap;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let session = RunSession::open(RunOptions {
//!     watch_root: ".".into(),
//!     extensions: vec!["go".into(), "yml".into(), "yaml".into(), "html".into()],
//!     launch: LaunchSpec {
//!         program: "go".into(),
//!         args: vec!["run".into(), "./cmd/server".into()],
//!         working_dir: ".".into(),
//!         env: HashMap::new(),
//!     },
//!     settle_delay: Duration::from_secs(1),
//! })
//! .unwrap();
//!
//! session.run().await.unwrap();
//! # }
//! ```

pub mod error;
pub mod restart;
pub mod scanner;
pub mod session;
pub mod signals;
pub mod supervisor;
pub mod watcher;

pub use error::RunError;
pub use restart::{LoopInputs, LoopState, RestartLoop};
pub use scanner::{scan, WatchSet};
pub use session::{RunOptions, RunSession};
pub use signals::{CancelSignal, SignalBridge};
pub use supervisor::{kill_process_group, LaunchSpec, ProcessControl, ProcessHandle, ProcessSupervisor};
pub use watcher::{ChangeEvent, ChangeKind, ChangeWatcher, WatchError, WatchStreams};
