use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use nix::errno::Errno;
use nix::sys::signal::{killpg, Signal};
use nix::unistd::Pid;
use tokio::process::{Child, Command};

use crate::error::RunError;

/// What to launch on every (re)start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
	pub program: String,
	pub args: Vec<String>,
	pub working_dir: PathBuf,
	pub env: HashMap<String, String>,
}

impl LaunchSpec {
	pub fn command_line(&self) -> String {
		std::iter::once(self.program.as_str())
			.chain(self.args.iter().map(String::as_str))
			.collect::<Vec<_>>()
			.join(" ")
	}
}

/// Start/terminate seam driven by the restart loop.
///
/// `terminate` is fire-and-forget: it must not wait for the group to exit,
/// and failures (the group is already gone) are swallowed.
pub trait ProcessControl {
	type Handle;

	fn start(&mut self, spec: &LaunchSpec) -> Result<Self::Handle, RunError>;

	fn terminate(&mut self, handle: Self::Handle);
}

/// A child started as its own process-group leader, so pgid == pid.
#[derive(Debug)]
pub struct ProcessHandle {
	pid: u32,
	child: Child,
}

impl ProcessHandle {
	pub fn pid(&self) -> u32 {
		self.pid
	}

	pub fn pgid(&self) -> i32 {
		self.pid as i32
	}

	pub async fn wait(&mut self) -> std::io::Result<ExitStatus> {
		self.child.wait().await
	}
}

/// Launches the target through `tokio::process` in a new process group and
/// kills the whole group with SIGKILL.
#[derive(Debug, Default)]
pub struct ProcessSupervisor;

impl ProcessControl for ProcessSupervisor {
	type Handle = ProcessHandle;

	fn start(&mut self, spec: &LaunchSpec) -> Result<ProcessHandle, RunError> {
		let launch_err = |source: std::io::Error| RunError::Launch {
			program: spec.program.clone(),
			source,
		};

		let mut cmd = Command::new(&spec.program);
		cmd.args(&spec.args)
			.current_dir(&spec.working_dir)
			.envs(&spec.env)
			.stdin(Stdio::null())
			.stdout(Stdio::inherit())
			.stderr(Stdio::inherit())
			.process_group(0);

		let child = cmd.spawn().map_err(launch_err)?;
		let pid = child
			.id()
			.ok_or_else(|| launch_err(std::io::Error::other("exited before a pid was assigned")))?;

		tracing::debug!(pid, cmd = %spec.command_line(), "launched");
		Ok(ProcessHandle { pid, child })
	}

	fn terminate(&mut self, handle: ProcessHandle) {
		if let Err(e) = kill_process_group(handle.pgid()) {
			tracing::debug!(pgid = handle.pgid(), "kill skipped: {}", e);
		}
		// Dropping the child does not wait on it; tokio reaps it in the background.
	}
}

/// SIGKILL every member of process group `pgid`.
///
/// Group ids 0 and 1 are refused: signalling them would hit our own group or init.
pub fn kill_process_group(pgid: i32) -> nix::Result<()> {
	if pgid <= 1 {
		return Err(Errno::EINVAL);
	}
	killpg(Pid::from_raw(pgid), Signal::SIGKILL)
}
