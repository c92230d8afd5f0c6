#![allow(dead_code)]

use std::collections::HashMap;
use std::io;

use gcli_run::{LaunchSpec, ProcessControl, RunError};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
	Start(u32),
	Terminate(u32),
}

/// Fake process control that records every call and asserts that a start
/// never happens while a previous process is still alive.
pub struct Recorder {
	next: u32,
	live: Option<u32>,
	fail_on: Option<u32>,
	ops: mpsc::UnboundedSender<Op>,
}

impl Recorder {
	pub fn new() -> (Self, mpsc::UnboundedReceiver<Op>) {
		let (tx, rx) = mpsc::unbounded_channel();
		(Self { next: 0, live: None, fail_on: None, ops: tx }, rx)
	}

	/// Make the `n`th start (1-based) fail to launch.
	pub fn failing_on(mut self, n: u32) -> Self {
		self.fail_on = Some(n);
		self
	}
}

impl ProcessControl for Recorder {
	type Handle = u32;

	fn start(&mut self, spec: &LaunchSpec) -> Result<u32, RunError> {
		assert!(self.live.is_none(), "start while process {:?} is alive", self.live);
		self.next += 1;
		if self.fail_on == Some(self.next) {
			return Err(RunError::Launch {
				program: spec.program.clone(),
				source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
			});
		}
		self.live = Some(self.next);
		let _ = self.ops.send(Op::Start(self.next));
		Ok(self.next)
	}

	fn terminate(&mut self, handle: u32) {
		assert_eq!(self.live.take(), Some(handle), "terminate of a process that is not live");
		let _ = self.ops.send(Op::Terminate(handle));
	}
}

pub fn spec() -> LaunchSpec {
	LaunchSpec {
		program: "go".into(),
		args: vec!["run".into(), "./cmd/server".into()],
		working_dir: ".".into(),
		env: HashMap::new(),
	}
}

/// Every start is preceded by the terminate of the previous process.
pub fn assert_serialized(ops: &[Op]) {
	let mut live: Option<u32> = None;
	for op in ops {
		match *op {
			Op::Start(id) => {
				assert!(live.is_none(), "start {} while {:?} alive in {:?}", id, live, ops);
				live = Some(id);
			}
			Op::Terminate(id) => {
				assert_eq!(live, Some(id), "unexpected terminate in {:?}", ops);
				live = None;
			}
		}
	}
}
