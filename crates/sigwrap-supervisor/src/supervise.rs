//! The supervision loop: launch the child, forward intercepted signals,
//! observe termination, tear down the relay.

use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tokio::sync::oneshot;
use tracing::debug;

use crate::errors::{SuperviseError, SuperviseResult};
use crate::relay::{forward, SignalRelay};

/// Argument vector for the child: program path plus verbatim arguments.
#[derive(Debug, Clone)]
pub struct ChildSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl ChildSpec {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

/// How the child ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationOutcome {
    /// Normal exit with the given code (0 = clean).
    Exited { code: i32 },
    /// Terminated by the given signal.
    Signaled { signal: i32 },
}

impl TerminationOutcome {
    fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::Exited { code },
            None => {
                use std::os::unix::process::ExitStatusExt;
                Self::Signaled {
                    signal: status.signal().unwrap_or(0),
                }
            }
        }
    }

    /// Conventional shell exit code for this outcome: the child's own code,
    /// or 128 + signo for a signal-terminated child.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Exited { code } => code,
            Self::Signaled { signal } => 128 + signal,
        }
    }
}

/// Run one supervised child to completion.
///
/// Subscribes the signal relay, launches the child with inherited standard
/// streams, then waits concurrently on intercepted signals and on child
/// termination. Each intercepted signal is forwarded to the child's pid;
/// the loop leaves its waiting state only when the child terminates. The
/// relay is released on every exit path, including launch failure.
pub async fn supervise(spec: ChildSpec) -> SuperviseResult<TerminationOutcome> {
    let mut relay = SignalRelay::subscribe().map_err(SuperviseError::signal_setup_failed)?;

    let mut child = match Command::new(&spec.program)
        .args(&spec.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            relay.unsubscribe();
            return Err(SuperviseError::spawn_failed(&spec.program, e));
        }
    };

    // Pid is captured before the handle moves into the waiter task; all
    // forwarding afterwards is pid-based.
    let pid = child.id();
    debug!("child launched: {} (pid {:?})", spec.program, pid);

    let (status_tx, mut status_rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = status_tx.send(child.wait().await);
    });

    let status = loop {
        tokio::select! {
            event = relay.recv() => match event {
                Some(sig) => {
                    if let Some(pid) = pid {
                        forward(pid, sig);
                    }
                }
                // Relay released out from under us; nothing further to
                // forward, so just wait out the child.
                None => break (&mut status_rx).await,
            },
            status = &mut status_rx => break status,
        }
    };
    relay.unsubscribe();

    match status {
        Ok(Ok(exit)) => {
            let outcome = TerminationOutcome::from_status(exit);
            debug!("child terminated: {:?}", outcome);
            Ok(outcome)
        }
        Ok(Err(e)) => Err(SuperviseError::wait_failed(e)),
        Err(_) => Err(SuperviseError::WaiterLost),
    }
}
