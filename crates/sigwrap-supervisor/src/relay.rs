//! Signal interception and best-effort forwarding.
//!
//! Subscribing swaps the default disposition of the forwarded set for a
//! bounded event channel; unsubscribing closes that channel. The relay is a
//! scoped resource: every supervision exit path must release it.

use std::io;

use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// The fixed allow-list of signals relayed to the child.
pub const FORWARDED_SIGNALS: [ForwardedSignal; 2] =
    [ForwardedSignal::Interrupt, ForwardedSignal::Terminate];

/// A signal kind in the forwarding allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardedSignal {
    /// Interrupt request (SIGINT, Ctrl+C).
    Interrupt,
    /// Termination request (SIGTERM).
    Terminate,
}

impl ForwardedSignal {
    /// Raw signal number.
    pub fn signo(self) -> i32 {
        self.as_nix() as i32
    }

    fn as_nix(self) -> nix::sys::signal::Signal {
        use nix::sys::signal::Signal;
        match self {
            Self::Interrupt => Signal::SIGINT,
            Self::Terminate => Signal::SIGTERM,
        }
    }

    fn kind(self) -> SignalKind {
        match self {
            Self::Interrupt => SignalKind::interrupt(),
            Self::Terminate => SignalKind::terminate(),
        }
    }
}

/// Active registration for the forwarded signal set.
///
/// While a relay is live, signals in [`FORWARDED_SIGNALS`] no longer apply
/// their default action against the supervisor; they queue as events on a
/// capacity-1 channel. A consumer that lags sees at most the most recent
/// pending signal per kind, which is acceptable for best-effort forwarding.
pub struct SignalRelay {
    events: mpsc::Receiver<ForwardedSignal>,
    pump: JoinHandle<()>,
}

impl SignalRelay {
    /// Register interest in the forwarded signal set and start queuing events.
    pub fn subscribe() -> io::Result<Self> {
        let mut interrupt = signal(ForwardedSignal::Interrupt.kind())?;
        let mut terminate = signal(ForwardedSignal::Terminate.kind())?;

        let (tx, events) = mpsc::channel(1);
        let pump = tokio::spawn(async move {
            loop {
                let event = tokio::select! {
                    _ = interrupt.recv() => ForwardedSignal::Interrupt,
                    _ = terminate.recv() => ForwardedSignal::Terminate,
                };
                if tx.send(event).await.is_err() {
                    break;
                }
            }
        });

        debug!("signal relay subscribed: {:?}", FORWARDED_SIGNALS);
        Ok(Self { events, pump })
    }

    /// Receive the next intercepted signal.
    ///
    /// Lazy and effectively infinite until [`unsubscribe`](Self::unsubscribe);
    /// `None` only after the relay has been released.
    pub async fn recv(&mut self) -> Option<ForwardedSignal> {
        self.events.recv().await
    }

    /// Stop producing events and close the event channel.
    ///
    /// Consumes the relay, so release happens exactly once per subscription.
    pub fn unsubscribe(mut self) {
        self.pump.abort();
        self.events.close();
        debug!("signal relay unsubscribed");
    }
}

/// Best-effort delivery of `signal` to the child at `pid`.
///
/// A child that has already exited (ESRCH) is the benign race between
/// termination and forwarding; it is swallowed here. No failure from this
/// function affects loop progress, which the termination waiter alone decides.
pub fn forward(pid: u32, signal: ForwardedSignal) {
    use nix::errno::Errno;
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    match kill(Pid::from_raw(pid as i32), signal.as_nix()) {
        Ok(()) => debug!("forwarded {:?} to pid {}", signal, pid),
        Err(Errno::ESRCH) => debug!("pid {} already gone, {:?} dropped", pid, signal),
        Err(e) => debug!("could not forward {:?} to pid {}: {}", signal, pid, e),
    }
}
