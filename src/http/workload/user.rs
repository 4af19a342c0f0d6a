use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, sleep, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use super::{CallOutcome, CallPort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UserState {
    Running,
    Stopping,
    Stopped,
}

/// What a virtual user hands back to the orchestrator once it has stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UserReport {
    pub(crate) id: usize,
    pub(crate) calls: u64,
    pub(crate) failures: u64,
    pub(crate) state: UserState,
}

/// Stop condition for one user: its own deadline, or the run-wide token.
struct StopSignal {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl StopSignal {
    fn arm(token: CancellationToken, duration: Duration) -> Self {
        Self {
            token,
            deadline: Instant::now().checked_add(duration),
        }
    }

    fn is_raised(&self) -> bool {
        self.token.is_cancelled()
            || self
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
    }

    async fn raised(&self) {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    () = self.token.cancelled() => {}
                    () = sleep_until(deadline) => {}
                }
            }
            None => self.token.cancelled().await,
        }
    }
}

#[derive(Debug, Default)]
struct CallTally {
    calls: u64,
    failures: u64,
}

impl CallTally {
    const fn record(&mut self, outcome: &CallOutcome) {
        self.calls = self.calls.saturating_add(1);
        if !outcome.is_completed() {
            self.failures = self.failures.saturating_add(1);
        }
    }
}

/// One independent request loop: call, wait `delay`, repeat until stopped.
pub(crate) struct VirtualUser<E> {
    id: usize,
    executor: Arc<E>,
    delay: Duration,
    duration: Duration,
    shutdown: CancellationToken,
}

impl<E> VirtualUser<E>
where
    E: CallPort,
{
    pub(crate) const fn new(
        id: usize,
        executor: Arc<E>,
        delay: Duration,
        duration: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            id,
            executor,
            delay,
            duration,
            shutdown,
        }
    }

    /// Runs the loop to completion. The duration timer starts on entry.
    pub(crate) async fn run(self) -> UserReport {
        let stop = StopSignal::arm(self.shutdown.clone(), self.duration);
        debug!("Virtual user {} started", self.id);

        let mut tally = CallTally::default();
        let mut state = UserState::Running;
        while state != UserState::Stopped {
            state = match state {
                UserState::Running => self.step(&stop, &mut tally).await,
                UserState::Stopping | UserState::Stopped => UserState::Stopped,
            };
        }

        debug!(
            "Virtual user {} stopped after {} calls ({} failed)",
            self.id, tally.calls, tally.failures
        );
        UserReport {
            id: self.id,
            calls: tally.calls,
            failures: tally.failures,
            state,
        }
    }

    async fn step(&self, stop: &StopSignal, tally: &mut CallTally) -> UserState {
        if stop.is_raised() {
            return UserState::Stopping;
        }

        let outcome = tokio::select! {
            biased;
            () = stop.raised() => return UserState::Stopping,
            outcome = self.executor.execute() => outcome,
        };
        tally.record(&outcome);
        match &outcome {
            CallOutcome::Completed { status, .. } => {
                trace!("Virtual user {} call completed with {}", self.id, status);
            }
            CallOutcome::Failed {
                reason,
                timed_out: true,
            } => {
                debug!("Virtual user {} call timed out: {}", self.id, reason);
            }
            CallOutcome::Failed { reason, .. } => {
                trace!("Virtual user {} call failed: {}", self.id, reason);
            }
        }

        // Fixed pause after each call, not a fixed-rate schedule.
        tokio::select! {
            biased;
            () = stop.raised() => UserState::Stopping,
            () = sleep(self.delay) => UserState::Running,
        }
    }
}
