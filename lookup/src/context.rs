use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("The lookup was cancelled")]
    Cancelled,
    #[error("The lookup deadline was exceeded")]
    DeadlineExceeded,
}

/// Cancellation flag and deadline shared by every request of one lookup.
///
/// Clones share the flag, so cancelling any clone cancels all of them.
#[derive(Clone, Default, Debug)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Context {
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// The earlier of the current and the new deadline wins.
    #[must_use]
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        Self {
            cancelled: self.cancelled.clone(),
            deadline: Some(match self.deadline {
                Some(current) => current.min(deadline),
                None => deadline,
            }),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    pub fn check(&self) -> Result<(), ContextError> {
        if self.is_cancelled() {
            return Err(ContextError::Cancelled);
        }
        if let Some(remaining) = self.remaining()
            && remaining.is_zero()
        {
            return Err(ContextError::DeadlineExceeded);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{Context, ContextError};

    #[test]
    fn background_never_expires() {
        let context = Context::background();
        assert_eq!(context.remaining(), None);
        assert_eq!(context.check(), Ok(()));
    }

    #[test]
    fn cancel_reaches_every_clone() {
        let context = Context::background();
        let child = context.with_timeout(Duration::from_secs(60));

        context.cancel();
        assert_eq!(child.check(), Err(ContextError::Cancelled));
    }

    #[test]
    fn passed_deadline_fails_the_check() {
        let context = Context::background().with_deadline(Instant::now());
        assert_eq!(context.check(), Err(ContextError::DeadlineExceeded));
    }

    #[test]
    fn earlier_deadline_is_kept() {
        let now = Instant::now();
        let context = Context::background()
            .with_deadline(now + Duration::from_secs(5))
            .with_deadline(now + Duration::from_secs(50));
        assert_eq!(context.deadline(), Some(now + Duration::from_secs(5)));
    }
}
