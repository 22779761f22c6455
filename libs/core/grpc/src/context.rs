//! Per-call deadline carried from the caller into the transport.

use std::time::Duration;

use tokio::time::Instant;

/// Default per-call timeout applied when the caller sets no deadline.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Caller-supplied call options.
///
/// A context without a deadline picks up the client's default timeout when the
/// call starts; an explicit deadline is never shortened or extended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallContext {
  deadline: Option<Instant>,
}

impl CallContext {
  /// No deadline.
  pub fn background() -> Self {
    Self::default()
  }

  /// Deadline `timeout` from now.
  pub fn with_timeout(timeout: Duration) -> Self {
    Self::with_deadline(Instant::now() + timeout)
  }

  pub fn with_deadline(deadline: Instant) -> Self {
    Self {
      deadline: Some(deadline),
    }
  }

  pub fn deadline(&self) -> Option<Instant> {
    self.deadline
  }

  /// Keep an explicit deadline, otherwise start a `timeout` countdown now.
  pub fn or_default_timeout(self, timeout: Duration) -> Self {
    match self.deadline {
      Some(_) => self,
      None => Self::with_timeout(timeout),
    }
  }

  /// Time left before the deadline; zero once it has passed.
  pub fn remaining(&self) -> Option<Duration> {
    self
      .deadline
      .map(|deadline| deadline.saturating_duration_since(Instant::now()))
  }

  pub fn is_expired(&self) -> bool {
    self.remaining().is_some_and(|left| left.is_zero())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test(start_paused = true)]
  async fn test_default_timeout_injected_when_missing() {
    let start = Instant::now();
    let cx = CallContext::background().or_default_timeout(DEFAULT_REQUEST_TIMEOUT);

    assert_eq!(cx.deadline(), Some(start + Duration::from_secs(60)));
  }

  #[tokio::test(start_paused = true)]
  async fn test_explicit_deadline_kept() {
    let deadline = Instant::now() + Duration::from_secs(5);
    let cx = CallContext::with_deadline(deadline).or_default_timeout(DEFAULT_REQUEST_TIMEOUT);

    assert_eq!(cx.deadline(), Some(deadline));
  }

  #[tokio::test(start_paused = true)]
  async fn test_remaining_counts_down() {
    let cx = CallContext::with_timeout(Duration::from_secs(2));
    assert_eq!(cx.remaining(), Some(Duration::from_secs(2)));

    tokio::time::advance(Duration::from_millis(1500)).await;
    assert_eq!(cx.remaining(), Some(Duration::from_millis(500)));
    assert!(!cx.is_expired());

    tokio::time::advance(Duration::from_secs(1)).await;
    assert_eq!(cx.remaining(), Some(Duration::ZERO));
    assert!(cx.is_expired());
  }

  #[test]
  fn test_background_has_no_deadline() {
    let cx = CallContext::background();
    assert_eq!(cx.deadline(), None);
    assert_eq!(cx.remaining(), None);
    assert!(!cx.is_expired());
  }
}
