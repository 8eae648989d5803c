use super::*;

/// A status line override that lapses after a fixed time.
#[derive(Clone, Debug)]
pub(crate) struct TransientMessage {
  expires_at: Instant,
  text: String,
}

impl TransientMessage {
  pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
    now >= self.expires_at
  }

  pub(crate) fn new(text: String) -> Self {
    Self {
      expires_at: Instant::now() + TRANSIENT_MESSAGE_TIMEOUT,
      text,
    }
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn expires_after_timeout() {
    let message = TransientMessage::new("reloaded".into());

    assert_eq!(message.text(), "reloaded");
    assert!(!message.is_expired_at(Instant::now()));
    assert!(
      message
        .is_expired_at(Instant::now() + TRANSIENT_MESSAGE_TIMEOUT * 2)
    );
  }
}
