//! Publishes external rate quotes to UI sessions.
//!
//! The feed sits between whatever produces quotes (an HTTP poller, an SSE
//! stream) and the session that dispatches [`Action::SetRate`]. Quotes are
//! sanity-checked at the publishing edge, so a corrupt value from the quote
//! source never reaches a dispatch.
//!
//! [`Action::SetRate`]: crate::action::Action::SetRate

use tokio::sync::watch;

use crate::error::TransitionError;

/// Publishing side of the rate feed.
#[derive(Debug, Clone)]
pub struct RateFeed {
    tx: watch::Sender<f64>,
}

impl RateFeed {
    /// Creates a feed seeded with the session's starting rate.
    pub fn new(initial_rate: f64) -> Self {
        let (tx, _rx) = watch::channel(initial_rate);
        Self { tx }
    }

    /// Hands out a subscription. Dropping the subscription is the
    /// unsubscribe; the feed itself keeps working for other subscribers.
    pub fn subscribe(&self) -> RateSubscription {
        RateSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Forwards a fresh quote to all subscribers.
    ///
    /// Non-finite or non-positive quotes are rejected and logged; nothing is
    /// forwarded for them.
    pub fn publish(&self, rate: f64) -> Result<(), TransitionError> {
        if !rate.is_finite() || rate <= 0.0 {
            tracing::warn!("rate feed rejected quote: {}", rate);
            return Err(TransitionError::InvalidNumeric {
                field: "rate",
                value: rate,
            });
        }
        self.tx.send_replace(rate);
        Ok(())
    }
}

/// Receiving side of the rate feed, owned by one UI session for its
/// lifetime: acquired on mount, released (dropped) on teardown.
#[derive(Debug)]
pub struct RateSubscription {
    rx: watch::Receiver<f64>,
}

impl RateSubscription {
    /// Waits for the next tick and returns it. Returns `None` once the feed
    /// has been dropped and no further ticks can arrive.
    pub async fn next_rate(&mut self) -> Option<f64> {
        if self.rx.changed().await.is_err() {
            return None;
        }
        Some(*self.rx.borrow_and_update())
    }

    /// The most recently published rate, without waiting.
    pub fn latest(&self) -> f64 {
        *self.rx.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_see_published_quotes() {
        let feed = RateFeed::new(19133.74);
        let mut sub = feed.subscribe();

        feed.publish(20000.0).unwrap();
        assert_eq!(sub.next_rate().await, Some(20000.0));
    }

    #[tokio::test]
    async fn rejected_quotes_are_not_forwarded() {
        let feed = RateFeed::new(19133.74);
        let sub = feed.subscribe();

        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(feed.publish(bad).is_err());
        }
        assert_eq!(sub.latest(), 19133.74);
    }

    #[tokio::test]
    async fn subscription_ends_when_the_feed_is_dropped() {
        let feed = RateFeed::new(19133.74);
        let mut sub = feed.subscribe();
        drop(feed);

        assert_eq!(sub.next_rate().await, None);
    }

    #[tokio::test]
    async fn only_the_latest_quote_is_retained() {
        let feed = RateFeed::new(19133.74);
        let mut sub = feed.subscribe();

        feed.publish(20000.0).unwrap();
        feed.publish(21000.0).unwrap();
        assert_eq!(sub.next_rate().await, Some(21000.0));
    }
}
