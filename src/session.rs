//! Single-threaded host that owns the state and serializes dispatches.

use crate::action::Action;
use crate::balance::BalanceUpdate;
use crate::balance::WalletBalances;
use crate::error::TransitionError;
use crate::rate_feed::RateSubscription;
use crate::reducer::reduce;
use crate::state::ExchangePairState;

/// One UI session over the exchange pair.
///
/// Every input path (UI handlers, the rate feed, the submission callback)
/// funnels through [`dispatch`](Self::dispatch), so actions are applied
/// strictly one at a time; the reducer itself needs no locking. The rate
/// subscription lives exactly as long as the session: attached on mount,
/// released when the session is dropped.
#[derive(Debug, Default)]
pub struct ExchangeSession {
    state: ExchangePairState,
    balances: WalletBalances,
    rate_subscription: Option<RateSubscription>,
}

impl ExchangeSession {
    /// Starts a session from the fixed initial pair.
    pub fn new() -> Self {
        Self {
            state: ExchangePairState::initial(),
            balances: WalletBalances::new(),
            rate_subscription: None,
        }
    }

    /// Attaches the rate subscription acquired on mount.
    pub fn attach_rate_subscription(&mut self, subscription: RateSubscription) {
        self.rate_subscription = Some(subscription);
    }

    /// Waits for the next rate tick, if a subscription is attached, and
    /// dispatches it into the state. Returns the applied rate, or `None`
    /// when no subscription is attached or the feed has ended.
    pub async fn pump_rate(&mut self) -> Result<Option<f64>, TransitionError> {
        let Some(subscription) = self.rate_subscription.as_mut() else {
            return Ok(None);
        };
        match subscription.next_rate().await {
            Some(rate) => {
                self.dispatch(&Action::SetRate(rate))?;
                Ok(Some(rate))
            }
            None => {
                // The feed is gone; no further ticks can arrive.
                self.rate_subscription = None;
                Ok(None)
            }
        }
    }

    /// Applies one action. On error the owned state is left untouched.
    pub fn dispatch(&mut self, action: &Action) -> Result<&ExchangePairState, TransitionError> {
        let next = reduce(&self.state, action)?;
        tracing::debug!("applied {:?}", action);
        self.state = next;
        Ok(&self.state)
    }

    pub fn state(&self) -> &ExchangePairState {
        &self.state
    }

    /// Records a balance push from the wallet collaborator.
    pub fn update_balances(&mut self, update: BalanceUpdate) {
        self.balances.apply_update(update);
    }

    pub fn balances(&self) -> &WalletBalances {
        &self.balances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetType;
    use crate::rate_feed::RateFeed;

    #[test]
    fn dispatch_replaces_the_owned_state() {
        let mut session = ExchangeSession::new();
        session.dispatch(&Action::SetAlphaAmount(0.02)).unwrap();
        assert_eq!(session.state().alpha.amount, 0.02);
    }

    #[test]
    fn failed_dispatch_leaves_the_state_untouched() {
        let mut session = ExchangeSession::new();
        let before = session.state().clone();

        let err = session.dispatch(&Action::SetRate(-1.0)).unwrap_err();
        assert!(matches!(err, TransitionError::InvalidNumeric { .. }));
        assert_eq!(session.state(), &before);
    }

    #[tokio::test]
    async fn pumped_rate_ticks_flow_into_the_state() {
        let feed = RateFeed::new(ExchangePairState::initial().rate);
        let mut session = ExchangeSession::new();
        session.attach_rate_subscription(feed.subscribe());

        feed.publish(20000.0).unwrap();
        assert_eq!(session.pump_rate().await.unwrap(), Some(20000.0));

        let state = session.state();
        assert_eq!(state.rate, 20000.0);
        assert_eq!(state.beta.amount, state.alpha.amount * 20000.0);
    }

    #[tokio::test]
    async fn pump_without_a_subscription_is_a_no_op() {
        let mut session = ExchangeSession::new();
        assert_eq!(session.pump_rate().await.unwrap(), None);
    }

    #[tokio::test]
    async fn session_drops_a_dead_subscription() {
        let feed = RateFeed::new(ExchangePairState::initial().rate);
        let mut session = ExchangeSession::new();
        session.attach_rate_subscription(feed.subscribe());
        drop(feed);

        assert_eq!(session.pump_rate().await.unwrap(), None);
        // Subsequent pumps short-circuit instead of polling a closed channel.
        assert_eq!(session.pump_rate().await.unwrap(), None);
    }

    #[test]
    fn balance_pushes_are_visible_but_never_touch_the_pair() {
        let mut session = ExchangeSession::new();
        let before = session.state().clone();

        session.update_balances(vec![crate::balance::BalanceEntry {
            asset: AssetType::USDT,
            value: 500.0,
        }]);

        assert_eq!(session.balances().balance(AssetType::USDT), 500.0);
        assert_eq!(session.state(), &before);
    }
}
