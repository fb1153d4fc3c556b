//! The view state shown to the account holder, and the updates that drive it

use std::{
    future::Future,
    sync::atomic::{AtomicBool, Ordering},
};

use futures_util::future::join3;
use tokio::sync::watch;
use tracing::{instrument, Level};

use crate::{lookup, transfer, Error, Gateway, Money, Receipt, SavingsGoal, DEFAULT_CURRENCY};

/// A snapshot of everything the dashboard displays
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    /// An update is in progress
    pub is_loading: bool,

    /// At least one part of the last update failed
    pub is_error: bool,

    /// The account holder's name, once it has been fetched
    pub account_holder_name: Option<String>,

    /// The round-up total of the last week's transactions, in major units
    pub round_up_total: Option<f64>,

    /// The currency of the account the round-up total was taken from
    pub currency: Option<String>,

    /// The current savings goal, once it has been fetched
    pub savings_goal: Option<SavingsGoal>,

    /// The share of the savings goal's target saved so far, in `[0, 100]`
    pub percentage_saved: f64,
}

impl State {
    /// The round-up total, to the nearest minor unit
    #[must_use]
    pub fn round_up(&self) -> Option<Money> {
        self.round_up_total.map(Money::from_major_units_rounded)
    }

    /// The amount a transfer would move right now: the round-up total in the
    /// account's currency, truncated to whole minor units
    #[must_use]
    pub fn transfer_amount(&self) -> Option<Money> {
        let currency = self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);
        self.round_up_total.map(|total| Money::from_major_units_in(currency, total))
    }

    /// The amount saved toward the goal
    #[must_use]
    pub fn total_saved(&self) -> Option<&Money> {
        self.savings_goal.as_ref().map(|goal| &goal.total_saved)
    }

    /// The goal's target
    #[must_use]
    pub fn target(&self) -> Option<&Money> {
        self.savings_goal.as_ref().map(|goal| &goal.target)
    }
}

/// Resets the in-flight flag when an update finishes or is dropped
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Owns the dashboard [`State`] and is the only thing that writes to it.
///
/// Readers take snapshots with [`Dashboard::state`] or watch for changes
/// with [`Dashboard::subscribe`]. Only one update (a refresh or a transfer)
/// runs at a time.
#[derive(Debug)]
pub struct Dashboard<G> {
    gateway: G,
    state: watch::Sender<State>,
    in_flight: AtomicBool,
}

impl<G: Gateway> Dashboard<G> {
    /// Create an idle dashboard with nothing loaded
    pub fn new(gateway: G) -> Self {
        let (state, _) = watch::channel(State::default());
        Self {
            gateway,
            state,
            in_flight: AtomicBool::new(false),
        }
    }

    /// The gateway the dashboard reads from
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// A snapshot of the current state
    pub fn state(&self) -> State {
        self.state.borrow().clone()
    }

    /// Watch the state for changes
    pub fn subscribe(&self) -> watch::Receiver<State> {
        self.state.subscribe()
    }

    /// Reload the account holder's name, the round-up total and the savings
    /// goal.
    ///
    /// `is_loading` is set as soon as this is called, before the returned
    /// future is polled. The three lookups run concurrently and all of them
    /// are allowed to finish; whichever succeed are shown even if another
    /// fails, in which case `is_error` is set.
    ///
    /// Calling this while another update is in progress does nothing.
    pub fn refresh(&self) -> impl Future<Output = ()> + '_ {
        let guard = self.begin();
        async move {
            if let Some(_guard) = guard {
                self.load().await;
            }
        }
    }

    /// Sweep the round-up total into the savings goal, then refresh.
    ///
    /// The dashboard is refreshed whether or not the transfer succeeds, and
    /// its `is_error` flag reflects only that refresh. The transfer's own
    /// result is returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] if another update is in progress, otherwise
    /// the transfer's error.
    #[instrument(skip(self))]
    pub async fn transfer(&self) -> Result<Receipt, Error> {
        let Some(_guard) = self.begin() else {
            return Err(Error::Busy);
        };

        let outcome = transfer::round_up_to_savings_goal(&self.gateway).await;
        if let Err(e) = &outcome {
            tracing::event!(Level::WARN, error = %e, "transfer failed");
        }

        self.load().await;

        outcome
    }

    fn begin(&self) -> Option<InFlight<'_>> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            tracing::event!(Level::DEBUG, "update already in progress");
            return None;
        }

        self.state.send_modify(|state| state.is_loading = true);
        Some(InFlight(&self.in_flight))
    }

    #[instrument(skip(self))]
    async fn load(&self) {
        let gateway = &self.gateway;

        let name = gateway.account_holder_name();
        let round_up = async {
            let account = lookup::current_account(gateway).await?;
            let total = lookup::round_up_total(gateway, &account).await?;
            Ok::<_, Error>((total, account.currency))
        };
        let goal = async {
            let account = lookup::current_account(gateway).await?;
            lookup::savings_goal(gateway, &account).await
        };

        let (name, round_up, goal) = join3(name, round_up, goal).await;

        self.state.send_modify(|state| {
            let mut failed = false;

            match name {
                Ok(name) => state.account_holder_name = Some(name),
                Err(e) => {
                    log_failure("account holder name", &e);
                    failed = true;
                }
            }

            match round_up {
                Ok((total, currency)) => {
                    state.round_up_total = Some(total);
                    state.currency = Some(currency);
                }
                Err(e) => {
                    log_failure("round-up total", &e);
                    failed = true;
                }
            }

            match goal {
                Ok(goal) => {
                    state.percentage_saved = goal.percentage_saved();
                    state.savings_goal = Some(goal);
                }
                Err(e) => {
                    log_failure("savings goal", &e);
                    failed = true;
                }
            }

            state.is_loading = false;
            state.is_error = failed;
        });

        tracing::event!(Level::INFO, "dashboard updated");
    }
}

fn log_failure(what: &str, error: &Error) {
    tracing::event!(Level::WARN, error = %error, "failed to load {what}");
}
