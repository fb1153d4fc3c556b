use clap::Args;
use roundup_lib::{dashboard::State, Auth, Client, Dashboard};
use tracing::Level;

use crate::Error;

#[derive(Debug, Args, Clone, Copy)]
pub struct Transfer {
    /// Transfer without asking for confirmation
    #[arg(long, short)]
    yes: bool,
}

impl Transfer {
    pub async fn run(self, auth: Auth) -> Result<(), Error> {
        let dashboard = Dashboard::new(Client::from(auth));

        dashboard.refresh().await;
        let state = dashboard.state();
        println!("{}", super::summary(&state));

        let Some(question) = question(&state) else {
            println!("nothing to do ...");
            return Ok(());
        };

        if !self.yes && !super::confirm(&question)? {
            println!("nothing to do ...");
            return Ok(());
        }

        let receipt = dashboard.transfer().await;
        println!("{}", super::summary(&dashboard.state()));

        let receipt = receipt?;
        tracing::event!(
            Level::INFO,
            transfer_uid = %receipt.outcome.transfer_uid,
            "transfer complete"
        );
        println!(
            "Transferred {} into '{}'",
            receipt.amount, receipt.savings_goal
        );

        Ok(())
    }
}

/// What to ask before transferring, or `None` if there is nothing to move.
///
/// The amount is the one a transfer would actually submit, which can be
/// less than the displayed round-up total.
fn question(state: &State) -> Option<String> {
    let amount = state.transfer_amount()?;
    let goal = state.savings_goal.as_ref()?;

    if amount.minor_units() <= 0 {
        return None;
    }

    Some(format!("Transfer {amount} into '{}'?", goal.name))
}

#[cfg(test)]
mod tests {
    use roundup_lib::{Money, SavingsGoal};

    use super::*;

    fn state(round_up_total: f64) -> State {
        State {
            round_up_total: Some(round_up_total),
            currency: Some("GBP".to_string()),
            savings_goal: Some(SavingsGoal {
                savings_goal_uid: "goal".to_string(),
                name: "Holiday".to_string(),
                total_saved: Money::new("GBP", 1000),
                target: Money::new("GBP", 2000),
            }),
            ..State::default()
        }
    }

    #[test]
    fn asks_for_the_amount_that_will_be_sent() {
        assert_eq!(
            question(&state(1.0)).as_deref(),
            Some("Transfer £1.00 into 'Holiday'?")
        );
    }

    #[test]
    fn sub_penny_round_up_is_nothing_to_do() {
        // £9.99 rounds up by 0.01 in floating point, just short of a penny
        let state = state(10.0 - 9.99);

        assert_eq!(state.round_up().unwrap().to_string(), "£0.01");
        assert_eq!(question(&state), None);
    }

    #[test]
    fn nothing_to_ask_without_a_goal() {
        let state = State {
            savings_goal: None,
            ..state(1.0)
        };

        assert_eq!(question(&state), None);
    }
}
