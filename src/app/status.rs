use clap::Args;
use roundup_lib::{Auth, Client, Dashboard};

use crate::Error;

#[derive(Debug, Args, Clone, Copy)]
pub struct Status;

impl Status {
    pub async fn run(self, auth: Auth) -> Result<(), Error> {
        let dashboard = Dashboard::new(Client::from(auth));

        loop {
            dashboard.refresh().await;
            let state = dashboard.state();
            println!("{}", super::summary(&state));

            if !state.is_error {
                return Ok(());
            }

            println!("Some account details could not be loaded.");
            if !super::confirm("Retry?")? {
                return Ok(());
            }
        }
    }
}
