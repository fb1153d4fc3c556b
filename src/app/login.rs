use clap::Args;
use roundup_lib::Environment;

use crate::{config, Error};

#[derive(Debug, Args)]
pub struct Login {
    /// Starling personal access token
    access_token: String,

    /// Use the live API rather than the sandbox
    #[arg(long)]
    production: bool,
}

impl Login {
    pub fn run(self) -> Result<(), Error> {
        let mut auth = config::auth()?;
        auth.access_token = self.access_token;
        auth.environment = if self.production {
            Environment::Production
        } else {
            Environment::Sandbox
        };

        config::save_auth(&auth)?;
        println!("saved credentials to {}", config::auth_path()?.display());
        Ok(())
    }
}
