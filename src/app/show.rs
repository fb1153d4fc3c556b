use clap::Args;
use roundup_lib::Auth;

use crate::{config, Error};

#[derive(Debug, Default, Args, Clone, Copy)]
pub struct Show;

impl Show {
    pub fn run(self, auth: &Auth) -> Result<(), Error> {
        println!("config file:  {}", config::auth_path()?.display());
        println!("environment:  {:?}", auth.environment);
        println!("base url:     {}", auth.environment.base_url());
        println!("access token: {}", mask(&auth.access_token));
        Ok(())
    }
}

/// Hide all but the last four characters of a secret
fn mask(secret: &str) -> String {
    let visible = secret.chars().count().saturating_sub(4);
    secret
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible { '*' } else { c })
        .collect()
}
