#![deny(
    clippy::all,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic)]

use anyhow::Context;
use clap::Parser;
use confy::ConfyError;

mod app;
mod config;
mod logging;

use app::App;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config")]
    Config(#[from] ConfyError),

    #[error(transparent)]
    Bank(#[from] roundup_lib::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = App::parse();
    logging::set_up(app.verbosity());

    let command = app.command_name();
    app.run()
        .await
        .with_context(|| format!("failed to run '{command}'"))
}
