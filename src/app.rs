use std::io::{self, BufRead, IsTerminal, Write};

use clap::{ArgAction, Parser, Subcommand};
use roundup_lib::{dashboard::State, Auth};

use crate::{config, Error};

mod login;
mod show;
mod status;
mod transfer;

use login::Login;
use show::Show;
use status::Status;
use transfer::Transfer;

/// Sweep the round-ups of the last week's spending into a Starling savings
/// goal
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct App {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Starling personal access token. Overrides the stored token.
    #[arg(long, global = true, env = "STARLING_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the round-up total and savings goal progress
    Status(Status),

    /// Move the round-up total into the savings goal
    Transfer(Transfer),

    /// Show the active configuration
    Show(Show),

    /// Store an access token
    Login(Login),
}

impl App {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn command_name(&self) -> &'static str {
        match self.command {
            Command::Status(_) => "status",
            Command::Transfer(_) => "transfer",
            Command::Show(_) => "show",
            Command::Login(_) => "login",
        }
    }

    pub async fn run(self) -> Result<(), Error> {
        match self.command {
            Command::Login(login) => login.run(),
            Command::Show(show) => show.run(&resolve_auth(self.access_token)?),
            Command::Status(status) => status.run(resolve_auth(self.access_token)?).await,
            Command::Transfer(transfer) => transfer.run(resolve_auth(self.access_token)?).await,
        }
    }
}

/// The stored credentials, with the token replaced if one was given on the
/// command line
fn resolve_auth(access_token: Option<String>) -> Result<Auth, Error> {
    let mut auth = config::auth()?;
    if let Some(access_token) = access_token {
        auth.access_token = access_token;
    }
    Ok(auth)
}

fn summary(state: &State) -> String {
    const UNAVAILABLE: &str = "unavailable";

    let mut summary = String::new();

    let name = state.account_holder_name.as_deref().unwrap_or(UNAVAILABLE);
    summary += &format!("Account holder: {name}\n");

    let round_up = state
        .round_up()
        .map_or_else(|| UNAVAILABLE.to_string(), |amount| amount.to_string());
    summary += &format!("Round-up total: {round_up}\n");

    match &state.savings_goal {
        Some(goal) => {
            summary += &format!(
                "Savings goal:   {}, {} of {} ({:.0}%)\n",
                goal.name, goal.total_saved, goal.target, state.percentage_saved
            );
        }
        None => summary += &format!("Savings goal:   {UNAVAILABLE}\n"),
    }

    summary
}

/// Ask a yes/no question on the terminal. Anything other than "y" or "yes"
/// is a no, and so is a non-interactive stdin.
fn confirm(question: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Ok(false);
    }

    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
