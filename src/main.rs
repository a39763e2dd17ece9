//! VocabVault - an encrypted local vocabulary vault.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vocabvault::cli::output;
use vocabvault::cli::{execute, Cli};
use vocabvault::error::{AuthError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("VOCABVAULT_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vocabvault=debug")
        } else {
            EnvFilter::new("vocabvault=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Auth(AuthError::NotLoggedIn) => Some("run: vocabvault login"),
            Error::Auth(AuthError::AccountExists) => Some("run: vocabvault login"),
            Error::Auth(AuthError::InvalidCredentials) => {
                Some("check your username and password")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
