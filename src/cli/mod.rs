//! Command-line interface.

pub mod auth;
pub mod completions;
pub mod init;
pub mod output;
pub mod transfer;
pub mod words;

use clap::{Parser, Subcommand};

use crate::core::domain::CurrentUser;
use crate::core::vault::Vault;
use crate::error::{AuthError, Result};

/// VocabVault - an encrypted local vocabulary vault.
#[derive(Parser)]
#[command(
    name = "vocabvault",
    about = "An encrypted local vocabulary vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose logging (same as VOCABVAULT_LOG=vocabvault=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the vault store
    Init,

    /// Create an account and log in
    Signup {
        /// Username (prompted if omitted)
        #[arg(short, long)]
        username: Option<String>,
        /// Email address (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,
        /// Password (prompted if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Log in to an existing account
    Login {
        /// Username (prompted if omitted)
        #[arg(short, long)]
        username: Option<String>,
        /// Password (prompted if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Log out of the current session
    Logout,

    /// Show the current session user
    Whoami,

    /// Add a vocabulary item
    Add {
        /// The word itself
        word: String,
        /// Its definition
        definition: String,
        /// Example sentence
        #[arg(long)]
        example: Option<String>,
        /// Comma-joined synonyms
        #[arg(long)]
        synonyms: Option<String>,
        /// Comma-joined antonyms
        #[arg(long)]
        antonyms: Option<String>,
        /// Category tag (defaults to the word's first letter)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List vocabulary items, newest first
    List {
        /// Only show items in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a vocabulary item by id
    Edit {
        /// Item id (see `list`)
        id: String,
        #[arg(long)]
        word: Option<String>,
        #[arg(long)]
        definition: Option<String>,
        #[arg(long)]
        example: Option<String>,
        #[arg(long)]
        synonyms: Option<String>,
        #[arg(long)]
        antonyms: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Remove a vocabulary item by id
    Rm {
        /// Item id (see `list`)
        id: String,
    },

    /// Export the collection as a JSON bundle
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Import a JSON bundle into the collection
    Import {
        /// Path to the bundle file
        path: std::path::PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    use Command::*;

    match command {
        Init => init::execute(),
        Signup {
            username,
            email,
            password,
        } => auth::signup(username, email, password),
        Login { username, password } => auth::login(username, password),
        Logout => auth::logout(),
        Whoami => auth::whoami(),
        Add {
            word,
            definition,
            example,
            synonyms,
            antonyms,
            category,
        } => words::add(word, definition, example, synonyms, antonyms, category),
        List { category, json } => words::list(category.as_deref(), json),
        Edit {
            id,
            word,
            definition,
            example,
            synonyms,
            antonyms,
            category,
        } => words::edit(&id, word, definition, example, synonyms, antonyms, category),
        Rm { id } => words::rm(&id),
        Export { output } => transfer::export(output),
        Import { path } => transfer::import(&path),
        Completions { shell } => completions::execute(shell),
    }
}

/// The logged-in session user, or `AuthError::NotLoggedIn`.
pub(crate) fn session_user(vault: &Vault) -> Result<CurrentUser> {
    vault
        .current_user()?
        .ok_or_else(|| AuthError::NotLoggedIn.into())
}
