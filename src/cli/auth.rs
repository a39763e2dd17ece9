//! Account commands: signup, login, logout, whoami.
//!
//! Authentication lives here, outside the core: signup and login read the
//! users collection, hash the supplied password, and compare digests by
//! equality. The core only stores what it is handed.

use dialoguer::{Input, Password};
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::codec::hash_password;
use crate::core::domain::{CurrentUser, User};
use crate::core::vault::Vault;
use crate::error::{AuthError, Result};

const MIN_PASSWORD_LEN: usize = 8;

/// Create an account and log it in.
pub fn signup(
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let vault = Vault::open()?;

    let username = match username {
        Some(username) => username,
        None => Input::new()
            .with_prompt("Username")
            .default(whoami::username())
            .interact_text()?,
    };
    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Zeroizing::new(match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "passwords do not match")
            .interact()?,
    });

    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields.into());
    }
    if !valid_email(&email) {
        return Err(AuthError::InvalidEmail(email).into());
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword.into());
    }

    let mut users = vault.users()?;
    if users
        .iter()
        .any(|u| u.username == username || u.email == email)
    {
        return Err(AuthError::AccountExists.into());
    }

    let user = User::new(username, email, hash_password(&password));
    let current = CurrentUser::from(&user);

    info!(username = %user.username, "registering account");
    users.push(user);
    vault.save_users(&users)?;
    vault.save_current_user(&current)?;

    output::success(&format!(
        "account created, logged in as {}",
        output::key(&current.username)
    ));
    Ok(())
}

/// Log in by username and password.
pub fn login(username: Option<String>, password: Option<String>) -> Result<()> {
    let vault = Vault::open()?;

    let username: String = match username {
        Some(username) => username,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let password = Zeroizing::new(match password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    });

    let users = vault.users()?;
    let digest = hash_password(&password);

    // Same failure for unknown user and wrong password
    let user = users
        .iter()
        .find(|u| u.username == username && u.password_hash == digest)
        .ok_or(AuthError::InvalidCredentials)?;

    vault.save_current_user(&CurrentUser::from(user))?;

    info!(username = %user.username, "logged in");
    output::success(&format!("logged in as {}", output::key(&user.username)));
    Ok(())
}

/// Clear the session.
pub fn logout() -> Result<()> {
    let vault = Vault::open()?;
    vault.remove_current_user()?;
    output::success("logged out");
    Ok(())
}

/// Show the session user.
pub fn whoami() -> Result<()> {
    let vault = Vault::open()?;

    match vault.current_user()? {
        Some(user) => {
            output::kv("username:", &user.username);
            output::kv("email:", &user.email);
        }
        None => output::dimmed("not logged in"),
    }
    Ok(())
}

/// Minimal email shape check: one '@' with a dotted domain, no whitespace.
fn valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
        && !domain.contains('@')
}
