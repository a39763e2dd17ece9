//! Init command - initialize the vault store.

use tracing::info;

use crate::cli::output;
use crate::core::vault::Vault;
use crate::error::Result;

/// Initialize the vault store. Idempotent: an existing store is left as-is.
pub fn execute() -> Result<()> {
    let vault = Vault::open()?;
    let accounts = vault.users()?.len();

    output::success("vault initialized");
    output::kv("accounts:", accounts);

    info!("initialized successfully");
    Ok(())
}
