//! Constants used throughout vocabvault.
//!
//! Centralizes magic strings and configuration values.

/// Application directory relative to HOME (~/.vocabvault).
pub const APP_DIR: &str = ".vocabvault";

/// Configuration file name inside the application directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Slot holding the encrypted users collection.
pub const USERS_SLOT: &str = "users";

/// Slot holding the encrypted current-session user.
pub const SESSION_SLOT: &str = "session";

/// File extension for persisted slot files.
pub const SLOT_EXT: &str = "age";

/// Default key material for encryption at rest.
///
/// Baked into the binary, so this is obfuscation rather than secrecy:
/// anyone with the binary or the source can recover it. Override with
/// `VOCABVAULT_SECRET_KEY` or the config file for anything stronger.
pub const DEFAULT_SECRET_KEY: &str = "vocabvault_secret_key_2024";

/// Prefix for ids assigned to imported vocabulary items.
pub const IMPORT_ID_PREFIX: &str = "imported";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "VOCABVAULT_DATA_DIR";

/// Environment variable overriding the key material.
pub const SECRET_KEY_ENV: &str = "VOCABVAULT_SECRET_KEY";
