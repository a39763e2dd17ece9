//! Error types for vocabvault.
//!
//! Grouped by layer: codec, slot store, config, auth, records. Decode
//! failures and lookups that miss are not errors at all; the core reports
//! those as `None`/`false`/empty values and reserves `Err` for environment
//! faults (filesystem, encryption, malformed config).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Encryption-side codec failures.
///
/// Decryption has no error type: a ciphertext that fails to decrypt or
/// deserialize yields `None` from the codec.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("armor encoding failed: {0}")]
    ArmorFailed(String),
}

/// Slot store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read slot '{slot}': {source}")]
    ReadFailed {
        slot: String,
        source: std::io::Error,
    },

    #[error("failed to write slot '{slot}': {source}")]
    WriteFailed {
        slot: String,
        source: std::io::Error,
    },

    #[error("failed to clear slot '{slot}': {source}")]
    RemoveFailed {
        slot: String,
        source: std::io::Error,
    },
}

/// Configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Account and session failures surfaced by the CLI.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("not logged in")]
    NotLoggedIn,

    #[error("username, email, and password are required")]
    MissingFields,

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("password must be at least 8 characters long")]
    WeakPassword,

    #[error("username or email already exists")]
    AccountExists,

    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Record lookups the CLI treats as hard failures.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("vocabulary item not found: {0}")]
    ItemNotFound(String),

    #[error("no account matches the current session")]
    SessionUserMissing,

    #[error("import document is not a vocabulary bundle")]
    InvalidBundle,
}

pub type Result<T> = std::result::Result<T, Error>;
