//! VocabVault - an encrypted local vocabulary vault.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Store initialization
//! │   ├── auth          # signup / login / logout / whoami
//! │   ├── words         # Vocabulary CRUD commands
//! │   ├── transfer      # Bundle export/import
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── codec         # Password hashing + value encryption
//!     ├── config        # Key material and data directory
//!     ├── store/        # Slot storage backends
//!     │   ├── mod       # SlotStore trait
//!     │   ├── fs        # Filesystem slots (atomic writes)
//!     │   └── memory    # In-memory slots for tests
//!     ├── domain/       # User, vocabulary, session, bundle types
//!     └── vault/        # Record manager over the slots
//! ```
//!
//! # Features
//!
//! - Per-user vocabulary collections encrypted at rest (age passphrase
//!   encryption under configurable key material)
//! - Self-healing users slot: a corrupt collection resets to empty instead
//!   of wedging the store
//! - Portable JSON bundle export/import with merge-by-concatenation
//! - Pluggable slot storage for test substitution

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::codec::{hash_password, Codec};
pub use crate::core::vault::Vault;
