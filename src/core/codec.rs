//! Password hashing and value encryption.
//!
//! Two jobs: a one-way SHA-256 digest for credentials, and symmetric
//! encryption of serde-serializable values into ASCII-armored blobs for the
//! slot store. Encryption uses age passphrase (scrypt) recipients under the
//! configured key material.
//!
//! Decryption never errors. Wrong key, truncated armor, or a payload that is
//! not valid JSON all come back as `None`; callers treat that as a normal
//! outcome (absent session, collection to self-heal).

use std::io::{Read, Write};

use age::scrypt;
use age::secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, trace};

use crate::error::{CodecError, Result};

// Key material is a static embedded string, not a user password, so heavy
// scrypt stretching adds latency without adding secrecy.
const SCRYPT_WORK_FACTOR: u8 = 12;

/// Hash a password with SHA-256, hex-encoded.
///
/// Deterministic and one-way. Credentials are verified by comparing digests
/// for equality; there is no decode operation.
pub fn hash_password(plaintext: &str) -> String {
    hex::encode(Sha256::digest(plaintext.as_bytes()))
}

/// Symmetric codec over configurable key material.
pub struct Codec {
    passphrase: SecretString,
}

impl Codec {
    /// Create a codec from key material.
    pub fn new(secret_key: &str) -> Self {
        Self {
            passphrase: SecretString::from(secret_key.to_owned()),
        }
    }

    /// Serialize a value to JSON and encrypt it into an armored blob.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if encryption fails at any stage. Succeeds for
    /// any JSON-serializable value.
    pub fn encrypt_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let json = serde_json::to_string(value)?;
        self.encrypt_text(&json)
    }

    /// Decrypt an armored blob and deserialize the payload.
    ///
    /// Returns `None` on any failure: wrong key, corrupt or truncated
    /// ciphertext, or a payload that does not deserialize to `T`.
    pub fn decrypt_value<T: DeserializeOwned>(&self, ciphertext: &str) -> Option<T> {
        let plaintext = match self.decrypt_text(ciphertext) {
            Ok(plaintext) => plaintext,
            Err(reason) => {
                debug!(%reason, "ciphertext failed to decrypt");
                return None;
            }
        };

        match serde_json::from_str(&plaintext) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(error = %e, "decrypted payload failed to deserialize");
                None
            }
        }
    }

    fn encrypt_text(&self, plaintext: &str) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let mut recipient = scrypt::Recipient::new(self.passphrase.clone());
        recipient.set_work_factor(SCRYPT_WORK_FACTOR);

        let encryptor =
            age::Encryptor::with_recipients(std::iter::once(&recipient as &dyn age::Recipient))
                .map_err(|e| CodecError::EncryptionFailed(format!("{}", e)))?;

        let mut encrypted = Vec::new();
        let mut writer = encryptor
            .wrap_output(age::armor::ArmoredWriter::wrap_output(
                &mut encrypted,
                age::armor::Format::AsciiArmor,
            )?)
            .map_err(|e| CodecError::EncryptionFailed(format!("{}", e)))?;

        writer.write_all(plaintext.as_bytes())?;
        let armored = writer
            .finish()
            .map_err(|e| CodecError::EncryptionFailed(format!("{}", e)))?;
        armored
            .finish()
            .map_err(|e| CodecError::ArmorFailed(format!("{}", e)))?;

        trace!(ciphertext_len = encrypted.len(), "encrypted");

        String::from_utf8(encrypted)
            .map_err(|e| CodecError::EncryptionFailed(format!("UTF-8 error: {}", e)).into())
    }

    fn decrypt_text(&self, ciphertext: &str) -> std::result::Result<String, String> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let identity = scrypt::Identity::new(self.passphrase.clone());

        let reader = age::armor::ArmoredReader::new(ciphertext.as_bytes());
        let decryptor = age::Decryptor::new(reader).map_err(|e| format!("{}", e))?;

        let mut decrypted = Vec::new();
        let mut reader = decryptor
            .decrypt(std::iter::once(&identity as &dyn age::Identity))
            .map_err(|e| format!("{}", e))?;

        reader
            .read_to_end(&mut decrypted)
            .map_err(|e| format!("{}", e))?;

        String::from_utf8(decrypted).map_err(|e| format!("UTF-8 error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        count: u32,
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let codec = Codec::new("test key material");
        let record = Record {
            name: "ephemeral".to_string(),
            count: 3,
        };

        let blob = codec.encrypt_value(&record).unwrap();
        assert!(blob.contains("-----BEGIN AGE ENCRYPTED FILE-----"));

        let decoded: Record = codec.decrypt_value(&blob).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_decrypt_with_wrong_key_is_none() {
        let codec = Codec::new("key one");
        let other = Codec::new("key two");

        let blob = codec.encrypt_value(&vec!["a", "b"]).unwrap();
        let decoded: Option<Vec<String>> = other.decrypt_value(&blob);
        assert!(decoded.is_none());
    }

    #[test]
    fn test_decrypt_garbage_is_none() {
        let codec = Codec::new("test key material");
        let decoded: Option<Vec<String>> = codec.decrypt_value("not a ciphertext");
        assert!(decoded.is_none());
    }

    #[test]
    fn test_decrypt_truncated_armor_is_none() {
        let codec = Codec::new("test key material");
        let blob = codec.encrypt_value(&vec![1, 2, 3]).unwrap();
        let truncated = &blob[..blob.len() / 2];

        let decoded: Option<Vec<i32>> = codec.decrypt_value(truncated);
        assert!(decoded.is_none());
    }

    #[test]
    fn test_decrypt_wrong_shape_is_none() {
        let codec = Codec::new("test key material");
        let blob = codec.encrypt_value("just a string").unwrap();

        let decoded: Option<Record> = codec.decrypt_value(&blob);
        assert!(decoded.is_none());
    }

    #[test]
    fn test_hash_password_deterministic() {
        assert_eq!(hash_password("correct horse"), hash_password("correct horse"));
        assert_ne!(hash_password("correct horse"), hash_password("Correct horse"));
    }

    #[test]
    fn test_hash_password_known_vector() {
        assert_eq!(
            hash_password("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }
}
