// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet key material and transaction signing.
//!
//! Wallets are ed25519 keypairs. The secret key travels through the API as a
//! 64-byte array (secret half followed by public half), and public keys are
//! rendered as base58 strings.

use ed25519_dalek::{Signature, Signer, SigningKey};
use rand::rngs::OsRng;

/// Length of a full keypair byte array (32-byte secret + 32-byte public).
pub const KEYPAIR_BYTES_LEN: usize = 64;

/// An ed25519 signer bound to one keypair.
#[derive(Clone)]
pub struct WalletSigner {
    signing_key: SigningKey,
}

impl WalletSigner {
    /// Generate a fresh keypair from the OS RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Reconstruct a signer from a 64-byte keypair array.
    ///
    /// The public half must match the secret half; mismatched halves are
    /// rejected rather than silently recomputed.
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self, SignerError> {
        let array: &[u8; KEYPAIR_BYTES_LEN] = bytes
            .try_into()
            .map_err(|_| SignerError::InvalidLength(bytes.len()))?;

        let signing_key = SigningKey::from_keypair_bytes(array)
            .map_err(|e| SignerError::InvalidKey(e.to_string()))?;

        Ok(Self { signing_key })
    }

    /// Base58 public key of this signer.
    pub fn public_key(&self) -> String {
        bs58::encode(self.signing_key.verifying_key().to_bytes()).into_string()
    }

    /// The full 64-byte keypair array (secret half followed by public half).
    pub fn secret_key_bytes(&self) -> Vec<u8> {
        self.signing_key.to_keypair_bytes().to_vec()
    }

    /// Produce a detached signature over `message`.
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing_key.sign(message)
    }
}

impl std::fmt::Debug for WalletSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material stays out of logs.
        f.debug_struct("WalletSigner")
            .field("public_key", &self.public_key())
            .finish()
    }
}

/// Errors from keypair parsing.
#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    #[error("Secret key must be {KEYPAIR_BYTES_LEN} bytes, got {0}")]
    InvalidLength(usize),

    #[error("Invalid keypair: {0}")]
    InvalidKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::Verifier;

    #[test]
    fn generate_then_reconstruct_keeps_public_key() {
        let signer = WalletSigner::generate();
        let bytes = signer.secret_key_bytes();
        assert_eq!(bytes.len(), KEYPAIR_BYTES_LEN);

        let restored = WalletSigner::from_secret_bytes(&bytes).unwrap();
        assert_eq!(restored.public_key(), signer.public_key());
    }

    #[test]
    fn rejects_wrong_length() {
        let err = WalletSigner::from_secret_bytes(&[0u8; 32]).unwrap_err();
        assert!(matches!(err, SignerError::InvalidLength(32)));
    }

    #[test]
    fn rejects_mismatched_halves() {
        let a = WalletSigner::generate();
        let b = WalletSigner::generate();

        let mut bytes = a.secret_key_bytes();
        bytes[32..].copy_from_slice(&b.secret_key_bytes()[32..]);

        let err = WalletSigner::from_secret_bytes(&bytes).unwrap_err();
        assert!(matches!(err, SignerError::InvalidKey(_)));
    }

    #[test]
    fn signatures_verify_against_public_key() {
        let signer = WalletSigner::generate();
        let message = b"bundle bytes";
        let signature = signer.sign(message);

        let public = bs58::decode(signer.public_key()).into_vec().unwrap();
        let verifying = ed25519_dalek::VerifyingKey::from_bytes(
            public.as_slice().try_into().unwrap(),
        )
        .unwrap();
        assert!(verifying.verify(message, &signature).is_ok());
    }

    #[test]
    fn debug_output_hides_secret_material() {
        let signer = WalletSigner::generate();
        let rendered = format!("{signer:?}");
        assert!(rendered.contains(&signer.public_key()));
        // 64 secret bytes would render as a long decimal list.
        assert!(!rendered.contains("signing_key"));
    }
}
