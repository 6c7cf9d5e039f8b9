use anyhow::Result;
use secp256k1::{Message, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};

/// Transaction signer for Cosmos SDK chains.
/// SIGN_MODE_DIRECT: sha256 over the SignDoc bytes, compact 64-byte ECDSA
/// signature, no recovery byte.
pub struct TransactionSigner {
    secp: Secp256k1<secp256k1::All>,
}

impl TransactionSigner {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }

    /// Sign encoded SignDoc bytes with a private key.
    pub fn sign_sign_doc(&self, sign_doc_bytes: &[u8], private_key: &SecretKey) -> Result<Vec<u8>> {
        let hash: [u8; 32] = Sha256::digest(sign_doc_bytes).into();
        self.sign_digest(&hash, private_key)
    }

    /// Sign a pre-computed 32-byte digest.
    pub fn sign_digest(&self, digest: &[u8; 32], private_key: &SecretKey) -> Result<Vec<u8>> {
        let message = Message::from_digest_slice(digest)?;
        let signature = self.secp.sign_ecdsa(&message, private_key);
        Ok(signature.serialize_compact().to_vec())
    }
}

impl Default for TransactionSigner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::wallet::CosmosWallet;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_sign_doc_signing() {
        let wallet = CosmosWallet::from_mnemonic_no_passphrase(TEST_MNEMONIC, "empe").unwrap();
        let signer = TransactionSigner::new();
        let private_key = wallet.private_key().unwrap();

        let signature = signer
            .sign_sign_doc(b"test sign doc bytes", &private_key)
            .unwrap();

        // Compact ECDSA signature is exactly 64 bytes
        assert_eq!(signature.len(), 64);

        // Deterministic (RFC 6979)
        let signature2 = signer
            .sign_sign_doc(b"test sign doc bytes", &private_key)
            .unwrap();
        assert_eq!(signature, signature2);
    }

    #[test]
    fn test_digest_signing() {
        let wallet = CosmosWallet::from_mnemonic_no_passphrase(TEST_MNEMONIC, "empe").unwrap();
        let signer = TransactionSigner::new();
        let private_key = wallet.private_key().unwrap();

        let signature = signer.sign_digest(&[0x42u8; 32], &private_key).unwrap();
        assert_eq!(signature.len(), 64);
    }
}
