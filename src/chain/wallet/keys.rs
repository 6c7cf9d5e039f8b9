use anyhow::{bail, Result};
use bech32::Hrp;
use bip32::{ChildNumber, XPrv};
use bip39::Mnemonic;
use ripemd::Ripemd160;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// BIP44 coin type for Cosmos SDK chains (ATOM lineage).
const COSMOS_COIN_TYPE: u32 = 118;

/// HD wallet for Cosmos SDK chains.
/// Derives along m/44'/118'/0'/0/0 and encodes the account address as
/// bech32(prefix, ripemd160(sha256(compressed_pubkey))).
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct CosmosWallet {
    #[zeroize(skip)] // Public data doesn't need zeroizing
    pub address: String,

    // Private field with automatic zeroization
    private_key_bytes: [u8; 32],
    #[zeroize(skip)]
    public_key_bytes: [u8; 33],
}

impl CosmosWallet {
    /// Create a wallet from a BIP39 mnemonic phrase with optional passphrase.
    pub fn from_mnemonic(mnemonic_str: &str, passphrase: &str, prefix: &str) -> Result<Self> {
        // Parse and validate mnemonic
        let mnemonic = Mnemonic::parse(mnemonic_str.trim())?;
        let seed = mnemonic.to_seed(passphrase);

        let mut private_key = derive_private_key_bip32(&seed)?;

        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_slice(&private_key)?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);

        let address = bech32_account_address(&public_key, prefix)?;

        let mut private_key_bytes = [0u8; 32];
        private_key_bytes.copy_from_slice(&private_key);
        private_key.zeroize();

        Ok(Self {
            address,
            private_key_bytes,
            public_key_bytes: public_key.serialize(),
        })
    }

    /// Create a wallet from a BIP39 mnemonic with no passphrase.
    pub fn from_mnemonic_no_passphrase(mnemonic_str: &str, prefix: &str) -> Result<Self> {
        Self::from_mnemonic(mnemonic_str, "", prefix)
    }

    /// Get the private key as a SecretKey (for signing).
    pub fn private_key(&self) -> Result<SecretKey> {
        SecretKey::from_slice(&self.private_key_bytes)
            .map_err(|e| anyhow::anyhow!("Invalid private key: {}", e))
    }

    /// Compressed secp256k1 public key (33 bytes), as embedded in SignerInfo.
    pub fn public_key_compressed(&self) -> [u8; 33] {
        self.public_key_bytes
    }
}

/// Derive the account private key along m/44'/118'/0'/0/0.
fn derive_private_key_bip32(seed: &[u8]) -> Result<[u8; 32]> {
    let xprv = XPrv::new(seed)
        .map_err(|e| anyhow::anyhow!("Failed to create XPrv from seed: {}", e))?;

    let derived = xprv
        .derive_child(ChildNumber::new(44, true)?) // 44'
        .and_then(|k| k.derive_child(ChildNumber::new(COSMOS_COIN_TYPE, true)?)) // 118'
        .and_then(|k| k.derive_child(ChildNumber::new(0, true)?)) // 0'
        .and_then(|k| k.derive_child(ChildNumber::new(0, false)?)) // 0
        .and_then(|k| k.derive_child(ChildNumber::new(0, false)?)) // 0
        .map_err(|e| anyhow::anyhow!("Failed to derive key: {}", e))?;

    Ok(derived.to_bytes())
}

/// Standard Cosmos account address: ripemd160(sha256(compressed_pubkey)),
/// bech32-encoded under the chain's prefix.
fn bech32_account_address(public_key: &PublicKey, prefix: &str) -> Result<String> {
    let compressed = public_key.serialize();

    let sha = Sha256::digest(compressed);
    let addr_bytes = Ripemd160::digest(sha);

    let hrp = Hrp::parse(prefix)?;
    let encoded = bech32::encode::<bech32::Bech32>(hrp, &addr_bytes)?;

    Ok(encoded)
}

/// Check that `address` is well-formed bech32 under the expected prefix.
pub fn has_expected_prefix(address: &str, expected_prefix: &str) -> bool {
    match bech32::decode(address) {
        Ok((hrp, _)) => hrp.as_str() == expected_prefix,
        Err(_) => false,
    }
}

const TEST_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

/// Sanity check for the derivation pipeline, used by the wallet tests and the
/// comprehensive test binaries during bring-up.
pub fn validate_derivation(prefix: &str) -> Result<()> {
    let wallet = CosmosWallet::from_mnemonic_no_passphrase(TEST_MNEMONIC, prefix)?;

    if !wallet.address.starts_with(&format!("{}1", prefix)) {
        bail!("Invalid address prefix in {}", wallet.address);
    }

    let (_, data) = bech32::decode(&wallet.address)?;
    if data.len() != 20 {
        bail!("Invalid address payload length: expected 20, got {}", data.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_generation_with_bip32() {
        let wallet = CosmosWallet::from_mnemonic_no_passphrase(TEST_MNEMONIC, "empe").unwrap();

        assert!(wallet.address.starts_with("empe1"));
        assert_eq!(wallet.private_key_bytes.len(), 32);
        assert_eq!(wallet.public_key_bytes.len(), 33);
        // Compressed key prefix is 0x02 or 0x03
        assert!(wallet.public_key_bytes[0] == 0x02 || wallet.public_key_bytes[0] == 0x03);
    }

    #[test]
    fn test_deterministic_generation() {
        let wallet1 = CosmosWallet::from_mnemonic_no_passphrase(TEST_MNEMONIC, "empe").unwrap();
        let wallet2 = CosmosWallet::from_mnemonic_no_passphrase(TEST_MNEMONIC, "empe").unwrap();
        assert_eq!(wallet1.address, wallet2.address);

        // Same keys, different prefix: only the encoding changes
        let cosmos = CosmosWallet::from_mnemonic_no_passphrase(TEST_MNEMONIC, "cosmos").unwrap();
        let (_, empe_data) = bech32::decode(&wallet1.address).unwrap();
        let (_, cosmos_data) = bech32::decode(&cosmos.address).unwrap();
        assert_eq!(empe_data, cosmos_data);
    }

    #[test]
    fn test_wallet_with_passphrase() {
        let wallet1 = CosmosWallet::from_mnemonic(TEST_MNEMONIC, "", "empe").unwrap();
        let wallet2 = CosmosWallet::from_mnemonic(TEST_MNEMONIC, "test123", "empe").unwrap();

        // Different passphrases should produce different addresses
        assert_ne!(wallet1.address, wallet2.address);

        // But same passphrase should be deterministic
        let wallet3 = CosmosWallet::from_mnemonic(TEST_MNEMONIC, "test123", "empe").unwrap();
        assert_eq!(wallet2.address, wallet3.address);
    }

    #[test]
    fn test_prefix_check() {
        let wallet = CosmosWallet::from_mnemonic_no_passphrase(TEST_MNEMONIC, "empe").unwrap();
        assert!(has_expected_prefix(&wallet.address, "empe"));
        assert!(!has_expected_prefix(&wallet.address, "cosmos"));
        assert!(!has_expected_prefix("not-an-address", "empe"));
    }

    #[test]
    fn test_validation() {
        assert!(validate_derivation("empe").is_ok());
    }
}
