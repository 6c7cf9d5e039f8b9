mod keys;
mod signer;

pub use keys::{has_expected_prefix, validate_derivation, CosmosWallet};
pub use signer::TransactionSigner;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_generation() {
        // Test mnemonic from BIP39 spec
        let mnemonic = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        let wallet = CosmosWallet::from_mnemonic_no_passphrase(mnemonic, "empe").unwrap();

        assert!(wallet.address.starts_with("empe1"));
        // hrp (4) + separator (1) + 32 data chars + 6 checksum chars
        assert_eq!(wallet.address.len(), 43);
    }
}
