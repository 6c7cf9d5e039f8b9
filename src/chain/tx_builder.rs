/// Transaction builder for Cosmos SDK SIGN_MODE_DIRECT transactions.
use anyhow::Result;
use prost::Message;

use crate::chain::proto::{
    cosmos::tx::v1beta1::mode_info, Any, AuthInfo, Coin, Fee, ModeInfo, PubKey, SignDoc,
    SignerInfo, TxBody, TxRaw, SIGN_MODE_DIRECT,
};
use crate::chain::wallet::{CosmosWallet, TransactionSigner};

pub struct TxBuilder<'a> {
    chain_id: String,
    account_number: u64,
    sequence: u64,
    wallet: &'a CosmosWallet,
    signer: TransactionSigner,
}

impl<'a> TxBuilder<'a> {
    pub fn new(
        chain_id: String,
        account_number: u64,
        sequence: u64,
        wallet: &'a CosmosWallet,
    ) -> Self {
        Self {
            chain_id,
            account_number,
            sequence,
            wallet,
            signer: TransactionSigner::new(),
        }
    }

    /// Build a complete signed transaction ready for broadcast.
    pub fn build_signed_tx(&self, messages: Vec<Any>, fee: Fee, memo: &str) -> Result<Vec<u8>> {
        let (body_bytes, auth_info_bytes) = self.encode_body_and_auth(messages, fee, memo)?;

        let sign_doc = SignDoc {
            body_bytes: body_bytes.clone(),
            auth_info_bytes: auth_info_bytes.clone(),
            chain_id: self.chain_id.clone(),
            account_number: self.account_number,
        };

        let sign_doc_bytes = sign_doc.encode_to_vec();
        let private_key = self.wallet.private_key()?;
        let signature = self.signer.sign_sign_doc(&sign_doc_bytes, &private_key)?;

        let tx_raw = TxRaw {
            body_bytes,
            auth_info_bytes,
            signatures: vec![signature],
        };

        Ok(tx_raw.encode_to_vec())
    }

    /// Build an unsigned transaction for gas simulation: same body and signer
    /// info, empty signature. The node only needs the signer's pubkey and
    /// sequence to run the ante handlers in simulate mode.
    pub fn build_simulate_tx(&self, messages: Vec<Any>, memo: &str) -> Result<Vec<u8>> {
        let fee = Fee {
            amount: vec![],
            gas_limit: 0,
            payer: String::new(),
            granter: String::new(),
        };
        let (body_bytes, auth_info_bytes) = self.encode_body_and_auth(messages, fee, memo)?;

        let tx_raw = TxRaw {
            body_bytes,
            auth_info_bytes,
            signatures: vec![vec![]],
        };

        Ok(tx_raw.encode_to_vec())
    }

    fn encode_body_and_auth(
        &self,
        messages: Vec<Any>,
        fee: Fee,
        memo: &str,
    ) -> Result<(Vec<u8>, Vec<u8>)> {
        let tx_body = TxBody {
            messages,
            memo: memo.to_string(),
            timeout_height: 0,
        };

        let pub_key_msg = PubKey {
            key: self.wallet.public_key_compressed().to_vec(),
        };
        let pub_key_any = Any {
            type_url: "/cosmos.crypto.secp256k1.PubKey".to_string(),
            value: pub_key_msg.encode_to_vec(),
        };

        let signer_info = SignerInfo {
            public_key: Some(pub_key_any),
            mode_info: Some(ModeInfo {
                sum: Some(mode_info::Sum::Single(mode_info::Single {
                    mode: SIGN_MODE_DIRECT,
                })),
            }),
            sequence: self.sequence,
        };

        let auth_info = AuthInfo {
            signer_infos: vec![signer_info],
            fee: Some(fee),
        };

        Ok((tx_body.encode_to_vec(), auth_info.encode_to_vec()))
    }
}

/// Build the Fee proto from an already-computed fee amount and gas limit.
pub fn fee_from_amount(fee_amount: u64, gas_limit: u64, denom: &str) -> Fee {
    Fee {
        amount: vec![Coin {
            denom: denom.to_string(),
            amount: fee_amount.to_string(),
        }],
        gas_limit,
        payer: String::new(),
        granter: String::new(),
    }
}
