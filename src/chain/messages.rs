/// Intent-to-message mapping: turns a high-level action (send, delegate,
/// claim) into the protobuf `Any` messages the chain expects.
use prost::Message;

use crate::chain::proto::{Any, Coin, MsgDelegate, MsgSend, MsgWithdrawDelegatorReward};

pub const MSG_SEND_TYPE_URL: &str = "/cosmos.bank.v1beta1.MsgSend";
pub const MSG_DELEGATE_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgDelegate";
pub const MSG_WITHDRAW_REWARD_TYPE_URL: &str =
    "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward";

/// The two looped dispatch intents. Claims are batch-built separately via
/// [`withdraw_reward_messages`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Send,
    Delegate,
}

impl TxKind {
    pub fn verb(&self) -> &'static str {
        match self {
            TxKind::Send => "send",
            TxKind::Delegate => "delegate",
        }
    }
}

fn pack<M: Message>(type_url: &str, msg: &M) -> Any {
    Any {
        type_url: type_url.to_string(),
        value: msg.encode_to_vec(),
    }
}

/// One token transfer of `amount` base units from `from` to `to`.
pub fn send_message(from: &str, to: &str, amount: u64, denom: &str) -> Any {
    let msg = MsgSend {
        from_address: from.to_string(),
        to_address: to.to_string(),
        amount: vec![Coin {
            denom: denom.to_string(),
            amount: amount.to_string(),
        }],
    };
    pack(MSG_SEND_TYPE_URL, &msg)
}

/// One delegation of `amount` base units from `delegator` to `validator`.
pub fn delegate_message(delegator: &str, validator: &str, amount: u64, denom: &str) -> Any {
    let msg = MsgDelegate {
        delegator_address: delegator.to_string(),
        validator_address: validator.to_string(),
        amount: Some(Coin {
            denom: denom.to_string(),
            amount: amount.to_string(),
        }),
    };
    pack(MSG_DELEGATE_TYPE_URL, &msg)
}

/// Build the message for a single dispatch work item.
pub fn build_for_kind(kind: TxKind, actor: &str, target: &str, amount: u64, denom: &str) -> Any {
    match kind {
        TxKind::Send => send_message(actor, target, amount, denom),
        TxKind::Delegate => delegate_message(actor, target, amount, denom),
    }
}

/// One withdrawal message per validator, all destined for the same
/// transaction so they share one gas estimate and one fee.
pub fn withdraw_reward_messages(delegator: &str, validators: &[String]) -> Vec<Any> {
    validators
        .iter()
        .map(|validator| {
            let msg = MsgWithdrawDelegatorReward {
                delegator_address: delegator.to_string(),
                validator_address: validator.to_string(),
            };
            pack(MSG_WITHDRAW_REWARD_TYPE_URL, &msg)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_shape() {
        let any = send_message("empe1sender", "empe1recipient", 42, "uempe");
        assert_eq!(any.type_url, MSG_SEND_TYPE_URL);

        let decoded = MsgSend::decode(any.value.as_slice()).unwrap();
        assert_eq!(decoded.from_address, "empe1sender");
        assert_eq!(decoded.to_address, "empe1recipient");
        assert_eq!(decoded.amount.len(), 1);
        assert_eq!(decoded.amount[0].amount, "42");
        assert_eq!(decoded.amount[0].denom, "uempe");
    }

    #[test]
    fn test_delegate_message_shape() {
        let any = delegate_message("empe1delegator", "empevaloper1abc", 500, "uempe");
        assert_eq!(any.type_url, MSG_DELEGATE_TYPE_URL);

        let decoded = MsgDelegate::decode(any.value.as_slice()).unwrap();
        assert_eq!(decoded.delegator_address, "empe1delegator");
        assert_eq!(decoded.validator_address, "empevaloper1abc");
        assert_eq!(decoded.amount.unwrap().amount, "500");
    }

    #[test]
    fn test_withdraw_messages_one_per_validator() {
        let validators = vec![
            "empevaloper1aaa".to_string(),
            "empevaloper1bbb".to_string(),
            "empevaloper1ccc".to_string(),
        ];
        let msgs = withdraw_reward_messages("empe1delegator", &validators);

        assert_eq!(msgs.len(), 3);
        for (any, validator) in msgs.iter().zip(&validators) {
            assert_eq!(any.type_url, MSG_WITHDRAW_REWARD_TYPE_URL);
            let decoded = MsgWithdrawDelegatorReward::decode(any.value.as_slice()).unwrap();
            assert_eq!(&decoded.validator_address, validator);
            assert_eq!(decoded.delegator_address, "empe1delegator");
        }
    }

    #[test]
    fn test_kind_dispatch() {
        let send = build_for_kind(TxKind::Send, "empe1a", "empe1b", 7, "uempe");
        assert_eq!(send.type_url, MSG_SEND_TYPE_URL);

        let delegate = build_for_kind(TxKind::Delegate, "empe1a", "empevaloper1x", 7, "uempe");
        assert_eq!(delegate.type_url, MSG_DELEGATE_TYPE_URL);
    }
}
