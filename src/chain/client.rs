use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tonic::Code;

use crate::chain::proto::{
    Any, AuthQueryClient, BankQueryClient, BaseAccount, BroadcastMode, BroadcastTxRequest,
    DistributionQueryClient, Fee, GetTxRequest, QueryAccountRequest, QueryBalanceRequest,
    QueryDelegationTotalRewardsRequest, QueryDelegatorDelegationsRequest, ServiceClient,
    SimulateRequest, StakingQueryClient, TxResponse,
};
use crate::chain::tx_builder::TxBuilder;
use crate::chain::wallet::CosmosWallet;
use prost::Message;

/// Configuration for the gRPC chain client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// gRPC endpoint URL (e.g., "https://grpc-testnet.empe.io:443")
    pub grpc_endpoint: String,
    /// Connection timeout in seconds
    pub connection_timeout: u64,
    /// Request timeout in seconds
    pub request_timeout: u64,
    /// Maximum retry attempts for transient query failures
    pub max_retries: u32,
    /// Chain ID (e.g., "empe-testnet-2")
    pub chain_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            grpc_endpoint: "https://grpc-testnet.empe.io:443".to_string(),
            connection_timeout: 10,
            request_timeout: 30,
            max_retries: 3,
            chain_id: "empe-testnet-2".to_string(),
        }
    }
}

/// Account information from the chain.
#[derive(Debug, Clone)]
pub struct AccountInfo {
    pub address: String,
    pub account_number: u64,
    pub sequence: u64,
}

/// One decoded event from a delivered transaction.
#[derive(Debug, Clone)]
pub struct TxEvent {
    pub kind: String,
    pub attributes: Vec<(String, String)>,
}

/// Result of a sign-and-broadcast round trip. `code == 0` means the
/// transaction was accepted; events and gas figures are only present when
/// inclusion was observed before the poll timeout.
#[derive(Debug, Clone)]
pub struct BroadcastOutcome {
    pub code: u32,
    pub tx_hash: String,
    pub raw_log: String,
    pub gas_used: Option<i64>,
    pub gas_wanted: Option<i64>,
    pub events: Vec<TxEvent>,
}

/// An active delegation, balance in base denom units.
#[derive(Debug, Clone)]
pub struct DelegationEntry {
    pub validator_address: String,
    pub amount: u128,
}

/// Pending reward for one validator, truncated to base denom units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardLine {
    pub validator_address: String,
    pub amount: u128,
}

/// Aggregate pending-rewards view for a delegator.
#[derive(Debug, Clone, Default)]
pub struct PendingRewards {
    pub rewards: Vec<RewardLine>,
    pub total: u128,
}

/// Signing/broadcast seam the dispatch engine drives. Implemented by the
/// gRPC client; tests substitute stubs.
#[async_trait]
pub trait TxClient: Send + Sync {
    /// Dry-run the messages and return simulated gas units.
    async fn simulate(&self, sender: &str, messages: &[Any], memo: &str) -> Result<u64>;

    /// Sign, broadcast, and wait for the outcome of one transaction.
    async fn sign_and_broadcast(
        &self,
        sender: &str,
        messages: Vec<Any>,
        fee: Fee,
        memo: &str,
    ) -> Result<BroadcastOutcome>;
}

/// Read-only staking/bank queries the reward aggregator and CLI consume.
#[async_trait]
pub trait StakingQuery: Send + Sync {
    async fn delegator_delegations(&self, delegator: &str) -> Result<Vec<DelegationEntry>>;
    async fn delegation_total_rewards(&self, delegator: &str, denom: &str)
        -> Result<PendingRewards>;
    async fn bank_balance(&self, address: &str, denom: &str) -> Result<u128>;
}

/// How long to poll GetTx for inclusion after a sync broadcast.
const INCLUSION_POLL_INTERVAL: Duration = Duration::from_secs(3);
const INCLUSION_POLL_ATTEMPTS: u32 = 10;

/// gRPC client for a Cosmos SDK chain.
#[derive(Clone)]
pub struct GrpcClient {
    config: ClientConfig,
    channel: Option<Channel>,
    wallet: Arc<CosmosWallet>,
}

impl GrpcClient {
    pub fn new(config: ClientConfig, wallet: CosmosWallet) -> Self {
        Self {
            config,
            channel: None,
            wallet: Arc::new(wallet),
        }
    }

    pub fn wallet_address(&self) -> &str {
        &self.wallet.address
    }

    pub fn chain_id(&self) -> &str {
        &self.config.chain_id
    }

    /// Connect to the gRPC endpoint. TLS is negotiated automatically for
    /// https endpoints.
    pub async fn connect(&mut self) -> Result<()> {
        log::info!("Connecting to {}", self.config.grpc_endpoint);

        let endpoint = Endpoint::from_shared(self.config.grpc_endpoint.clone())?
            .timeout(Duration::from_secs(self.config.request_timeout))
            .connect_timeout(Duration::from_secs(self.config.connection_timeout));

        let channel = endpoint.connect().await?;
        self.channel = Some(channel);

        log::info!("Connected to {}", self.config.chain_id);
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.channel.is_some()
    }

    fn channel(&self) -> Result<Channel> {
        self.channel
            .clone()
            .ok_or_else(|| anyhow!("Client not connected. Call connect() first."))
    }

    /// Query account number and sequence. New accounts that the chain has
    /// never seen resolve to defaults instead of an error.
    pub async fn query_account(&self, address: &str) -> Result<AccountInfo> {
        let response = self
            .with_retry(|| async {
                let channel = self.channel()?;
                let mut client = AuthQueryClient::new(channel);
                let request = tonic::Request::new(QueryAccountRequest {
                    address: address.to_string(),
                });
                client.account(request).await.map_err(|e| {
                    if e.code() == Code::NotFound {
                        return anyhow!("ACCOUNT_NOT_FOUND");
                    }
                    anyhow!("Failed to query account: {}", e)
                })
            })
            .await;

        match response {
            Ok(response) => {
                let account_any = response
                    .into_inner()
                    .account
                    .ok_or_else(|| anyhow!("Account not found"))?;

                // BaseAccount is a field-prefix of the vesting/module account
                // wrappers, so decoding it directly covers the common cases.
                let account = BaseAccount::decode(account_any.value.as_slice())
                    .map_err(|e| anyhow!("Failed to decode {}: {}", account_any.type_url, e))?;

                Ok(AccountInfo {
                    address: address.to_string(),
                    account_number: account.account_number,
                    sequence: account.sequence,
                })
            }
            Err(e) if e.to_string().contains("ACCOUNT_NOT_FOUND") => {
                log::info!("Account {} not found on chain, using defaults", address);
                Ok(AccountInfo {
                    address: address.to_string(),
                    account_number: 0,
                    sequence: 0,
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn broadcast_sync(&self, tx_bytes: Vec<u8>) -> Result<TxResponse> {
        let response = self
            .with_retry(|| async {
                let channel = self.channel()?;
                let mut client = ServiceClient::new(channel);
                let request = tonic::Request::new(BroadcastTxRequest {
                    tx_bytes: tx_bytes.clone(),
                    mode: BroadcastMode::Sync as i32,
                });
                client
                    .broadcast_tx(request)
                    .await
                    .map_err(|e| anyhow!("Failed to broadcast transaction: {}", e))
            })
            .await?;

        response
            .into_inner()
            .tx_response
            .ok_or_else(|| anyhow!("No tx response in broadcast response"))
    }

    /// Poll GetTx until the transaction lands in a block, or give up.
    async fn wait_for_inclusion(&self, hash: &str) -> Option<TxResponse> {
        for attempt in 0..INCLUSION_POLL_ATTEMPTS {
            tokio::time::sleep(INCLUSION_POLL_INTERVAL).await;

            let channel = match self.channel() {
                Ok(channel) => channel,
                Err(_) => return None,
            };
            let mut client = ServiceClient::new(channel);
            let request = tonic::Request::new(GetTxRequest {
                hash: hash.to_string(),
            });

            match client.get_tx(request).await {
                Ok(response) => {
                    if let Some(tx_response) = response.into_inner().tx_response {
                        return Some(tx_response);
                    }
                }
                Err(status) if status.code() == Code::NotFound => {
                    log::debug!("Tx {} not yet included (attempt {})", hash, attempt + 1);
                }
                Err(status) => {
                    log::warn!("GetTx failed for {}: {}", hash, status);
                }
            }
        }

        log::warn!("Gave up waiting for inclusion of {}", hash);
        None
    }

    /// Retry helper for transient network failures, linear backoff.
    async fn with_retry<T, F, Fut>(&self, f: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let mut retries = 0;
        loop {
            match f().await {
                Ok(result) => return Ok(result),
                Err(_) if retries < self.config.max_retries => {
                    retries += 1;
                    tokio::time::sleep(Duration::from_millis(100 * retries as u64)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[async_trait]
impl TxClient for GrpcClient {
    async fn simulate(&self, sender: &str, messages: &[Any], memo: &str) -> Result<u64> {
        if sender != self.wallet.address {
            return Err(anyhow!("Simulation requested for foreign address {}", sender));
        }

        let account = self.query_account(sender).await?;
        let builder = TxBuilder::new(
            self.config.chain_id.clone(),
            account.account_number,
            account.sequence,
            &self.wallet,
        );
        let tx_bytes = builder.build_simulate_tx(messages.to_vec(), memo)?;

        let response = self
            .with_retry(|| async {
                let channel = self.channel()?;
                let mut client = ServiceClient::new(channel);
                let request = tonic::Request::new(SimulateRequest {
                    tx_bytes: tx_bytes.clone(),
                });
                client
                    .simulate(request)
                    .await
                    .map_err(|e| anyhow!("Failed to simulate transaction: {}", e))
            })
            .await?;

        let gas_info = response
            .into_inner()
            .gas_info
            .ok_or_else(|| anyhow!("No gas info in simulation response"))?;

        Ok(gas_info.gas_used)
    }

    async fn sign_and_broadcast(
        &self,
        sender: &str,
        messages: Vec<Any>,
        fee: Fee,
        memo: &str,
    ) -> Result<BroadcastOutcome> {
        if sender != self.wallet.address {
            return Err(anyhow!("Broadcast requested for foreign address {}", sender));
        }

        // Always fetch a fresh sequence; local tracking drifts when a prior
        // broadcast was rejected at CheckTx.
        let account = self.query_account(sender).await?;
        log::debug!(
            "Signing with account_number={} sequence={}",
            account.account_number,
            account.sequence
        );

        let builder = TxBuilder::new(
            self.config.chain_id.clone(),
            account.account_number,
            account.sequence,
            &self.wallet,
        );
        let tx_bytes = builder.build_signed_tx(messages, fee, memo)?;

        let checktx = self.broadcast_sync(tx_bytes).await?;
        if checktx.code != 0 {
            return Ok(BroadcastOutcome {
                code: checktx.code,
                tx_hash: checktx.txhash,
                raw_log: checktx.raw_log,
                gas_used: None,
                gas_wanted: None,
                events: vec![],
            });
        }

        match self.wait_for_inclusion(&checktx.txhash).await {
            Some(delivered) => Ok(BroadcastOutcome {
                code: delivered.code,
                tx_hash: delivered.txhash,
                raw_log: delivered.raw_log,
                gas_used: Some(delivered.gas_used),
                gas_wanted: Some(delivered.gas_wanted),
                events: delivered
                    .events
                    .into_iter()
                    .map(|event| TxEvent {
                        kind: event.r#type,
                        attributes: event
                            .attributes
                            .into_iter()
                            .map(|attr| (attr.key, attr.value))
                            .collect(),
                    })
                    .collect(),
            }),
            // Accepted by CheckTx but inclusion not observed in time; report
            // the hash without delivery data.
            None => Ok(BroadcastOutcome {
                code: 0,
                tx_hash: checktx.txhash,
                raw_log: checktx.raw_log,
                gas_used: None,
                gas_wanted: None,
                events: vec![],
            }),
        }
    }
}

#[async_trait]
impl StakingQuery for GrpcClient {
    async fn delegator_delegations(&self, delegator: &str) -> Result<Vec<DelegationEntry>> {
        let response = self
            .with_retry(|| async {
                let channel = self.channel()?;
                let mut client = StakingQueryClient::new(channel);
                let request = tonic::Request::new(QueryDelegatorDelegationsRequest {
                    delegator_addr: delegator.to_string(),
                });
                client
                    .delegator_delegations(request)
                    .await
                    .map_err(|e| anyhow!("Failed to query delegations: {}", e))
            })
            .await?;

        let entries = response
            .into_inner()
            .delegation_responses
            .into_iter()
            .filter_map(|resp| {
                let delegation = resp.delegation?;
                let balance = resp.balance?;
                Some(DelegationEntry {
                    validator_address: delegation.validator_address,
                    amount: balance.amount.parse().unwrap_or(0),
                })
            })
            .collect();

        Ok(entries)
    }

    async fn delegation_total_rewards(
        &self,
        delegator: &str,
        denom: &str,
    ) -> Result<PendingRewards> {
        let response = self
            .with_retry(|| async {
                let channel = self.channel()?;
                let mut client = DistributionQueryClient::new(channel);
                let request = tonic::Request::new(QueryDelegationTotalRewardsRequest {
                    delegator_address: delegator.to_string(),
                });
                client
                    .delegation_total_rewards(request)
                    .await
                    .map_err(|e| anyhow!("Failed to query rewards: {}", e))
            })
            .await?;

        let response = response.into_inner();

        let rewards = response
            .rewards
            .into_iter()
            .map(|entry| RewardLine {
                validator_address: entry.validator_address,
                amount: entry
                    .reward
                    .iter()
                    .find(|coin| coin.denom == denom)
                    .map(|coin| parse_dec_amount(&coin.amount))
                    .unwrap_or(0),
            })
            .collect();

        let total = response
            .total
            .iter()
            .find(|coin| coin.denom == denom)
            .map(|coin| parse_dec_amount(&coin.amount))
            .unwrap_or(0);

        Ok(PendingRewards { rewards, total })
    }

    async fn bank_balance(&self, address: &str, denom: &str) -> Result<u128> {
        let response = self
            .with_retry(|| async {
                let channel = self.channel()?;
                let mut client = BankQueryClient::new(channel);
                let request = tonic::Request::new(QueryBalanceRequest {
                    address: address.to_string(),
                    denom: denom.to_string(),
                });
                client
                    .balance(request)
                    .await
                    .map_err(|e| anyhow!("Failed to query bank balance: {}", e))
            })
            .await?;

        let balance = response
            .into_inner()
            .balance
            .ok_or_else(|| anyhow!("No balance returned"))?;

        balance
            .amount
            .parse::<u128>()
            .map_err(|e| anyhow!("Failed to parse balance amount: {}", e))
    }
}

/// Truncate a cosmos Dec string to integer base units. The gRPC wire form is
/// an integer scaled by 10^18; some REST gateways render it with an explicit
/// decimal point, so both shapes are accepted.
pub fn parse_dec_amount(raw: &str) -> u128 {
    let integral = raw.split('.').next().unwrap_or("");
    match integral.parse::<u128>() {
        Ok(scaled) => scaled / 1_000_000_000_000_000_000,
        Err(_) => 0,
    }
}
