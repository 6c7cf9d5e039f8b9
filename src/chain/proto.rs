/// Wire types for the Cosmos SDK services this bot talks to.
///
/// These are hand-maintained prost structs rather than protoc output: only the
/// messages and unary RPCs we actually call are defined, with field tags taken
/// from the upstream cosmos-sdk proto files. Unknown fields in responses are
/// skipped by prost, so partial definitions decode cleanly.

pub mod google {
    pub mod protobuf {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Any {
            #[prost(string, tag = "1")]
            pub type_url: ::prost::alloc::string::String,
            #[prost(bytes = "vec", tag = "2")]
            pub value: ::prost::alloc::vec::Vec<u8>,
        }
    }
}

pub mod tendermint {
    pub mod abci {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Event {
            #[prost(string, tag = "1")]
            pub r#type: ::prost::alloc::string::String,
            #[prost(message, repeated, tag = "2")]
            pub attributes: ::prost::alloc::vec::Vec<EventAttribute>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct EventAttribute {
            #[prost(string, tag = "1")]
            pub key: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub value: ::prost::alloc::string::String,
            #[prost(bool, tag = "3")]
            pub index: bool,
        }
    }
}

pub mod cosmos {
    pub mod base {
        pub mod v1beta1 {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Coin {
                #[prost(string, tag = "1")]
                pub denom: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub amount: ::prost::alloc::string::String,
            }

            /// Decimal coin; `amount` is a fixed-point integer string scaled
            /// by 10^18.
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct DecCoin {
                #[prost(string, tag = "1")]
                pub denom: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub amount: ::prost::alloc::string::String,
            }
        }

        pub mod abci {
            pub mod v1beta1 {
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct GasInfo {
                    #[prost(uint64, tag = "1")]
                    pub gas_wanted: u64,
                    #[prost(uint64, tag = "2")]
                    pub gas_used: u64,
                }

                /// Result of a delivered transaction. `logs` (7) and `tx` (11)
                /// are omitted; prost skips them on decode.
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct TxResponse {
                    #[prost(int64, tag = "1")]
                    pub height: i64,
                    #[prost(string, tag = "2")]
                    pub txhash: ::prost::alloc::string::String,
                    #[prost(string, tag = "3")]
                    pub codespace: ::prost::alloc::string::String,
                    #[prost(uint32, tag = "4")]
                    pub code: u32,
                    #[prost(string, tag = "5")]
                    pub data: ::prost::alloc::string::String,
                    #[prost(string, tag = "6")]
                    pub raw_log: ::prost::alloc::string::String,
                    #[prost(string, tag = "8")]
                    pub info: ::prost::alloc::string::String,
                    #[prost(int64, tag = "9")]
                    pub gas_wanted: i64,
                    #[prost(int64, tag = "10")]
                    pub gas_used: i64,
                    #[prost(string, tag = "12")]
                    pub timestamp: ::prost::alloc::string::String,
                    #[prost(message, repeated, tag = "13")]
                    pub events:
                        ::prost::alloc::vec::Vec<crate::chain::proto::tendermint::abci::Event>,
                }
            }
        }
    }

    pub mod crypto {
        pub mod secp256k1 {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct PubKey {
                #[prost(bytes = "vec", tag = "1")]
                pub key: ::prost::alloc::vec::Vec<u8>,
            }
        }
    }

    pub mod bank {
        pub mod v1beta1 {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgSend {
                #[prost(string, tag = "1")]
                pub from_address: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub to_address: ::prost::alloc::string::String,
                #[prost(message, repeated, tag = "3")]
                pub amount: ::prost::alloc::vec::Vec<super::super::base::v1beta1::Coin>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct QueryBalanceRequest {
                #[prost(string, tag = "1")]
                pub address: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub denom: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct QueryBalanceResponse {
                #[prost(message, optional, tag = "1")]
                pub balance: ::core::option::Option<super::super::base::v1beta1::Coin>,
            }

            pub mod query_client {
                use tonic::codegen::*;

                #[derive(Debug, Clone)]
                pub struct QueryClient<T> {
                    inner: tonic::client::Grpc<T>,
                }

                impl<T> QueryClient<T>
                where
                    T: tonic::client::GrpcService<tonic::body::BoxBody>,
                    T::Error: Into<StdError>,
                    T::ResponseBody: Body<Data = Bytes> + Send + 'static,
                    <T::ResponseBody as Body>::Error: Into<StdError> + Send,
                {
                    pub fn new(inner: T) -> Self {
                        let inner = tonic::client::Grpc::new(inner);
                        Self { inner }
                    }

                    pub async fn balance(
                        &mut self,
                        request: impl tonic::IntoRequest<super::QueryBalanceRequest>,
                    ) -> std::result::Result<
                        tonic::Response<super::QueryBalanceResponse>,
                        tonic::Status,
                    > {
                        self.inner.ready().await.map_err(|e| {
                            tonic::Status::new(
                                tonic::Code::Unknown,
                                format!("Service was not ready: {}", e.into()),
                            )
                        })?;
                        let codec = tonic::codec::ProstCodec::default();
                        let path = http::uri::PathAndQuery::from_static(
                            "/cosmos.bank.v1beta1.Query/Balance",
                        );
                        let mut req = request.into_request();
                        req.extensions_mut()
                            .insert(GrpcMethod::new("cosmos.bank.v1beta1.Query", "Balance"));
                        self.inner.unary(req, path, codec).await
                    }
                }
            }
        }
    }

    pub mod staking {
        pub mod v1beta1 {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgDelegate {
                #[prost(string, tag = "1")]
                pub delegator_address: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub validator_address: ::prost::alloc::string::String,
                #[prost(message, optional, tag = "3")]
                pub amount: ::core::option::Option<super::super::base::v1beta1::Coin>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Delegation {
                #[prost(string, tag = "1")]
                pub delegator_address: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub validator_address: ::prost::alloc::string::String,
                #[prost(string, tag = "3")]
                pub shares: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct DelegationResponse {
                #[prost(message, optional, tag = "1")]
                pub delegation: ::core::option::Option<Delegation>,
                #[prost(message, optional, tag = "2")]
                pub balance: ::core::option::Option<super::super::base::v1beta1::Coin>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct QueryDelegatorDelegationsRequest {
                #[prost(string, tag = "1")]
                pub delegator_addr: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct QueryDelegatorDelegationsResponse {
                #[prost(message, repeated, tag = "1")]
                pub delegation_responses: ::prost::alloc::vec::Vec<DelegationResponse>,
            }

            pub mod query_client {
                use tonic::codegen::*;

                #[derive(Debug, Clone)]
                pub struct QueryClient<T> {
                    inner: tonic::client::Grpc<T>,
                }

                impl<T> QueryClient<T>
                where
                    T: tonic::client::GrpcService<tonic::body::BoxBody>,
                    T::Error: Into<StdError>,
                    T::ResponseBody: Body<Data = Bytes> + Send + 'static,
                    <T::ResponseBody as Body>::Error: Into<StdError> + Send,
                {
                    pub fn new(inner: T) -> Self {
                        let inner = tonic::client::Grpc::new(inner);
                        Self { inner }
                    }

                    pub async fn delegator_delegations(
                        &mut self,
                        request: impl tonic::IntoRequest<
                            super::QueryDelegatorDelegationsRequest,
                        >,
                    ) -> std::result::Result<
                        tonic::Response<super::QueryDelegatorDelegationsResponse>,
                        tonic::Status,
                    > {
                        self.inner.ready().await.map_err(|e| {
                            tonic::Status::new(
                                tonic::Code::Unknown,
                                format!("Service was not ready: {}", e.into()),
                            )
                        })?;
                        let codec = tonic::codec::ProstCodec::default();
                        let path = http::uri::PathAndQuery::from_static(
                            "/cosmos.staking.v1beta1.Query/DelegatorDelegations",
                        );
                        let mut req = request.into_request();
                        req.extensions_mut().insert(GrpcMethod::new(
                            "cosmos.staking.v1beta1.Query",
                            "DelegatorDelegations",
                        ));
                        self.inner.unary(req, path, codec).await
                    }
                }
            }
        }
    }

    pub mod distribution {
        pub mod v1beta1 {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgWithdrawDelegatorReward {
                #[prost(string, tag = "1")]
                pub delegator_address: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub validator_address: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct DelegationDelegatorReward {
                #[prost(string, tag = "1")]
                pub validator_address: ::prost::alloc::string::String,
                #[prost(message, repeated, tag = "2")]
                pub reward: ::prost::alloc::vec::Vec<super::super::base::v1beta1::DecCoin>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct QueryDelegationTotalRewardsRequest {
                #[prost(string, tag = "1")]
                pub delegator_address: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct QueryDelegationTotalRewardsResponse {
                #[prost(message, repeated, tag = "1")]
                pub rewards: ::prost::alloc::vec::Vec<DelegationDelegatorReward>,
                #[prost(message, repeated, tag = "2")]
                pub total: ::prost::alloc::vec::Vec<super::super::base::v1beta1::DecCoin>,
            }

            pub mod query_client {
                use tonic::codegen::*;

                #[derive(Debug, Clone)]
                pub struct QueryClient<T> {
                    inner: tonic::client::Grpc<T>,
                }

                impl<T> QueryClient<T>
                where
                    T: tonic::client::GrpcService<tonic::body::BoxBody>,
                    T::Error: Into<StdError>,
                    T::ResponseBody: Body<Data = Bytes> + Send + 'static,
                    <T::ResponseBody as Body>::Error: Into<StdError> + Send,
                {
                    pub fn new(inner: T) -> Self {
                        let inner = tonic::client::Grpc::new(inner);
                        Self { inner }
                    }

                    pub async fn delegation_total_rewards(
                        &mut self,
                        request: impl tonic::IntoRequest<
                            super::QueryDelegationTotalRewardsRequest,
                        >,
                    ) -> std::result::Result<
                        tonic::Response<super::QueryDelegationTotalRewardsResponse>,
                        tonic::Status,
                    > {
                        self.inner.ready().await.map_err(|e| {
                            tonic::Status::new(
                                tonic::Code::Unknown,
                                format!("Service was not ready: {}", e.into()),
                            )
                        })?;
                        let codec = tonic::codec::ProstCodec::default();
                        let path = http::uri::PathAndQuery::from_static(
                            "/cosmos.distribution.v1beta1.Query/DelegationTotalRewards",
                        );
                        let mut req = request.into_request();
                        req.extensions_mut().insert(GrpcMethod::new(
                            "cosmos.distribution.v1beta1.Query",
                            "DelegationTotalRewards",
                        ));
                        self.inner.unary(req, path, codec).await
                    }
                }
            }
        }
    }

    pub mod auth {
        pub mod v1beta1 {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct BaseAccount {
                #[prost(string, tag = "1")]
                pub address: ::prost::alloc::string::String,
                #[prost(message, optional, tag = "2")]
                pub pub_key:
                    ::core::option::Option<crate::chain::proto::google::protobuf::Any>,
                #[prost(uint64, tag = "3")]
                pub account_number: u64,
                #[prost(uint64, tag = "4")]
                pub sequence: u64,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct QueryAccountRequest {
                #[prost(string, tag = "1")]
                pub address: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct QueryAccountResponse {
                #[prost(message, optional, tag = "1")]
                pub account:
                    ::core::option::Option<crate::chain::proto::google::protobuf::Any>,
            }

            pub mod query_client {
                use tonic::codegen::*;

                #[derive(Debug, Clone)]
                pub struct QueryClient<T> {
                    inner: tonic::client::Grpc<T>,
                }

                impl<T> QueryClient<T>
                where
                    T: tonic::client::GrpcService<tonic::body::BoxBody>,
                    T::Error: Into<StdError>,
                    T::ResponseBody: Body<Data = Bytes> + Send + 'static,
                    <T::ResponseBody as Body>::Error: Into<StdError> + Send,
                {
                    pub fn new(inner: T) -> Self {
                        let inner = tonic::client::Grpc::new(inner);
                        Self { inner }
                    }

                    pub async fn account(
                        &mut self,
                        request: impl tonic::IntoRequest<super::QueryAccountRequest>,
                    ) -> std::result::Result<
                        tonic::Response<super::QueryAccountResponse>,
                        tonic::Status,
                    > {
                        self.inner.ready().await.map_err(|e| {
                            tonic::Status::new(
                                tonic::Code::Unknown,
                                format!("Service was not ready: {}", e.into()),
                            )
                        })?;
                        let codec = tonic::codec::ProstCodec::default();
                        let path = http::uri::PathAndQuery::from_static(
                            "/cosmos.auth.v1beta1.Query/Account",
                        );
                        let mut req = request.into_request();
                        req.extensions_mut()
                            .insert(GrpcMethod::new("cosmos.auth.v1beta1.Query", "Account"));
                        self.inner.unary(req, path, codec).await
                    }
                }
            }
        }
    }

    pub mod tx {
        pub mod v1beta1 {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct TxBody {
                #[prost(message, repeated, tag = "1")]
                pub messages:
                    ::prost::alloc::vec::Vec<crate::chain::proto::google::protobuf::Any>,
                #[prost(string, tag = "2")]
                pub memo: ::prost::alloc::string::String,
                #[prost(uint64, tag = "3")]
                pub timeout_height: u64,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Fee {
                #[prost(message, repeated, tag = "1")]
                pub amount: ::prost::alloc::vec::Vec<super::super::base::v1beta1::Coin>,
                #[prost(uint64, tag = "2")]
                pub gas_limit: u64,
                #[prost(string, tag = "3")]
                pub payer: ::prost::alloc::string::String,
                #[prost(string, tag = "4")]
                pub granter: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct SignerInfo {
                #[prost(message, optional, tag = "1")]
                pub public_key:
                    ::core::option::Option<crate::chain::proto::google::protobuf::Any>,
                #[prost(message, optional, tag = "2")]
                pub mode_info: ::core::option::Option<ModeInfo>,
                #[prost(uint64, tag = "3")]
                pub sequence: u64,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct ModeInfo {
                #[prost(oneof = "mode_info::Sum", tags = "1")]
                pub sum: ::core::option::Option<mode_info::Sum>,
            }

            pub mod mode_info {
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct Single {
                    #[prost(int32, tag = "1")]
                    pub mode: i32,
                }

                #[derive(Clone, PartialEq, ::prost::Oneof)]
                pub enum Sum {
                    #[prost(message, tag = "1")]
                    Single(Single),
                }
            }

            /// SIGN_MODE_DIRECT from cosmos.tx.signing.v1beta1.SignMode.
            pub const SIGN_MODE_DIRECT: i32 = 1;

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct AuthInfo {
                #[prost(message, repeated, tag = "1")]
                pub signer_infos: ::prost::alloc::vec::Vec<SignerInfo>,
                #[prost(message, optional, tag = "2")]
                pub fee: ::core::option::Option<Fee>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct SignDoc {
                #[prost(bytes = "vec", tag = "1")]
                pub body_bytes: ::prost::alloc::vec::Vec<u8>,
                #[prost(bytes = "vec", tag = "2")]
                pub auth_info_bytes: ::prost::alloc::vec::Vec<u8>,
                #[prost(string, tag = "3")]
                pub chain_id: ::prost::alloc::string::String,
                #[prost(uint64, tag = "4")]
                pub account_number: u64,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct TxRaw {
                #[prost(bytes = "vec", tag = "1")]
                pub body_bytes: ::prost::alloc::vec::Vec<u8>,
                #[prost(bytes = "vec", tag = "2")]
                pub auth_info_bytes: ::prost::alloc::vec::Vec<u8>,
                #[prost(bytes = "vec", repeated, tag = "3")]
                pub signatures: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
            }

            #[derive(Clone, Copy, Debug, PartialEq, Eq, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum BroadcastMode {
                Unspecified = 0,
                Block = 1,
                Sync = 2,
                Async = 3,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct SimulateRequest {
                /// `tx` (1) is deprecated upstream and never sent.
                #[prost(bytes = "vec", tag = "2")]
                pub tx_bytes: ::prost::alloc::vec::Vec<u8>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct SimulateResponse {
                #[prost(message, optional, tag = "1")]
                pub gas_info:
                    ::core::option::Option<super::super::base::abci::v1beta1::GasInfo>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct BroadcastTxRequest {
                #[prost(bytes = "vec", tag = "1")]
                pub tx_bytes: ::prost::alloc::vec::Vec<u8>,
                #[prost(enumeration = "BroadcastMode", tag = "2")]
                pub mode: i32,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct BroadcastTxResponse {
                #[prost(message, optional, tag = "1")]
                pub tx_response:
                    ::core::option::Option<super::super::base::abci::v1beta1::TxResponse>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct GetTxRequest {
                #[prost(string, tag = "1")]
                pub hash: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct GetTxResponse {
                #[prost(message, optional, tag = "2")]
                pub tx_response:
                    ::core::option::Option<super::super::base::abci::v1beta1::TxResponse>,
            }

            pub mod service_client {
                use tonic::codegen::*;

                #[derive(Debug, Clone)]
                pub struct ServiceClient<T> {
                    inner: tonic::client::Grpc<T>,
                }

                impl<T> ServiceClient<T>
                where
                    T: tonic::client::GrpcService<tonic::body::BoxBody>,
                    T::Error: Into<StdError>,
                    T::ResponseBody: Body<Data = Bytes> + Send + 'static,
                    <T::ResponseBody as Body>::Error: Into<StdError> + Send,
                {
                    pub fn new(inner: T) -> Self {
                        let inner = tonic::client::Grpc::new(inner);
                        Self { inner }
                    }

                    pub async fn simulate(
                        &mut self,
                        request: impl tonic::IntoRequest<super::SimulateRequest>,
                    ) -> std::result::Result<
                        tonic::Response<super::SimulateResponse>,
                        tonic::Status,
                    > {
                        self.inner.ready().await.map_err(|e| {
                            tonic::Status::new(
                                tonic::Code::Unknown,
                                format!("Service was not ready: {}", e.into()),
                            )
                        })?;
                        let codec = tonic::codec::ProstCodec::default();
                        let path = http::uri::PathAndQuery::from_static(
                            "/cosmos.tx.v1beta1.Service/Simulate",
                        );
                        let mut req = request.into_request();
                        req.extensions_mut()
                            .insert(GrpcMethod::new("cosmos.tx.v1beta1.Service", "Simulate"));
                        self.inner.unary(req, path, codec).await
                    }

                    pub async fn broadcast_tx(
                        &mut self,
                        request: impl tonic::IntoRequest<super::BroadcastTxRequest>,
                    ) -> std::result::Result<
                        tonic::Response<super::BroadcastTxResponse>,
                        tonic::Status,
                    > {
                        self.inner.ready().await.map_err(|e| {
                            tonic::Status::new(
                                tonic::Code::Unknown,
                                format!("Service was not ready: {}", e.into()),
                            )
                        })?;
                        let codec = tonic::codec::ProstCodec::default();
                        let path = http::uri::PathAndQuery::from_static(
                            "/cosmos.tx.v1beta1.Service/BroadcastTx",
                        );
                        let mut req = request.into_request();
                        req.extensions_mut().insert(GrpcMethod::new(
                            "cosmos.tx.v1beta1.Service",
                            "BroadcastTx",
                        ));
                        self.inner.unary(req, path, codec).await
                    }

                    pub async fn get_tx(
                        &mut self,
                        request: impl tonic::IntoRequest<super::GetTxRequest>,
                    ) -> std::result::Result<
                        tonic::Response<super::GetTxResponse>,
                        tonic::Status,
                    > {
                        self.inner.ready().await.map_err(|e| {
                            tonic::Status::new(
                                tonic::Code::Unknown,
                                format!("Service was not ready: {}", e.into()),
                            )
                        })?;
                        let codec = tonic::codec::ProstCodec::default();
                        let path = http::uri::PathAndQuery::from_static(
                            "/cosmos.tx.v1beta1.Service/GetTx",
                        );
                        let mut req = request.into_request();
                        req.extensions_mut()
                            .insert(GrpcMethod::new("cosmos.tx.v1beta1.Service", "GetTx"));
                        self.inner.unary(req, path, codec).await
                    }
                }
            }
        }
    }
}

// Re-export commonly used types for convenience
pub use cosmos::auth::v1beta1::{
    query_client::QueryClient as AuthQueryClient, BaseAccount, QueryAccountRequest,
};
pub use cosmos::bank::v1beta1::{
    query_client::QueryClient as BankQueryClient, MsgSend, QueryBalanceRequest,
};
pub use cosmos::base::abci::v1beta1::TxResponse;
pub use cosmos::base::v1beta1::{Coin, DecCoin};
pub use cosmos::crypto::secp256k1::PubKey;
pub use cosmos::distribution::v1beta1::{
    query_client::QueryClient as DistributionQueryClient, MsgWithdrawDelegatorReward,
    QueryDelegationTotalRewardsRequest,
};
pub use cosmos::staking::v1beta1::{
    query_client::QueryClient as StakingQueryClient, MsgDelegate,
    QueryDelegatorDelegationsRequest,
};
pub use cosmos::tx::v1beta1::{
    service_client::ServiceClient, AuthInfo, BroadcastMode, BroadcastTxRequest, Fee, GetTxRequest,
    ModeInfo, SignDoc, SignerInfo, SimulateRequest, TxBody, TxRaw, SIGN_MODE_DIRECT,
};
pub use google::protobuf::Any;
pub use tendermint::abci::{Event, EventAttribute};
